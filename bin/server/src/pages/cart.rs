//! The shopping cart page.

use leptos::prelude::*;

use crate::cart::{fmt_price, use_cart};

/// Cart review page.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            {move || {
                let contents = cart.get();
                if contents.is_empty() {
                    view! {
                        <div class="empty-cart">
                            <p>"Your cart is empty."</p>
                            <a href="/products">"Browse the shop"</a>
                        </div>
                    }.into_any()
                } else {
                    let total = fmt_price(contents.total_cents());
                    view! {
                        <table class="cart-table">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Price"</th>
                                    <th>"Qty"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {contents.lines().iter().cloned().map(|line| {
                                    let id = line.product.id;
                                    let name = line.product.name.clone();
                                    let price = fmt_price(line.product.price_cents);
                                    let quantity = line.quantity;
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{price}</td>
                                            <td>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    value=quantity
                                                    on:change=move |ev| {
                                                        let quantity = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(quantity);
                                                        cart.set_quantity(id, quantity);
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <button on:click=move |_| cart.remove(id)>
                                                    "Remove"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                        <div class="cart-summary">
                            <p class="total">"Total: "{total}</p>
                            <a href="/checkout" class="cta-button">"Checkout"</a>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
