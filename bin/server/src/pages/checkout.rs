//! Checkout page and order placement.

use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::cart::{fmt_price, use_cart};
use crate::guard::Protected;
use crate::types::{NewOrder, OrderLine, OrderSummary};
use lumera_access::role::RoleSet;

/// Server function to place an order for the signed-in user.
///
/// JSON input: the nested order lines do not fit the url-encoded codec.
#[server(input = Json)]
pub async fn place_order(order: NewOrder) -> Result<OrderSummary, ServerFnError> {
    use crate::server_helpers::{get_api_client, get_authenticated_session};

    let session = get_authenticated_session()
        .await
        .map_err(|e| e.into_server_error())?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;

    let placed = api
        .place_order(session.access_token(), &order)
        .await
        .map_err(|e| e.into_server_error())?;

    tracing::info!(
        subject = %session.subject(),
        order_id = %placed.id,
        "Order placed"
    );
    Ok(placed)
}

/// Checkout page; any authenticated role may order.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <Protected allowed=RoleSet::any_authenticated().roles().to_vec()>
            <CheckoutForm/>
        </Protected>
    }
}

/// Order review and submission form.
#[component]
fn CheckoutForm() -> impl IntoView {
    let cart = use_cart();
    let navigate = use_navigate();
    let (address, set_address) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |_| {
        let contents = cart.get();
        if contents.is_empty() {
            set_error.set(Some("Your cart is empty.".to_string()));
            return;
        }
        let shipping_address = address.get();
        if shipping_address.trim().is_empty() {
            set_error.set(Some("A shipping address is required.".to_string()));
            return;
        }

        let order = NewOrder {
            lines: contents
                .lines()
                .iter()
                .map(|line| OrderLine {
                    product_id: line.product.id,
                    quantity: line.quantity,
                })
                .collect(),
            shipping_address,
        };

        let navigate = navigate.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match place_order(order).await {
                Ok(_) => {
                    cart.clear();
                    navigate("/account", Default::default());
                }
                Err(_) => {
                    set_submitting.set(false);
                    set_error.set(Some("Order could not be placed. Please try again.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            {move || {
                let total = fmt_price(cart.get().total_cents());
                view! { <p class="total">"Total: "{total}</p> }
            }}
            <div class="checkout-form">
                <label for="address">"Shipping address"</label>
                <textarea
                    id="address"
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                    prop:value=move || address.get()
                ></textarea>
                {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                <button
                    class="cta-button"
                    disabled=move || submitting.get()
                    on:click=submit
                >
                    {move || if submitting.get() { "Placing order..." } else { "Place order" }}
                </button>
            </div>
        </div>
    }
}
