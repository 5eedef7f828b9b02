//! The storefront landing page.

use leptos::prelude::*;

use crate::cart::fmt_price;
use crate::pages::products::list_catalog;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let featured = Resource::new(|| (), |_| list_catalog(None));

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Skincare, grounded in science"</h1>
                <p>"Clinically informed routines for every skin type."</p>
                <div class="hero-actions">
                    <a href="/products" class="cta-button">"Shop the range"</a>
                    <a href="/quiz" class="cta-secondary">"Find your routine"</a>
                </div>
            </section>
            <section class="featured">
                <h2>"Featured"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        featured.get().map(|result| {
                            match result {
                                Ok(items) => view! {
                                    <div class="product-grid">
                                        {items.into_iter().take(4).map(|p| {
                                            let href = format!("/products/{}", p.id);
                                            let price = fmt_price(p.price_cents);
                                            view! {
                                                <a href=href class="product-card">
                                                    <h3>{p.name}</h3>
                                                    <p class="price">{price}</p>
                                                </a>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_any(),
                                Err(_) => view! {
                                    <p class="error">"Failed to load featured products."</p>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
