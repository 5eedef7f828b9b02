//! Product catalog pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::cart::{fmt_price, use_cart};
use crate::types::{ProductDetail, ProductSummary};

/// Server function to list the product catalog.
#[server]
pub async fn list_catalog(
    category: Option<String>,
) -> Result<Vec<ProductSummary>, ServerFnError> {
    use crate::server_helpers::get_api_client;

    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.list_products(category.as_deref())
        .await
        .map_err(|e| e.into_server_error())
}

/// Server function to fetch one product.
#[server]
pub async fn fetch_product_detail(id: String) -> Result<ProductDetail, ServerFnError> {
    use crate::server_helpers::get_api_client;
    use lumera_core::ProductId;

    let id: ProductId = id.parse().map_err(|_| ServerFnError::new("Not found"))?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.get_product(id).await.map_err(|e| e.into_server_error())
}

/// Catalog listing page with category filter.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let (category, set_category) = signal(Option::<String>::None);
    let products = Resource::new(move || category.get(), list_catalog);

    let categories = ["cleanser", "serum", "moisturizer", "sunscreen"];

    view! {
        <div class="products-page">
            <h1>"Shop"</h1>
            <nav class="category-filter">
                <button on:click=move |_| set_category.set(None)>"All"</button>
                {categories.into_iter().map(|c| view! {
                    <button on:click=move |_| set_category.set(Some(c.to_string()))>{c}</button>
                }).collect_view()}
            </nav>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products.get().map(|result| {
                        match result {
                            Ok(items) if items.is_empty() => view! {
                                <p class="empty-state">"No products in this category."</p>
                            }.into_any(),
                            Ok(items) => view! {
                                <div class="product-grid">
                                    {items.into_iter().map(|p| view! {
                                        <ProductCard product=p/>
                                    }).collect_view()}
                                </div>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Failed to load products."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Product card in the catalog grid.
#[component]
fn ProductCard(product: ProductSummary) -> impl IntoView {
    let cart = use_cart();
    let detail_href = format!("/products/{}", product.id);
    let price = fmt_price(product.price_cents);
    let for_cart = product.clone();

    view! {
        <div class="product-card">
            <a href=detail_href>
                {product.image_url.clone().map(|url| view! { <img src=url alt=product.name.clone()/> })}
                <h3>{product.name.clone()}</h3>
                <p class="brand">{product.brand.clone()}</p>
                <p class="price">{price}</p>
            </a>
            <button class="add-to-cart" on:click=move |_| cart.add(for_cart.clone())>
                "Add to cart"
            </button>
        </div>
    }
}

/// Product detail page.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product = Resource::new(
        move || params.read().get("id").unwrap_or_default(),
        fetch_product_detail,
    );

    view! {
        <div class="product-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    product.get().map(|result| {
                        match result {
                            Ok(detail) => view! {
                                <ProductDetailView detail=detail/>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Product not found."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Product detail content.
#[component]
fn ProductDetailView(detail: ProductDetail) -> impl IntoView {
    let cart = use_cart();
    let price = fmt_price(detail.price_cents);
    let summary = ProductSummary {
        id: detail.id,
        name: detail.name.clone(),
        brand: detail.brand.clone(),
        category: detail.category.clone(),
        price_cents: detail.price_cents,
        image_url: detail.image_url.clone(),
    };

    view! {
        <div class="product-detail">
            {detail.image_url.clone().map(|url| view! { <img src=url alt=detail.name.clone()/> })}
            <div class="product-info">
                <h1>{detail.name.clone()}</h1>
                <p class="brand">{detail.brand.clone()}</p>
                <p class="price">{price}</p>
                <p class="description">{detail.description.clone()}</p>
                <section class="ingredients">
                    <h2>"Ingredients"</h2>
                    <ul>
                        {detail.ingredients.iter().map(|i| view! {
                            <li>{i.clone()}</li>
                        }).collect_view()}
                    </ul>
                </section>
                <section class="skin-types">
                    <h2>"Suited for"</h2>
                    <ul>
                        {detail.skin_types.iter().map(|s| view! {
                            <li>{s.clone()}</li>
                        }).collect_view()}
                    </ul>
                </section>
                {if detail.in_stock {
                    view! {
                        <button class="add-to-cart" on:click=move |_| cart.add(summary.clone())>
                            "Add to cart"
                        </button>
                    }.into_any()
                } else {
                    view! { <p class="out-of-stock">"Out of stock"</p> }.into_any()
                }}
            </div>
        </div>
    }
}
