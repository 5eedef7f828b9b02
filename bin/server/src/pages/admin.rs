//! Admin back-office panel.

use leptos::prelude::*;

use crate::guard::Protected;
use crate::pages::account::OrderTable;
use crate::types::OrderSummary;
use lumera_access::role::Role;

/// Server function to list all orders across customers (admin only).
#[server]
pub async fn all_orders() -> Result<Vec<OrderSummary>, ServerFnError> {
    use crate::server_helpers::{get_api_client, require_role};
    use lumera_access::role::Role;

    let session = require_role(&[Role::Admin])
        .await
        .map_err(|e| e.into_server_error())?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.all_orders(session.access_token())
        .await
        .map_err(|e| e.into_server_error())
}

/// Admin panel landing page.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Protected allowed=vec![Role::Admin]>
            <AdminContent/>
        </Protected>
    }
}

#[component]
fn AdminContent() -> impl IntoView {
    let orders = Resource::new(|| (), |_| all_orders());

    view! {
        <div class="admin-page">
            <h1>"Admin"</h1>
            <p>"Storefront administration and oversight."</p>
            <nav class="panel-nav">
                <a href="/doctor">"Doctor Panel"</a>
                <a href="/staff">"Staff Panel"</a>
            </nav>
            <section class="admin-section">
                <h2>"All orders"</h2>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        orders.get().map(|result| {
                            match result {
                                Ok(items) if items.is_empty() => view! {
                                    <p class="empty-state">"No orders yet."</p>
                                }.into_any(),
                                Ok(items) => view! {
                                    <OrderTable orders=items/>
                                }.into_any(),
                                Err(_) => view! {
                                    <p class="error">"Failed to load orders."</p>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
