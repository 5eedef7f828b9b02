//! Staff fulfilment panel.

use leptos::prelude::*;

use crate::guard::Protected;
use crate::pages::account::OrderTable;
use crate::types::OrderSummary;
use lumera_access::role::Role;

/// Server function to list orders awaiting fulfilment (staff and admins).
#[server]
pub async fn fulfilment_queue() -> Result<Vec<OrderSummary>, ServerFnError> {
    use crate::server_helpers::{get_api_client, require_role};
    use lumera_access::role::Role;

    let session = require_role(&[Role::Staff, Role::Admin])
        .await
        .map_err(|e| e.into_server_error())?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.all_orders(session.access_token())
        .await
        .map_err(|e| e.into_server_error())
}

/// Staff panel landing page.
#[component]
pub fn StaffPage() -> impl IntoView {
    view! {
        <Protected allowed=vec![Role::Staff, Role::Admin]>
            <StaffContent/>
        </Protected>
    }
}

#[component]
fn StaffContent() -> impl IntoView {
    let orders = Resource::new(|| (), |_| fulfilment_queue());

    view! {
        <div class="staff-page">
            <h1>"Staff Panel"</h1>
            <p>"Orders awaiting fulfilment."</p>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders.get().map(|result| {
                        match result {
                            Ok(items) if items.is_empty() => view! {
                                <p class="empty-state">"No orders in the queue."</p>
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
        </div>
    }
}
