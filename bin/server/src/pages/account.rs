//! Customer account page: profile and order history.

use leptos::prelude::*;

use crate::cart::fmt_price;
use crate::guard::Protected;
use crate::types::{OrderSummary, ProfileInfo};
use lumera_access::role::RoleSet;

/// Server function to fetch the signed-in user's profile.
#[server]
pub async fn my_profile() -> Result<ProfileInfo, ServerFnError> {
    use crate::server_helpers::{get_api_client, get_authenticated_session};

    let session = get_authenticated_session()
        .await
        .map_err(|e| e.into_server_error())?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.profile(session.access_token())
        .await
        .map_err(|e| e.into_server_error())
}

/// Server function to list the signed-in user's orders.
#[server]
pub async fn my_orders() -> Result<Vec<OrderSummary>, ServerFnError> {
    use crate::server_helpers::{get_api_client, get_authenticated_session};

    let session = get_authenticated_session()
        .await
        .map_err(|e| e.into_server_error())?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.orders(session.access_token())
        .await
        .map_err(|e| e.into_server_error())
}

/// Account page; any authenticated role has one.
#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <Protected allowed=RoleSet::any_authenticated().roles().to_vec()>
            <AccountContent/>
        </Protected>
    }
}

#[component]
fn AccountContent() -> impl IntoView {
    let profile = Resource::new(|| (), |_| my_profile());
    let orders = Resource::new(|| (), |_| my_orders());

    view! {
        <div class="account-page">
            <h1>"My Account"</h1>
            <section class="profile-section">
                <h2>"Profile"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        profile.get().map(|result| {
                            match result {
                                Ok(info) => view! {
                                    <div class="profile">
                                        <p>{info.name}</p>
                                        <p>{info.email}</p>
                                    </div>
                                }.into_any(),
                                Err(_) => view! {
                                    <p class="error">"Failed to load profile."</p>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </section>
            <section class="orders-section">
                <h2>"Order history"</h2>
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

/// Order history table, shared with the back-office panels.
#[component]
pub fn OrderTable(orders: Vec<OrderSummary>) -> impl IntoView {
    view! {
        <table class="orders-table">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Placed"</th>
                    <th>"Status"</th>
                    <th>"Items"</th>
                    <th>"Total"</th>
                </tr>
            </thead>
            <tbody>
                {orders.into_iter().map(|order| {
                    let total = fmt_price(order.total_cents);
                    view! {
                        <tr>
                            <td>{order.id.to_string()}</td>
                            <td>{order.placed_at}</td>
                            <td>{order.status}</td>
                            <td>{order.item_count}</td>
                            <td>{total}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
