//! Doctor consultation panel.

use leptos::prelude::*;

use crate::guard::Protected;
use crate::types::ConsultationSummary;
use lumera_access::role::Role;

/// Server function to list consultation requests (doctors and admins).
#[server]
pub async fn consultation_queue() -> Result<Vec<ConsultationSummary>, ServerFnError> {
    use crate::server_helpers::{get_api_client, require_role};
    use lumera_access::role::Role;

    let session = require_role(&[Role::Doctor, Role::Admin])
        .await
        .map_err(|e| e.into_server_error())?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.consultations(session.access_token())
        .await
        .map_err(|e| e.into_server_error())
}

/// Doctor panel landing page.
#[component]
pub fn DoctorPage() -> impl IntoView {
    view! {
        <Protected allowed=vec![Role::Doctor, Role::Admin]>
            <DoctorContent/>
        </Protected>
    }
}

#[component]
fn DoctorContent() -> impl IntoView {
    let consultations = Resource::new(|| (), |_| consultation_queue());

    view! {
        <div class="doctor-page">
            <h1>"Doctor Panel"</h1>
            <p>"Open consultation requests."</p>
            <Suspense fallback=move || view! { <p>"Loading consultations..."</p> }>
                {move || {
                    consultations.get().map(|result| {
                        match result {
                            Ok(items) if items.is_empty() => view! {
                                <p class="empty-state">"No open consultations."</p>
                            }.into_any(),
                            Ok(items) => view! {
                                <table class="consultations-table">
                                    <thead>
                                        <tr>
                                            <th>"Patient"</th>
                                            <th>"Requested"</th>
                                            <th>"Concern"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items.into_iter().map(|c| view! {
                                            <tr>
                                                <td>{c.patient_name}</td>
                                                <td>{c.requested_at}</td>
                                                <td>{c.concern}</td>
                                                <td>{c.status}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Failed to load consultations."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
