//! Skin quiz page.

use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use leptos::task::spawn_local;

use crate::cart::fmt_price;
use crate::types::{QuizAnswers, QuizRecommendation};

/// Server function to turn quiz answers into recommendations.
///
/// JSON input: the answers carry a nested list of concerns.
#[server(input = Json)]
pub async fn quiz_recommendations(
    answers: QuizAnswers,
) -> Result<QuizRecommendation, ServerFnError> {
    use crate::server_helpers::get_api_client;

    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.submit_quiz(&answers)
        .await
        .map_err(|e| e.into_server_error())
}

const SKIN_TYPES: [&str; 4] = ["dry", "oily", "combination", "normal"];
const CONCERNS: [&str; 5] = ["acne", "aging", "dullness", "redness", "texture"];
const SENSITIVITIES: [&str; 3] = ["low", "medium", "high"];

/// Skin quiz page: a few questions, then product recommendations.
#[component]
pub fn QuizPage() -> impl IntoView {
    let (skin_type, set_skin_type) = signal("normal".to_string());
    let (concerns, set_concerns) = signal(Vec::<String>::new());
    let (sensitivity, set_sensitivity) = signal("low".to_string());
    let (result, set_result) = signal(Option::<QuizRecommendation>::None);
    let (error, set_error) = signal(false);

    let submit = move |_| {
        let answers = QuizAnswers {
            skin_type: skin_type.get(),
            concerns: concerns.get(),
            sensitivity: sensitivity.get(),
        };
        spawn_local(async move {
            match quiz_recommendations(answers).await {
                Ok(recommendation) => {
                    set_error.set(false);
                    set_result.set(Some(recommendation));
                }
                Err(_) => set_error.set(true),
            }
        });
    };

    let toggle_concern = move |concern: String| {
        set_concerns.update(|list| {
            if let Some(pos) = list.iter().position(|c| *c == concern) {
                list.remove(pos);
            } else {
                list.push(concern);
            }
        });
    };

    view! {
        <div class="quiz-page">
            <h1>"Skin Quiz"</h1>
            <p>"Answer three questions and we will build your routine."</p>

            <section class="quiz-question">
                <h2>"How does your skin feel?"</h2>
                {SKIN_TYPES.into_iter().map(|option| view! {
                    <label>
                        <input
                            type="radio"
                            name="skin_type"
                            value=option
                            checked=move || skin_type.get() == option
                            on:change=move |_| set_skin_type.set(option.to_string())
                        />
                        {option}
                    </label>
                }).collect_view()}
            </section>

            <section class="quiz-question">
                <h2>"What are your concerns?"</h2>
                {CONCERNS.into_iter().map(|option| view! {
                    <label>
                        <input
                            type="checkbox"
                            value=option
                            checked=move || concerns.get().iter().any(|c| c == option)
                            on:change=move |_| toggle_concern(option.to_string())
                        />
                        {option}
                    </label>
                }).collect_view()}
            </section>

            <section class="quiz-question">
                <h2>"How sensitive is your skin?"</h2>
                {SENSITIVITIES.into_iter().map(|option| view! {
                    <label>
                        <input
                            type="radio"
                            name="sensitivity"
                            value=option
                            checked=move || sensitivity.get() == option
                            on:change=move |_| set_sensitivity.set(option.to_string())
                        />
                        {option}
                    </label>
                }).collect_view()}
            </section>

            <button class="cta-button" on:click=submit>"Get my routine"</button>

            {move || error.get().then(|| view! {
                <p class="error">"Could not build recommendations. Please try again."</p>
            })}

            {move || result.get().map(|recommendation| view! {
                <section class="quiz-results">
                    <h2>"Your routine"</h2>
                    <p>{recommendation.summary}</p>
                    <div class="product-grid">
                        {recommendation.products.into_iter().map(|p| {
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
                </section>
            })}
        </div>
    }
}
