//! Sign-in and registration pages.
//!
//! Both pages are public-only: an authenticated actor landing here is
//! sent to their role's landing page instead. The forms post to the
//! Axum auth routes, which set the session cookie and redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::guard::PublicOnly;

/// Sign-in page.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PublicOnly>
            <LoginForm/>
        </PublicOnly>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let query = use_query_map();
    let error = move || query.read().get("error").is_some();

    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Sign in"</h1>
                {move || error().then(|| view! {
                    <p class="error">"Sign-in failed. Check your email and password."</p>
                })}
                <form method="post" action="/auth/login">
                    <label for="email">"Email"</label>
                    <input type="email" id="email" name="email" required/>
                    <label for="password">"Password"</label>
                    <input type="password" id="password" name="password" required/>
                    <button type="submit" class="cta-button">"Sign in"</button>
                </form>
                <p>"New to Lumera? "<a href="/register">"Create an account"</a></p>
            </div>
        </div>
    }
}

/// Registration page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PublicOnly>
            <RegisterForm/>
        </PublicOnly>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let query = use_query_map();
    let error = move || query.read().get("error").is_some();

    view! {
        <div class="register-page">
            <div class="login-box">
                <h1>"Create an account"</h1>
                {move || error().then(|| view! {
                    <p class="error">"Registration failed. Please try again."</p>
                })}
                <form method="post" action="/auth/register">
                    <label for="name">"Name"</label>
                    <input type="text" id="name" name="name" required/>
                    <label for="email">"Email"</label>
                    <input type="email" id="email" name="email" required/>
                    <label for="password">"Password"</label>
                    <input type="password" id="password" name="password" required/>
                    <button type="submit" class="cta-button">"Create account"</button>
                </form>
                <p>"Already registered? "<a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
