//! Main Leptos application component and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::cart::{provide_cart, use_cart};
use crate::pages::{
    AccountPage, AdminPage, BlogPage, BlogPostPage, CartPage, CheckoutPage, DoctorPage, HomePage,
    LoginPage, ProductPage, ProductsPage, QuizPage, RegisterPage, StaffPage,
};
use crate::session::current_session;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_cart();

    view! {
        <Title text="Lumera Skincare"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/products/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/checkout") view=CheckoutPage/>
                    <Route path=path!("/quiz") view=QuizPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:id") view=BlogPostPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/account") view=AccountPage/>
                    <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                    <Route path=path!("/admin") view=AdminPage/>
                    <Route path=path!("/doctor") view=DoctorPage/>
                    <Route path=path!("/staff") view=StaffPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Header component with navigation, cart badge, and session menu.
#[component]
fn Header() -> impl IntoView {
    let session = Resource::new(|| (), |_| current_session());
    let cart = use_cart();

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"Lumera"</a>
                <nav class="main-nav">
                    <a href="/products">"Shop"</a>
                    <a href="/quiz">"Skin Quiz"</a>
                    <a href="/blog">"Journal"</a>
                </nav>
            </div>
            <div class="header-right">
                <a href="/cart" class="cart-link">
                    "Cart"
                    {move || {
                        let count = cart.item_count();
                        (count > 0).then(|| view! { <span class="cart-badge">{count}</span> })
                    }}
                </a>
                <Suspense fallback=move || view! { <span>"..."</span> }>
                    {move || {
                        session.get().map(|result| {
                            match result {
                                Ok(Some(session)) => view! {
                                    <SessionMenu role=session.role().to_string()/>
                                }.into_any(),
                                Ok(None) | Err(_) => view! {
                                    <a href="/login" class="login-button">"Sign in"</a>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </div>
        </header>
    }
}

/// Session dropdown with role-specific entries.
#[component]
fn SessionMenu(role: String) -> impl IntoView {
    let panel = match role.as_str() {
        "admin" => Some(("/admin", "Admin")),
        "doctor" => Some(("/doctor", "Doctor Panel")),
        "staff" => Some(("/staff", "Staff Panel")),
        _ => None,
    };

    view! {
        <div class="user-menu">
            <span class="user-role">{role.clone()}</span>
            <div class="user-dropdown">
                <a href="/account">"My Account"</a>
                {panel.map(|(href, label)| view! { <a href=href>{label}</a> })}
                <a href="/auth/logout" rel="external">"Sign out"</a>
            </div>
        </div>
    }
}

/// Shown when an authenticated actor reaches a page their role cannot view.
#[component]
fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Not authorized"</h1>
            <p>"Your account does not have access to that page."</p>
            <a href="/">"Return to the storefront"</a>
        </div>
    }
}
