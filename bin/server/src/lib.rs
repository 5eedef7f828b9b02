//! Lumera web server and storefront UI.
//!
//! This crate provides the Leptos-based web interface for the Lumera
//! skincare platform: the public storefront, the customer account area,
//! and the admin, doctor, and staff back-office panels.

#![allow(non_snake_case)]

pub mod app;
pub mod cart;
pub mod guard;
pub mod pages;
pub mod session;
pub mod types;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod server_helpers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
