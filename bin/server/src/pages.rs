//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route,
//! along with any server functions specific to that page.

pub mod account;
pub mod admin;
pub mod blog;
pub mod cart;
pub mod checkout;
pub mod doctor;
pub mod home;
pub mod login;
pub mod products;
pub mod quiz;
pub mod staff;

// Re-export all page components for convenient access
pub use account::AccountPage;
pub use admin::AdminPage;
pub use blog::{BlogPage, BlogPostPage};
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use doctor::DoctorPage;
pub use home::HomePage;
pub use login::{LoginPage, RegisterPage};
pub use products::{ProductPage, ProductsPage};
pub use quiz::QuizPage;
pub use staff::StaffPage;
