//! Core domain types and utilities for the Lumera platform.
//!
//! This crate provides the foundational types and shared utilities used
//! throughout the Lumera skincare commerce platform.

pub mod id;

pub use id::{BlogPostId, ConsultationId, OrderId, ProductId, UserId};
