//! Headless core of a customer directory front-end.
//!
//! The crate covers the pieces a customer list-and-detail UI needs behind
//! the rendering layer: the listing query model with its paging rules, the
//! [`services::list::ListController`] that orchestrates fetches and the
//! delete-confirmation flow, the guarded only-one-address toggle, and the
//! submit-time form validation. All of it talks to a REST customer
//! directory through the [`directory`] traits; the `http` feature supplies
//! the reqwest-backed implementation.
//!
//! Rendering and routing stay in the embedding application, which drives
//! the controllers and reads their state back after each call.

pub mod directory;
pub mod domain;
pub mod forms;
pub mod pagination;
pub mod query;
pub mod services;

#[cfg(feature = "http")]
pub mod config;
