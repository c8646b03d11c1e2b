//! Server-rendered marketing site for the Pastamore restaurant group.
//!
//! Content (`catalog`) and translations (`i18n`) are loaded once at startup;
//! each request turns its query string into a `state::PageState` and renders
//! the page with `render`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod presenter;
pub mod render;
pub mod server;
pub mod state;
