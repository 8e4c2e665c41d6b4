//! # client
//!
//! Leptos view layer for the page shelf: view state, the page-list view, and
//! the page card. With the `ssr` feature the server renders these views to
//! HTML; nothing here performs I/O.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
