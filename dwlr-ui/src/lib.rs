//! Shared Dioxus components and browser bridge for the DWLR web app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js charts and the Google Maps
//!   script via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, mirrored from the
//!   persisted water level store
//! - `storage`, `places`, `maps`, `chat_client`: browser
//!   implementations of the ports defined in the core crates
//! - `components`: Reusable RSX components (search box, banners, cards, etc.)

pub mod chat_client;
pub mod components;
pub mod config;
pub mod js_bridge;
pub mod maps;
pub mod places;
pub mod route;
pub mod state;
pub mod storage;
pub mod timer;
