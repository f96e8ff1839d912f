//! Browser chat widget: forwards typed text to a chat endpoint, renders the
//! reply, and keeps a persisted dark mode preference.

pub mod ai;
pub mod config;
pub mod storage;
pub mod theme;
pub mod types;
#[cfg(feature = "dioxus")]
pub mod ui;
pub mod widget;
