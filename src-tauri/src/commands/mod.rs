//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core. Rust owns all
//! interactive state; the webview renders snapshots and reports events.
//! Every command tolerates an absent or disabled collaborator by returning
//! an error envelope instead of failing.

pub mod booking;
pub mod content;
pub mod diagnostics;
pub mod navigation;
pub mod reader;
