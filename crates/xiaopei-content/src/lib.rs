//! Xiaopei Content Widgets
//!
//! State for the knowledge-section tabs, the archive's pet-kind filter and
//! the scroll-triggered card reveals. All of it is per-page-load and
//! renderer-agnostic: the page applies the returned snapshots.

mod error;
mod filter;
mod reveal;
mod tabs;

pub use error::ContentError;
pub use filter::{PostFilter, PostItem, PostVisibility};
pub use reveal::RevealTracker;
pub use tabs::TabSet;

pub type Result<T> = std::result::Result<T, ContentError>;
