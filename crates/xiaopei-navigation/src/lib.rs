//! Xiaopei Section Navigation
//!
//! The site is a single page of stacked sections. Menu links whose target is
//! a hash fragment switch sections in place; links to real URLs are never
//! intercepted. Exactly one section and one menu link are active at a time,
//! and both are updated together.

mod error;
mod link;
mod menu;
mod sections;

pub use error::NavigationError;
pub use link::{resolve_href, LinkResolution};
pub use menu::MenuState;
pub use sections::{NavLink, NavUpdate, SectionNav};

pub type Result<T> = std::result::Result<T, NavigationError>;
