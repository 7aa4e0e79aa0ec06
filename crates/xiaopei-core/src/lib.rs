//! Xiaopei Core
//!
//! Central coordination layer for the site shell. Rust owns all
//! interactive state; the webview only renders the snapshots it is handed.

mod config;
mod error;
mod site;

pub use config::Config;
pub use error::CoreError;
pub use site::{PageLayout, Site};

// Re-export core components
pub use xiaopei_booking::{
    filter_phone_input, min_booking_date, BookingDraft, BookingError, BookingForm, BookingUi,
    SubmitState,
};
pub use xiaopei_content::{
    ContentError, PostFilter, PostItem, PostVisibility, RevealTracker, TabSet,
};
pub use xiaopei_navigation::{
    resolve_href, LinkResolution, MenuState, NavLink, NavUpdate, NavigationError, SectionNav,
};
pub use xiaopei_reader::{
    pick_chinese_voice, EngineEvent, ReaderController, ReaderError, ReaderState, ReaderUi,
    SessionId, SpeechEngine, Utterance, VoiceInfo,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
