//! Main site state container
//!
//! Rust owns all interactive state; the webview is purely a renderer.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use xiaopei_booking::{min_booking_date, BookingForm, BookingUi};
use xiaopei_content::{PostFilter, PostItem, PostVisibility, RevealTracker, TabSet};
use xiaopei_navigation::{MenuState, NavLink, NavUpdate, SectionNav};
use xiaopei_reader::{EngineEvent, ReaderController, ReaderUi, SpeechEngine};

use crate::config::Config;
use crate::Result;

/// The collaborators a page declares once its markup is ready. Every list
/// is optional: a page without a booking form, knowledge tabs or cards
/// simply reports none, and the matching features stay unwired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub knowledge_tabs: Vec<String>,
    #[serde(default)]
    pub post_items: Vec<PostItem>,
    #[serde(default)]
    pub cards: Vec<String>,
}

/// Central state container for one page load
///
/// Each widget's state is owned here exclusively; the four reader
/// operations, the booking lifecycle and section activation are the only
/// mutation paths.
pub struct Site {
    config: Config,
    nav: Arc<RwLock<SectionNav>>,
    menu: Arc<RwLock<MenuState>>,
    booking: Arc<RwLock<BookingForm>>,
    reader: Arc<RwLock<ReaderController>>,
    knowledge: Arc<RwLock<TabSet>>,
    posts: Arc<RwLock<PostFilter>>,
    reveals: Arc<RwLock<RevealTracker>>,
}

impl Site {
    pub fn new(config: Config) -> Self {
        let min_date = config.booking_min_date.unwrap_or_else(min_booking_date);
        let booking = BookingForm::new(config.required_booking_fields.clone(), min_date);

        Self {
            config,
            nav: Arc::new(RwLock::new(SectionNav::new(Vec::new(), Vec::new()))),
            menu: Arc::new(RwLock::new(MenuState::new())),
            booking: Arc::new(RwLock::new(booking)),
            reader: Arc::new(RwLock::new(ReaderController::new(None))),
            knowledge: Arc::new(RwLock::new(TabSet::new(Vec::new()))),
            posts: Arc::new(RwLock::new(PostFilter::new(Vec::new()))),
            reveals: Arc::new(RwLock::new(RevealTracker::new())),
        }
    }

    /// Wire up the collaborators the page actually has
    pub fn attach_page(&self, layout: PageLayout) {
        tracing::info!(
            sections = layout.sections.len(),
            links = layout.nav_links.len(),
            tabs = layout.knowledge_tabs.len(),
            posts = layout.post_items.len(),
            cards = layout.cards.len(),
            "Page attached"
        );

        *self.nav.write() = SectionNav::new(layout.sections, layout.nav_links);
        *self.knowledge.write() = TabSet::new(layout.knowledge_tabs);
        *self.posts.write() = PostFilter::new(layout.post_items);

        let mut reveals = self.reveals.write();
        *reveals = RevealTracker::new();
        for card in &layout.cards {
            reveals.register(card);
        }
    }

    // === Navigation operations ===

    pub fn activate_link(&self, link_id: &str) -> Result<NavUpdate> {
        let update = self.nav.write().activate_link(link_id)?;
        self.menu.write().close();
        Ok(update)
    }

    /// Hero buttons and plain in-page anchors route here and land on the
    /// same section/link pair a menu click would.
    pub fn activate_section(&self, section_id: &str) -> Result<NavUpdate> {
        let update = self.nav.write().activate_section(section_id)?;
        self.menu.write().close();
        Ok(update)
    }

    pub fn toggle_menu(&self) -> bool {
        self.menu.write().toggle()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.read().is_open()
    }

    pub fn active_section(&self) -> Option<String> {
        self.nav.read().active_section().map(String::from)
    }

    // === Booking operations ===

    pub fn booking_enabled(&self) -> bool {
        self.config.booking_enabled
    }

    /// Store an edited field value, returning what the input should render
    pub fn edit_booking_field(&self, name: &str, value: &str) -> String {
        self.booking.write().set_field(name, value)
    }

    /// Collect, validate and log the draft, locking the form. The draft
    /// itself is dropped here; nothing outlives the submission flow.
    pub fn begin_booking(&self) -> Result<()> {
        let _draft = self.booking.write().begin_submit()?;
        Ok(())
    }

    pub fn complete_booking(&self) -> Result<String> {
        Ok(self.booking.write().complete_submit()?)
    }

    pub fn dismiss_booking_success(&self) {
        self.booking.write().dismiss_success();
    }

    pub fn booking_ui(&self) -> BookingUi {
        self.booking.read().ui()
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.config.submit_latency_ms)
    }

    // === Reader operations ===

    pub fn reader_enabled(&self) -> bool {
        self.config.reader_enabled
    }

    /// One-time capability wiring; None permanently disables the control
    pub fn set_reader_engine(&self, engine: Option<Box<dyn SpeechEngine>>) {
        *self.reader.write() = ReaderController::new(engine);
    }

    pub fn reader_toggle(&self, article_text: &str) -> Result<ReaderUi> {
        let mut reader = self.reader.write();
        reader.toggle(article_text)?;
        Ok(reader.ui())
    }

    pub fn reader_stop(&self) -> ReaderUi {
        let mut reader = self.reader.write();
        reader.stop();
        reader.ui()
    }

    pub fn reader_event(&self, event: EngineEvent) -> Result<ReaderUi> {
        let mut reader = self.reader.write();
        reader.handle_event(event)?;
        Ok(reader.ui())
    }

    pub fn reader_ui(&self) -> ReaderUi {
        self.reader.read().ui()
    }

    /// Best-effort cancellation when the page is going away
    pub fn reader_teardown(&self) {
        self.reader.write().teardown();
    }

    // === Content operations ===

    pub fn knowledge_enabled(&self) -> bool {
        self.config.knowledge_enabled
    }

    pub fn activate_knowledge_tab(&self, tab_id: &str) -> Result<String> {
        self.knowledge.write().activate(tab_id)?;
        Ok(tab_id.to_string())
    }

    pub fn filter_posts(&self, filter: &str) -> Vec<PostVisibility> {
        self.posts.write().apply(filter)
    }

    pub fn card_visible(&self, card_id: &str) -> Result<bool> {
        Ok(self.reveals.write().mark_visible(card_id)?)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Site {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            nav: Arc::clone(&self.nav),
            menu: Arc::clone(&self.menu),
            booking: Arc::clone(&self.booking),
            reader: Arc::clone(&self.reader),
            knowledge: Arc::clone(&self.knowledge),
            posts: Arc::clone(&self.posts),
            reveals: Arc::clone(&self.reveals),
        }
    }
}
