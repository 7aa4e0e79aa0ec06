//! Scroll-triggered card reveals
//!
//! Cards register hidden and are revealed the first time the viewport
//! reaches them. The transition is one-way: once revealed, a card stays
//! revealed no matter how the page scrolls afterwards.

use std::collections::BTreeMap;

use crate::error::ContentError;
use crate::Result;

#[derive(Debug, Default)]
pub struct RevealTracker {
    cards: BTreeMap<String, bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card in its hidden starting state. Re-registering a card
    /// that was already revealed does not hide it again.
    pub fn register(&mut self, card_id: &str) {
        self.cards.entry(card_id.to_string()).or_insert(false);
    }

    /// The viewport reached the card. Returns true the first time only.
    pub fn mark_visible(&mut self, card_id: &str) -> Result<bool> {
        match self.cards.get_mut(card_id) {
            Some(revealed) if *revealed => Ok(false),
            Some(revealed) => {
                *revealed = true;
                Ok(true)
            }
            None => Err(ContentError::CardNotFound(card_id.to_string())),
        }
    }

    pub fn is_revealed(&self, card_id: &str) -> bool {
        self.cards.get(card_id).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.cards.values().filter(|r| **r).count()
    }
}
