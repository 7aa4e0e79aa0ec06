//! Section activation state
//!
//! Tracks which section and which menu link are currently active. The two
//! are mutated only together; there is never a moment where a section is
//! active without its link or vice versa.

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::link::{resolve_href, LinkResolution};
use crate::Result;

/// A menu link as declared by the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    /// Link id (stable across the page lifetime)
    pub id: String,
    /// Raw href, e.g. "#booking"
    pub href: String,
}

/// Result of activating a section, for the renderer to apply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavUpdate {
    pub active_section: String,
    pub active_link: String,
    /// The original page scrolls back to the top on every switch
    pub scroll_to_top: bool,
}

pub struct SectionNav {
    sections: Vec<String>,
    links: Vec<NavLink>,
    active_section: Option<String>,
    active_link: Option<String>,
}

impl SectionNav {
    /// Build from the page's section ids and menu links. The first section
    /// and its link start out active, matching the landing markup.
    pub fn new(sections: Vec<String>, links: Vec<NavLink>) -> Self {
        let active_section = sections.first().cloned();
        let active_link = active_section
            .as_deref()
            .and_then(|id| link_for_section(&links, id))
            .map(|l| l.id.clone());

        Self {
            sections,
            links,
            active_section,
            active_link,
        }
    }

    /// Activate a section by id, updating the matching menu link with it.
    pub fn activate_section(&mut self, section_id: &str) -> Result<NavUpdate> {
        if !self.sections.iter().any(|s| s == section_id) {
            return Err(NavigationError::SectionNotFound(section_id.to_string()));
        }

        let link_id = link_for_section(&self.links, section_id)
            .map(|l| l.id.clone())
            .ok_or_else(|| NavigationError::LinkNotFound(section_id.to_string()))?;

        tracing::debug!(section = %section_id, link = %link_id, "Section activated");

        self.active_section = Some(section_id.to_string());
        self.active_link = Some(link_id.clone());

        Ok(NavUpdate {
            active_section: section_id.to_string(),
            active_link: link_id,
            scroll_to_top: true,
        })
    }

    /// Activate via a menu link. Only hash links are routed here; anything
    /// else is a caller error because those links must navigate normally.
    pub fn activate_link(&mut self, link_id: &str) -> Result<NavUpdate> {
        let link = self
            .links
            .iter()
            .find(|l| l.id == link_id)
            .ok_or_else(|| NavigationError::LinkNotFound(link_id.to_string()))?;

        match resolve_href(&link.href) {
            LinkResolution::Section(section_id) => self.activate_section(&section_id),
            _ => Err(NavigationError::NotASectionLink(link.href.clone())),
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

fn link_for_section<'a>(links: &'a [NavLink], section_id: &str) -> Option<&'a NavLink> {
    links.iter().find(|l| match resolve_href(&l.href) {
        LinkResolution::Section(target) => target == section_id,
        _ => false,
    })
}
