//! Section navigation and menu commands

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use xiaopei_core::{NavUpdate, PageLayout};

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// What the renderer applies after a section switch
#[derive(Debug, Serialize)]
pub struct NavStateInfo {
    pub active_section: String,
    pub active_link: String,
    pub menu_open: bool,
    pub scroll_to_top: bool,
}

impl NavStateInfo {
    fn from_update(update: NavUpdate, menu_open: bool) -> Self {
        Self {
            active_section: update.active_section,
            active_link: update.active_link,
            menu_open,
            scroll_to_top: update.scroll_to_top,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum LinkResolutionResult {
    /// Switch sections in place; real navigation is suppressed
    Section(String),
    /// Off-site URL for the system opener
    External(String),
    /// Same-site path the webview navigates to as usual
    PassThrough(String),
}

impl From<xiaopei_core::LinkResolution> for LinkResolutionResult {
    fn from(resolution: xiaopei_core::LinkResolution) -> Self {
        match resolution {
            xiaopei_core::LinkResolution::Section(id) => LinkResolutionResult::Section(id),
            xiaopei_core::LinkResolution::External(url) => LinkResolutionResult::External(url),
            xiaopei_core::LinkResolution::PassThrough(href) => {
                LinkResolutionResult::PassThrough(href)
            }
        }
    }
}

#[tauri::command]
pub fn register_page(state: State<AppState>, layout: PageLayout) -> CommandResult<()> {
    match state.with_site(|site| {
        site.attach_page(layout);
        Ok(())
    }) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn resolve_link(href: String) -> CommandResult<LinkResolutionResult> {
    CommandResult::ok(xiaopei_core::resolve_href(&href).into())
}

#[tauri::command]
pub fn activate_link(state: State<AppState>, link_id: String) -> CommandResult<NavStateInfo> {
    match state.with_site(|site| {
        let update = site.activate_link(&link_id)?;
        Ok(NavStateInfo::from_update(update, site.menu_open()))
    }) {
        Ok(info) => CommandResult::ok(info),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn activate_section(state: State<AppState>, section_id: String) -> CommandResult<NavStateInfo> {
    match state.with_site(|site| {
        let update = site.activate_section(&section_id)?;
        Ok(NavStateInfo::from_update(update, site.menu_open()))
    }) {
        Ok(info) => CommandResult::ok(info),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn toggle_menu(state: State<AppState>) -> CommandResult<bool> {
    match state.with_site(|site| Ok(site.toggle_menu())) {
        Ok(open) => CommandResult::ok(open),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
