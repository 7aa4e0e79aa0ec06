//! Knowledge tab, archive filter and card reveal commands

use tauri::State;

use super::navigation::CommandResult;
use crate::state::AppState;
use xiaopei_core::PostVisibility;

#[tauri::command]
pub fn activate_knowledge_tab(state: State<AppState>, tab_id: String) -> CommandResult<String> {
    match state.with_site(|site| {
        if !site.knowledge_enabled() {
            return Err(xiaopei_core::CoreError::Config(
                "Knowledge widgets are not available in this deployment".to_string(),
            ));
        }
        site.activate_knowledge_tab(&tab_id)
    }) {
        Ok(active) => CommandResult::ok(active),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn filter_posts(state: State<AppState>, filter: String) -> CommandResult<Vec<PostVisibility>> {
    match state.with_site(|site| {
        if !site.knowledge_enabled() {
            return Err(xiaopei_core::CoreError::Config(
                "Knowledge widgets are not available in this deployment".to_string(),
            ));
        }
        Ok(site.filter_posts(&filter))
    }) {
        Ok(visible) => CommandResult::ok(visible),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// First-visibility notification for a card; true means "reveal it now"
#[tauri::command]
pub fn card_visible(state: State<AppState>, card_id: String) -> CommandResult<bool> {
    match state.with_site(|site| site.card_visible(&card_id)) {
        Ok(first_time) => CommandResult::ok(first_time),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
