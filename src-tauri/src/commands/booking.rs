//! Booking form commands
//!
//! The submission is simulated: the draft never leaves the machine. The
//! fixed latency runs on a background task so the command returns
//! immediately, and the form/modal snapshots flow to the webview as
//! `booking-updated` events.

use tauri::{AppHandle, Emitter, State};

use super::navigation::CommandResult;
use crate::state::AppState;
use xiaopei_core::{BookingUi, Site};

fn emit_booking_update(app: &AppHandle, ui: BookingUi) {
    let _ = app.emit("booking-updated", ui);
}

#[tauri::command]
pub fn edit_booking_field(
    state: State<AppState>,
    name: String,
    value: String,
) -> CommandResult<String> {
    match state.with_site(|site| Ok(site.edit_booking_field(&name, &value))) {
        Ok(stored) => CommandResult::ok(stored),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn submit_booking(app: AppHandle, state: State<AppState>) -> CommandResult<BookingUi> {
    let site: Site = match state.site() {
        Ok(site) => site,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    if !site.booking_enabled() {
        return CommandResult::err("Booking is not available in this deployment".to_string());
    }

    if let Err(e) = site.begin_booking() {
        return CommandResult::err(e.to_string());
    }
    emit_booking_update(&app, site.booking_ui());

    let latency = site.submit_latency();
    let app_for_task = app.clone();
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(latency).await;

        match site.complete_booking() {
            Ok(confirmation) => {
                tracing::debug!(confirmation = %confirmation, "Simulated submission finished")
            }
            Err(e) => tracing::warn!(error = %e, "Completing booking failed"),
        }
        emit_booking_update(&app_for_task, site.booking_ui());
    });

    match state.with_site(|site| Ok(site.booking_ui())) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn dismiss_booking_success(app: AppHandle, state: State<AppState>) -> CommandResult<BookingUi> {
    match state.with_site(|site| {
        site.dismiss_booking_success();
        Ok(site.booking_ui())
    }) {
        Ok(ui) => {
            emit_booking_update(&app, ui.clone());
            CommandResult::ok(ui)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn booking_ui(state: State<AppState>) -> CommandResult<BookingUi> {
    match state.with_site(|site| Ok(site.booking_ui())) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
