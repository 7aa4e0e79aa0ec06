//! Xiaopei Pet Shop - Tauri Application
//!
//! Rust owns all interactive state; the webview renders the marketing
//! pages and reports events. Section switches, the booking flow and the
//! read-aloud session all round-trip through the commands below.

mod commands;
mod speech;
mod state;

use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    xiaopei_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Initialize site state
            let state = AppState::new()?;
            app.manage(state);

            let window =
                WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                    .title("小佩宠物")
                    .inner_size(1280.0, 800.0)
                    .min_inner_size(800.0, 600.0)
                    .center()
                    .build()?;
            let _ = window.show();

            tracing::info!("Xiaopei site shell started");

            Ok(())
        })
        .on_window_event(|window, event| {
            // The page is going away; a reading session must not outlive it
            if matches!(event, WindowEvent::Destroyed) {
                if let Some(state) = window.app_handle().try_state::<AppState>() {
                    let _ = state.with_site(|site| {
                        site.reader_teardown();
                        Ok(())
                    });
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Navigation commands
            commands::navigation::register_page,
            commands::navigation::resolve_link,
            commands::navigation::activate_link,
            commands::navigation::activate_section,
            commands::navigation::toggle_menu,
            // Booking commands
            commands::booking::edit_booking_field,
            commands::booking::submit_booking,
            commands::booking::dismiss_booking_success,
            commands::booking::booking_ui,
            // Reader commands
            commands::reader::reader_init,
            commands::reader::reader_toggle,
            commands::reader::reader_stop,
            commands::reader::reader_voices_changed,
            commands::reader::reader_playback_event,
            // Content commands
            commands::content::activate_knowledge_tab,
            commands::content::filter_posts,
            commands::content::card_visible,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Xiaopei site shell");
}
