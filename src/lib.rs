// Reading Journal - Tauri Library Entry Point

pub mod commands;
pub mod constants;
pub mod db;
pub mod error;
pub mod form;
pub mod tags;

use std::sync::Mutex;

// Re-export DbState from commands module for state management
pub use commands::DbState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new().build())
        .plugin(tauri_plugin_dialog::init())
        .manage(DbState(Mutex::new(None)))
        .invoke_handler(tauri::generate_handler![
            // Journal lifecycle
            commands::create_journal,
            commands::open_journal,
            commands::close_journal,
            commands::get_journal_path,
            // Form description
            commands::describe_form,
            commands::default_form,
            // Lookups and suggestions
            commands::list_sizes,
            commands::list_categories,
            commands::list_genres,
            commands::list_subgenres,
            commands::list_sources,
            commands::list_discoveries,
            commands::list_months_later,
            commands::list_reread,
            commands::list_icons,
            commands::suggest_authors,
            commands::suggest_vibes,
            commands::accept_vibe_suggestion,
            // Saving
            commands::save_book,
            // Field settings
            commands::list_field_settings,
            commands::set_field_setting,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
