mod commands;
mod constants;
mod error;
mod models;
mod services;

use services::api_client::{ApiClient, ApiConfig};
use services::session::SessionStore;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    #[cfg(debug_assertions)]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    log::info!("Starting Job Lens v{}", env!("CARGO_PKG_VERSION"));

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            let config = ApiConfig::default();
            log::info!("Classifier backend: {}", config.base_url);

            app.manage(ApiClient::new(config));
            app.manage(SessionStore::new());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::job::predict_job,
            commands::job::explain_job,
            commands::job::clear_form,
            commands::job::control_states,
            commands::job::backend_health,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
