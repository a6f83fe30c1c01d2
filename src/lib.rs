mod api;
mod commands;
mod config;
mod pagination;
mod session;
mod submission;

use api::ApiClient;
use commands::documents::DocumentCache;
use config::AppConfig;
use session::SessionState;
use submission::SubmissionTracker;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Backend URL not configured");
    let api = ApiClient::new(&config.api_url).expect("Failed to initialize API client");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(config)
        .manage(api)
        .manage(SessionState::default())
        .manage(SubmissionTracker::default())
        .manage(DocumentCache::default())
        .invoke_handler(tauri::generate_handler![
            commands::documents::stage_upload,
            commands::documents::confirm_upload,
            commands::documents::stage_delete,
            commands::documents::confirm_delete,
            commands::documents::cancel_pending,
            commands::documents::list_pdfs,
            commands::documents::list_pdfs_with_queries,
            commands::documents::sidebar_documents,
            commands::query::submit_query,
            commands::query::replay_query,
            commands::query::runtime_history,
            commands::query::last_query_detail,
            commands::history::fetch_query_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
