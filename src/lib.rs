#[cfg(desktop)]
use tauri_plugin_autostart::MacosLauncher;

mod app;
mod commands;
mod config;
mod error;

pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let mut builder = tauri::Builder::default();

    #[cfg(desktop)]
    {
        // Must be registered first so a second launch exits before doing anything.
        builder = builder
            .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
                app::show_main_window(app);
            }))
            .plugin(tauri_plugin_global_shortcut::Builder::new().build())
            .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, None));
    }

    builder
        .plugin(tauri_plugin_opener::init())
        .on_window_event(app::events::handle_window_event)
        .on_menu_event(app::events::handle_menu_event)
        .invoke_handler(tauri::generate_handler![
            commands::context_menu::show_content_context_menu,
        ])
        .setup(|app| {
            app::setup(app.handle())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(app::events::handle_run_event);
}
