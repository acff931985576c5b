pub mod files;
pub mod settings;

pub use files::{config_file, ensure_pomodoro_dir, init_local_dir, log_file};
pub use settings::{load_settings, save_settings, Settings};
