//! User configuration loaded from ~/.skyglow/config.ini.
//!
//! Settings structs live in [`settings`], defaults and path helpers in
//! [`defaults`], INI parsing in [`parser`], serialization in [`writer`],
//! and file I/O in [`file`].
//!
//! # Example
//!
//! ```no_run
//! use skyglow::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("maps live in {}", settings.maps.directory.display());
//! # Ok::<(), skyglow::config::ConfigError>(())
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, DEFAULT_LOADING_MODE, DEFAULT_LOG_FILE,
    DEFAULT_MAPS_DIRECTORY,
};
pub use file::ConfigError;
pub use settings::{LoadingMode, LoggingSettings, MapsSettings, Settings};
