pub mod chip_group;
pub mod dlg_apps_settings;
pub mod dlg_apps_settings_stt;
pub mod dlg_restart_confirm;
pub mod dlg_restart_confirm_stt;
pub mod dlg_weather_settings;
pub mod dlg_weather_settings_stt;
pub mod log_capture;
pub mod prefs_keys;
pub mod prefs_store;
pub mod prefs_store_stt;

// Export modules for external use
pub use lunar_settings_app::LunarSettingsApp;
pub mod lunar_settings_app;
pub mod lunar_settings_app_stt;

#[cfg(target_os = "android")]
mod main_android;

use anyhow::{Context, Result};
#[cfg(not(target_os = "android"))]
use directories::ProjectDirs;
use prefs_store::FilePrefs;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Lower is more severe
    pub fn priority(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// `EnvFilter` directive, also the persisted name
    pub fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "warn" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Error,
        }
    }
}

fn create_prefs_dir(prefs_dir: &Path) -> Result<()> {
    fs::create_dir_all(prefs_dir)
        .with_context(|| format!("Failed to create prefs directory {:?}", prefs_dir))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub prefs_dir: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        #[cfg(target_os = "android")]
        {
            let prefs_dir = PathBuf::from("/data/data/lunar.launcher.settings/files/prefs");
            log::info!("Android prefs_dir: {:?}", prefs_dir);

            match create_prefs_dir(&prefs_dir) {
                Ok(()) => log::info!("Successfully created prefs_dir: {:?}", prefs_dir),
                Err(e) => log::error!("{:#}", e),
            }

            Ok(Config { prefs_dir })
        }

        #[cfg(not(target_os = "android"))]
        {
            let proj_dirs = ProjectDirs::from("rs", "lunar", "lunar_settings")
                .context("Failed to get project directories")?;

            let prefs_dir = proj_dirs.config_dir().join("prefs");

            create_prefs_dir(&prefs_dir)?;

            Ok(Config { prefs_dir })
        }
    }

    /// Config with preference files under `<root>/prefs`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config {
            prefs_dir: root.into().join("prefs"),
        }
    }

    pub fn prefs_path(&self, scope: &str) -> PathBuf {
        self.prefs_dir.join(format!("{}.json", scope))
    }

    pub fn open_prefs(&self, scope: &str) -> Result<FilePrefs> {
        FilePrefs::open(self.prefs_path(scope))
    }

    /// Stored log level, `Error` when unset or unreadable
    pub fn load_log_level(&self) -> LogLevel {
        use prefs_store::PrefsExt;

        match self.open_prefs(prefs_keys::PREFS_SETTINGS) {
            Ok(prefs) => LogLevel::from_name(&prefs.get(&prefs_keys::KEY_LOG_LEVEL)),
            Err(_) => LogLevel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs_store::PrefsExt;

    #[test]
    fn log_level_names_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_name(level.filter_directive()), level);
            assert_eq!(LogLevel::from_name(level.label()), level);
        }
        assert_eq!(LogLevel::from_name(""), LogLevel::Error);
    }

    #[test]
    fn scopes_live_in_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_root(dir.path());

        let mut launcher = config.open_prefs(prefs_keys::PREFS_LAUNCHER).unwrap();
        launcher.put(&prefs_keys::KEY_GRID_COLUMNS, 6).unwrap();

        let settings = config.open_prefs(prefs_keys::PREFS_SETTINGS).unwrap();
        assert_eq!(settings.get(&prefs_keys::KEY_GRID_COLUMNS), 4);
        assert!(config.prefs_path("launcher").exists());
        assert!(!config.prefs_path("settings").exists());
    }

    #[test]
    fn stored_log_level_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_root(dir.path());
        assert_eq!(config.load_log_level(), LogLevel::Error);

        let mut settings = config.open_prefs(prefs_keys::PREFS_SETTINGS).unwrap();
        settings
            .put(&prefs_keys::KEY_LOG_LEVEL, "debug".to_string())
            .unwrap();
        assert_eq!(config.load_log_level(), LogLevel::Debug);
    }

    #[test]
    fn prefs_dir_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("prefs");
        fs::write(&blocker, "not a directory").unwrap();

        let err = create_prefs_dir(&blocker.join("nested")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create prefs directory"));
        assert!(format!("{}", err).contains("nested"));
    }
}
