#![doc(hidden)]

use crate::dlg_apps_settings_stt::DlgAppsSettings;
use crate::dlg_weather_settings_stt::DlgWeatherSettings;
use crate::prefs_store_stt::PreferenceStore;
use crate::{Config, LogLevel};

pub struct LunarSettingsApp {
    pub config: Option<Config>,
    /// Apps drawer preferences
    pub launcher_prefs: Box<dyn PreferenceStore>,
    /// Weather widget and host preferences
    pub settings_prefs: Box<dyn PreferenceStore>,
    pub apps_settings: DlgAppsSettings,
    pub weather_settings: DlgWeatherSettings,
    pub log_level: LogLevel,
    pub show_logs: bool,
}
