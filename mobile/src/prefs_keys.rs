//! Preference scopes, keys and defaults shared by the settings panels.

use crate::prefs_store::PrefKey;
use std::ops::RangeInclusive;

/// Preference file holding the apps drawer options
pub const PREFS_LAUNCHER: &str = "launcher";
/// Preference file holding weather widget options and host settings
pub const PREFS_SETTINGS: &str = "settings";

pub const DEFAULT_GRID_COLUMNS: i32 = 4;
pub const GRID_COLUMNS_RANGE: RangeInclusive<f32> = 2.0..=6.0;

pub const DEFAULT_SCROLLBAR_HEIGHT: i32 = 160;
pub const SCROLLBAR_HEIGHT_RANGE: RangeInclusive<f32> = 100.0..=400.0;
pub const SCROLLBAR_HEIGHT_STEP: f64 = 10.0;

// Horizontal gravity codes understood by the app drawer
pub const GRAVITY_LEFT: i32 = 3;
pub const GRAVITY_CENTER: i32 = 17;
pub const GRAVITY_RIGHT: i32 = 5;

pub const KEY_KEYBOARD_SEARCH: PrefKey<bool> = PrefKey::new("keyboard_search", false);
pub const KEY_QUICK_LAUNCH: PrefKey<bool> = PrefKey::new("quick_launch", true);
/// `true` is the list layout, `false` the grid
pub const KEY_APPS_LAYOUT: PrefKey<bool> = PrefKey::new("apps_layout", true);
pub const KEY_DRAW_ALIGN: PrefKey<i32> = PrefKey::new("drawer_align", GRAVITY_CENTER);
pub const KEY_GRID_COLUMNS: PrefKey<i32> = PrefKey::new("grid_columns", DEFAULT_GRID_COLUMNS);
pub const KEY_SCROLLBAR_HEIGHT: PrefKey<i32> =
    PrefKey::new("scrollbar_height", DEFAULT_SCROLLBAR_HEIGHT);

pub const KEY_CITY_NAME: PrefKey<String> = PrefKey::new("city_name", String::new());
pub const KEY_OWM_API: PrefKey<String> = PrefKey::new("owm_api", String::new());
/// 0 is Celsius, 1 Fahrenheit
pub const KEY_TEMP_UNIT: PrefKey<i32> = PrefKey::new("temp_unit", 0);
pub const KEY_SHOW_CITY: PrefKey<bool> = PrefKey::new("show_city", false);

/// Empty or unknown names fall back to [`crate::LogLevel::default`]
pub const KEY_LOG_LEVEL: PrefKey<String> = PrefKey::new("log_level", String::new());
