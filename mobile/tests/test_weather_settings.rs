use lunar_settings::dlg_weather_settings::{DlgWeatherSettings, TempUnit};
use lunar_settings::prefs_keys::*;
use lunar_settings::prefs_store::{FilePrefs, MemoryPrefs, PrefValue, PreferenceStore, PrefsExt};
use lunar_settings::Config;

#[test]
fn opening_empty_store_shows_defaults() {
    let prefs = MemoryPrefs::new();
    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&prefs);

    assert!(dlg.open);
    assert_eq!(dlg.city_name, "");
    assert_eq!(dlg.owm_api, "");
    assert_eq!(dlg.temp_unit, Some(TempUnit::Celsius));
    assert!(!dlg.show_city);
}

#[test]
fn toggles_write_immediately() {
    let mut prefs = MemoryPrefs::new();
    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&prefs);

    dlg.set_temp_unit(&mut prefs, TempUnit::Fahrenheit);
    assert_eq!(prefs.get(&KEY_TEMP_UNIT), 1);
    dlg.set_temp_unit(&mut prefs, TempUnit::Celsius);
    assert_eq!(prefs.get(&KEY_TEMP_UNIT), 0);

    dlg.set_show_city(&mut prefs, true);
    assert!(prefs.get(&KEY_SHOW_CITY));
    dlg.set_show_city(&mut prefs, false);
    assert!(!prefs.get(&KEY_SHOW_CITY));
}

#[test]
fn dismiss_trims_city_name() {
    let mut prefs = MemoryPrefs::new();
    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&prefs);

    dlg.city_name = "  New York  ".to_string();
    dlg.owm_api = "\tabc123 \n".to_string();
    dlg.dismiss(&mut prefs);

    assert_eq!(prefs.get(&KEY_CITY_NAME), "New York");
    assert_eq!(prefs.get(&KEY_OWM_API), "abc123");
}

#[test]
fn dismiss_without_edits_still_persists_text_fields() {
    let mut prefs = MemoryPrefs::new();
    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&prefs);
    dlg.dismiss(&mut prefs);

    assert_eq!(prefs.get_value(KEY_CITY_NAME.name), Some(PrefValue::Str(String::new())));
    assert_eq!(prefs.get_value(KEY_OWM_API.name), Some(PrefValue::Str(String::new())));
}

#[test]
fn dismiss_accepts_empty_input_over_stored_value() {
    let mut prefs = MemoryPrefs::new();
    prefs.put(&KEY_CITY_NAME, "Rajshahi".to_string()).unwrap();

    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&prefs);
    assert_eq!(dlg.city_name, "Rajshahi");

    dlg.city_name = "   ".to_string();
    dlg.dismiss(&mut prefs);
    assert_eq!(prefs.get(&KEY_CITY_NAME), "");
}

#[test]
fn settings_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path());

    let mut prefs = config.open_prefs(PREFS_SETTINGS).unwrap();
    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&prefs);
    dlg.set_temp_unit(&mut prefs, TempUnit::Fahrenheit);
    dlg.set_show_city(&mut prefs, true);
    dlg.city_name = " Chattogram ".to_string();
    dlg.owm_api = "key-42".to_string();
    dlg.dismiss(&mut prefs);

    let reopened = FilePrefs::open(config.prefs_path(PREFS_SETTINGS)).unwrap();
    let mut dlg = DlgWeatherSettings::new();
    dlg.open(&reopened);
    assert_eq!(dlg.temp_unit, Some(TempUnit::Fahrenheit));
    assert!(dlg.show_city);
    assert_eq!(dlg.city_name, "Chattogram");
    assert_eq!(dlg.owm_api, "key-42");
}
