pub use crate::dlg_weather_settings_stt::*;
use crate::chip_group::{chip_group, ChipOption};
use crate::prefs_keys::{KEY_CITY_NAME, KEY_OWM_API, KEY_SHOW_CITY, KEY_TEMP_UNIT};
use crate::prefs_store::{save_or_log, PreferenceStore, PrefsExt};
use eframe::egui;

impl TempUnit {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(TempUnit::Celsius),
            1 => Some(TempUnit::Fahrenheit),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            TempUnit::Celsius => 0,
            TempUnit::Fahrenheit => 1,
        }
    }
}

impl ChipOption for TempUnit {
    const ALL: &'static [Self] = &[TempUnit::Celsius, TempUnit::Fahrenheit];

    fn label(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "Celsius",
            TempUnit::Fahrenheit => "Fahrenheit",
        }
    }
}

/// Strips leading and trailing spaces and ASCII control characters.
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

impl DlgWeatherSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, store: &dyn PreferenceStore) {
        self.city_name = store.get(&KEY_CITY_NAME);
        self.owm_api = store.get(&KEY_OWM_API);
        self.temp_unit = TempUnit::from_code(store.get(&KEY_TEMP_UNIT));
        self.show_city = store.get(&KEY_SHOW_CITY);
        self.open = true;
    }

    /// Closes the sheet, always writing both text inputs (trimmed), edited or not.
    pub fn dismiss(&mut self, store: &mut dyn PreferenceStore) {
        self.open = false;
        save_or_log(store, &KEY_CITY_NAME, trim_input(&self.city_name).to_string());
        save_or_log(store, &KEY_OWM_API, trim_input(&self.owm_api).to_string());
        log::debug!("Weather settings dismissed");
    }

    pub fn set_temp_unit(&mut self, store: &mut dyn PreferenceStore, unit: TempUnit) {
        self.temp_unit = Some(unit);
        save_or_log(store, &KEY_TEMP_UNIT, unit.code());
    }

    pub fn set_show_city(&mut self, store: &mut dyn PreferenceStore, show: bool) {
        self.show_city = show;
        save_or_log(store, &KEY_SHOW_CITY, show);
    }

    pub fn show(&mut self, ctx: &egui::Context, store: &mut dyn PreferenceStore) {
        if !self.open {
            return;
        }

        let mut close_clicked = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        egui::TopBottomPanel::bottom("weather_settings_sheet")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Weather");
                ui.add_space(8.0);

                egui::Grid::new("weather_settings_grid")
                    .num_columns(2)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("City");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.city_name)
                                .desired_width(240.0)
                                .hint_text("e.g. Dhaka"),
                        );
                        ui.end_row();

                        ui.label("OpenWeatherMap API key");
                        ui.add(egui::TextEdit::singleline(&mut self.owm_api).desired_width(240.0));
                        ui.end_row();

                        ui.label("Temperature unit");
                        if let Some(unit) = chip_group(ui, self.temp_unit, true) {
                            self.set_temp_unit(store, unit);
                        }
                        ui.end_row();

                        ui.label("Show city name");
                        if let Some(show) = chip_group(ui, Some(self.show_city), true) {
                            self.set_show_city(store, show);
                        }
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
                ui.add_space(8.0);
            });

        if close_clicked {
            self.dismiss(store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs_store::MemoryPrefs;

    #[test]
    fn trims_spaces_and_control_characters() {
        assert_eq!(trim_input("  New York  "), "New York");
        assert_eq!(trim_input("\t\nabc123\r\n"), "abc123");
        assert_eq!(trim_input("   "), "");
        // Only ASCII space and below count
        assert_eq!(trim_input("\u{00a0}Paris\u{00a0}"), "\u{00a0}Paris\u{00a0}");
    }

    #[test]
    fn unknown_unit_code_selects_no_chip() {
        let mut prefs = MemoryPrefs::new();
        prefs.put(&KEY_TEMP_UNIT, 7).unwrap();

        let mut dlg = DlgWeatherSettings::new();
        dlg.open(&prefs);
        assert_eq!(dlg.temp_unit, None);
    }

    #[test]
    fn text_edits_are_not_written_before_dismiss() {
        let mut prefs = MemoryPrefs::new();
        let mut dlg = DlgWeatherSettings::new();
        dlg.open(&prefs);

        dlg.city_name = "Sylhet".to_string();
        dlg.set_show_city(&mut prefs, true);
        assert_eq!(prefs.get_value(KEY_CITY_NAME.name), None);

        dlg.dismiss(&mut prefs);
        assert_eq!(prefs.get(&KEY_CITY_NAME), "Sylhet");
        assert!(!dlg.open);
    }

    #[test]
    fn escape_dismisses_and_saves_trimmed_text() {
        let mut prefs = MemoryPrefs::new();
        let mut dlg = DlgWeatherSettings::new();
        dlg.open(&prefs);
        dlg.city_name = "  New York  ".to_string();

        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 1200.0),
            )),
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| dlg.show(ctx, &mut prefs));

        assert!(!dlg.open);
        assert_eq!(prefs.get(&KEY_CITY_NAME), "New York");
        assert_eq!(prefs.get(&KEY_OWM_API), "");
    }
}
