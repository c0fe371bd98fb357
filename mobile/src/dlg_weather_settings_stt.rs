#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone)]
pub struct DlgWeatherSettings {
    pub open: bool,
    // Text inputs, persisted only when the sheet is dismissed
    pub city_name: String,
    pub owm_api: String,
    /// `None` when the stored unit matches no chip
    pub temp_unit: Option<TempUnit>,
    pub show_city: bool,
}

impl Default for DlgWeatherSettings {
    fn default() -> Self {
        Self {
            open: false,
            city_name: String::new(),
            owm_api: String::new(),
            temp_unit: Some(TempUnit::Celsius),
            show_city: false,
        }
    }
}
