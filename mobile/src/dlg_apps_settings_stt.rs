use crate::dlg_restart_confirm_stt::{DlgRestartConfirm, RestartFn};
use crate::prefs_keys::{DEFAULT_GRID_COLUMNS, DEFAULT_SCROLLBAR_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerLayout {
    List,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAlignment {
    Left,
    Center,
    Right,
}

pub struct DlgAppsSettings {
    pub open: bool,
    // Form state, mirrors the launcher preferences
    pub keyboard_search: bool,
    pub quick_launch: bool,
    pub layout: DrawerLayout,
    /// `None` when the stored gravity matches no chip
    pub alignment: Option<AppAlignment>,
    pub grid_columns: f32,
    pub scrollbar_height: f32,
    /// Set by changes that only apply after a restart
    pub settings_changed: bool,
    pub restart_confirm: DlgRestartConfirm,
    pub restart: RestartFn,
}

impl Default for DlgAppsSettings {
    fn default() -> Self {
        Self {
            open: false,
            keyboard_search: false,
            quick_launch: true,
            layout: DrawerLayout::List,
            alignment: Some(AppAlignment::Center),
            grid_columns: DEFAULT_GRID_COLUMNS as f32,
            scrollbar_height: DEFAULT_SCROLLBAR_HEIGHT as f32,
            settings_changed: false,
            restart_confirm: DlgRestartConfirm::default(),
            restart: Box::new(crate::dlg_restart_confirm::exit_for_restart),
        }
    }
}
