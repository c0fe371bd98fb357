pub use crate::dlg_apps_settings_stt::*;
use crate::chip_group::{chip_group, ChipOption};
use crate::dlg_restart_confirm::{RestartChoice, RestartFn};
use crate::prefs_keys::*;
use crate::prefs_store::{save_or_log, PreferenceStore, PrefsExt};
use eframe::egui;

impl DrawerLayout {
    pub fn from_is_list(is_list: bool) -> Self {
        if is_list {
            DrawerLayout::List
        } else {
            DrawerLayout::Grid
        }
    }

    pub fn is_list(self) -> bool {
        self == DrawerLayout::List
    }
}

impl ChipOption for DrawerLayout {
    const ALL: &'static [Self] = &[DrawerLayout::List, DrawerLayout::Grid];

    fn label(&self) -> &'static str {
        match self {
            DrawerLayout::List => "List",
            DrawerLayout::Grid => "Grid",
        }
    }
}

impl AppAlignment {
    pub fn from_gravity(gravity: i32) -> Option<Self> {
        match gravity {
            GRAVITY_LEFT => Some(AppAlignment::Left),
            GRAVITY_CENTER => Some(AppAlignment::Center),
            GRAVITY_RIGHT => Some(AppAlignment::Right),
            _ => None,
        }
    }

    pub fn gravity(self) -> i32 {
        match self {
            AppAlignment::Left => GRAVITY_LEFT,
            AppAlignment::Center => GRAVITY_CENTER,
            AppAlignment::Right => GRAVITY_RIGHT,
        }
    }
}

impl ChipOption for AppAlignment {
    const ALL: &'static [Self] = &[AppAlignment::Left, AppAlignment::Center, AppAlignment::Right];

    fn label(&self) -> &'static str {
        match self {
            AppAlignment::Left => "Left",
            AppAlignment::Center => "Center",
            AppAlignment::Right => "Right",
        }
    }
}

/// A slider also reports `changed()` when it snaps an off-grid value to its step,
/// which must not count as an edit.
fn moved_by_user(response: &egui::Response) -> bool {
    response.changed()
        && (response.dragged()
            || response.drag_stopped()
            || response.clicked()
            || response.has_focus())
}

impl DlgAppsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the action run when the user accepts the restart prompt
    pub fn with_restart_handler(mut self, restart: RestartFn) -> Self {
        self.restart = restart;
        self
    }

    /// Opens the sheet with controls initialized from the stored values
    pub fn open(&mut self, store: &dyn PreferenceStore) {
        self.keyboard_search = store.get(&KEY_KEYBOARD_SEARCH);
        self.quick_launch = store.get(&KEY_QUICK_LAUNCH);
        self.layout = DrawerLayout::from_is_list(store.get(&KEY_APPS_LAYOUT));
        self.alignment = AppAlignment::from_gravity(store.get(&KEY_DRAW_ALIGN));
        self.grid_columns = store.get(&KEY_GRID_COLUMNS) as f32;
        self.scrollbar_height = store.get(&KEY_SCROLLBAR_HEIGHT) as f32;
        self.settings_changed = false;
        self.restart_confirm.close();
        self.open = true;
        log::debug!("Apps settings opened, layout {:?}", self.layout);
    }

    /// Closes the sheet. Returns true when the restart prompt was raised.
    pub fn close(&mut self) -> bool {
        self.open = false;
        if self.settings_changed {
            self.restart_confirm.open();
        }
        self.settings_changed
    }

    pub fn alignment_enabled(&self) -> bool {
        self.layout == DrawerLayout::List
    }

    pub fn columns_enabled(&self) -> bool {
        self.layout == DrawerLayout::Grid
    }

    pub fn set_keyboard_search(&mut self, store: &mut dyn PreferenceStore, enabled: bool) {
        self.keyboard_search = enabled;
        save_or_log(store, &KEY_KEYBOARD_SEARCH, enabled);
    }

    pub fn set_quick_launch(&mut self, store: &mut dyn PreferenceStore, enabled: bool) {
        self.quick_launch = enabled;
        save_or_log(store, &KEY_QUICK_LAUNCH, enabled);
    }

    pub fn set_layout(&mut self, store: &mut dyn PreferenceStore, layout: DrawerLayout) {
        self.settings_changed = true;
        self.layout = layout;
        save_or_log(store, &KEY_APPS_LAYOUT, layout.is_list());
    }

    pub fn set_alignment(&mut self, store: &mut dyn PreferenceStore, alignment: AppAlignment) {
        self.alignment = Some(alignment);
        save_or_log(store, &KEY_DRAW_ALIGN, alignment.gravity());
    }

    pub fn set_grid_columns(&mut self, store: &mut dyn PreferenceStore, value: f32) {
        self.settings_changed = true;
        self.grid_columns = value;
        save_or_log(store, &KEY_GRID_COLUMNS, value as i32);
    }

    // Does not require a restart, unlike the column count
    pub fn set_scrollbar_height(&mut self, store: &mut dyn PreferenceStore, value: f32) {
        self.scrollbar_height = value;
        save_or_log(store, &KEY_SCROLLBAR_HEIGHT, value as i32);
    }

    pub fn resolve_restart(&mut self, choice: RestartChoice) {
        match choice {
            RestartChoice::Restart => (self.restart)(),
            RestartChoice::Later => log::debug!("Restart deferred"),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, store: &mut dyn PreferenceStore) {
        if let Some(choice) = self.restart_confirm.show(ctx) {
            self.resolve_restart(choice);
        }

        if !self.open {
            return;
        }

        let mut close_clicked = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        egui::TopBottomPanel::bottom("apps_settings_sheet")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Apps");
                ui.add_space(8.0);

                egui::Grid::new("apps_settings_grid")
                    .num_columns(2)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Search with keyboard");
                        if let Some(enabled) = chip_group(ui, Some(self.keyboard_search), true) {
                            self.set_keyboard_search(store, enabled);
                        }
                        ui.end_row();

                        ui.label("Quick launch");
                        if let Some(enabled) = chip_group(ui, Some(self.quick_launch), true) {
                            self.set_quick_launch(store, enabled);
                        }
                        ui.end_row();

                        ui.label("Drawer layout");
                        if let Some(layout) = chip_group(ui, Some(self.layout), true) {
                            self.set_layout(store, layout);
                        }
                        ui.end_row();

                        ui.label("App alignment");
                        if let Some(alignment) =
                            chip_group(ui, self.alignment, self.alignment_enabled())
                        {
                            self.set_alignment(store, alignment);
                        }
                        ui.end_row();

                        ui.label("Grid columns");
                        let mut columns = self.grid_columns;
                        let response = ui.add_enabled(
                            self.columns_enabled(),
                            egui::Slider::new(&mut columns, GRID_COLUMNS_RANGE).step_by(1.0),
                        );
                        if moved_by_user(&response) {
                            self.set_grid_columns(store, columns);
                        }
                        ui.end_row();

                        ui.label("Scrollbar height");
                        let mut height = self.scrollbar_height;
                        let response = ui.add(
                            egui::Slider::new(&mut height, SCROLLBAR_HEIGHT_RANGE)
                                .step_by(SCROLLBAR_HEIGHT_STEP),
                        );
                        if moved_by_user(&response) {
                            self.set_scrollbar_height(store, height);
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
            self.close();
        }
    }
}
