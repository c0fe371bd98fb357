use eframe::egui;

/// Finite set of mutually exclusive choices rendered as a row of chips
pub trait ChipOption: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Yes/No chips for plain flags
impl ChipOption for bool {
    const ALL: &'static [Self] = &[true, false];

    fn label(&self) -> &'static str {
        if *self {
            "Yes"
        } else {
            "No"
        }
    }
}

/// A click on the chip that is already selected is not a change.
pub fn pick<T: PartialEq>(current: Option<T>, clicked: T) -> Option<T> {
    if current.as_ref() == Some(&clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Renders a single-selection chip row.
///
/// Returns the option the user picked this frame, only when it differs from `current`.
pub fn chip_group<T: ChipOption>(ui: &mut egui::Ui, current: Option<T>, enabled: bool) -> Option<T> {
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        for option in T::ALL {
            let selected = current == Some(*option);
            let response = ui
                .add_enabled_ui(enabled, |ui| ui.selectable_label(selected, option.label()))
                .inner;
            if response.clicked() {
                picked = pick(current, *option);
            }
        }
    });

    picked
}
