pub use crate::dlg_restart_confirm_stt::*;
use eframe::egui;

/// Exits the process; the launcher supervisor brings the app back up.
pub fn exit_for_restart() {
    log::info!("Exiting process for restart");
    std::process::exit(0);
}

impl DlgRestartConfirm {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the prompt once a choice is made; passes the choice through.
    pub fn resolve(&mut self, choice: Option<RestartChoice>) -> Option<RestartChoice> {
        if choice.is_some() {
            self.close();
        }
        choice
    }

    /// Renders the prompt. Returns the choice if one was made this frame.
    ///
    /// Escape or a click on the backdrop counts as Later.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<RestartChoice> {
        if !self.open {
            return None;
        }

        let mut choice = None;

        let modal = egui::Modal::new(egui::Id::new("restart_confirm_dialog")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.heading("Restart now?");
            ui.add_space(8.0);
            ui.label("Some of the changed settings take effect after the launcher restarts.");
            ui.add_space(8.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Restart").clicked() {
                    log::info!("Restart prompt: Restart clicked");
                    choice = Some(RestartChoice::Restart);
                }
                if ui.button("Later").clicked() {
                    log::info!("Restart prompt: Later clicked");
                    choice = Some(RestartChoice::Later);
                }
            });
        });

        if choice.is_none() && modal.should_close() {
            log::info!("Restart prompt dismissed");
            choice = Some(RestartChoice::Later);
        }

        self.resolve(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_choice_closes_the_prompt() {
        for choice in [RestartChoice::Restart, RestartChoice::Later] {
            let mut dlg = DlgRestartConfirm::default();
            dlg.open();
            assert_eq!(dlg.resolve(Some(choice)), Some(choice));
            assert!(!dlg.open);
        }
    }

    #[test]
    fn no_choice_keeps_the_prompt_open() {
        let mut dlg = DlgRestartConfirm::default();
        dlg.open();
        assert_eq!(dlg.resolve(None), None);
        assert!(dlg.open);
    }

    #[test]
    fn closed_prompt_renders_nothing() {
        let ctx = egui::Context::default();
        let mut dlg = DlgRestartConfirm::default();
        let mut choice = Some(RestartChoice::Restart);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            choice = dlg.show(ctx);
        });
        assert_eq!(choice, None);
    }

    #[test]
    fn escape_counts_as_later() {
        let ctx = egui::Context::default();
        let mut dlg = DlgRestartConfirm::default();
        dlg.open();

        let input = |events| egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 1200.0),
            )),
            events,
            ..Default::default()
        };

        let mut choice = None;
        let _ = ctx.run(input(Vec::new()), |ctx| choice = dlg.show(ctx));
        assert_eq!(choice, None);
        assert!(dlg.open);

        let escape = egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        let _ = ctx.run(input(vec![escape]), |ctx| choice = dlg.show(ctx));
        assert_eq!(choice, Some(RestartChoice::Later));
        assert!(!dlg.open);
    }
}
