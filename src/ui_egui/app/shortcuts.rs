use super::{apply_action, CalendarApp};
use crate::ui_egui::views::month_view::MonthViewAction;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                MonthViewAction::Today
            } else if i.key_pressed(egui::Key::PageUp) {
                MonthViewAction::PrevYear
            } else if i.key_pressed(egui::Key::PageDown) {
                MonthViewAction::NextYear
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                MonthViewAction::PrevMonth
            } else if i.key_pressed(egui::Key::ArrowRight) {
                MonthViewAction::NextMonth
            } else {
                MonthViewAction::None
            }
        });

        apply_action(&mut self.calendar, action);
    }
}
