mod shortcuts;

use crate::models::settings::Settings;
use crate::services::navigation::{MonthCalendar, NavigationOutcome};
use crate::services::settings::SettingsService;
use crate::ui_egui::views::month_view::{MonthView, MonthViewAction};

pub struct CalendarApp {
    /// View-model driving everything on screen
    calendar: MonthCalendar,
    settings: Settings,
    /// Where settings are written on exit; `None` without a config directory
    settings_service: Option<SettingsService>,
    settings_dirty: bool,
}

impl CalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        calendar: MonthCalendar,
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        log::info!("Calendar opened on {}", calendar.view().formatted_date);
        Self {
            calendar,
            settings,
            settings_service,
            settings_dirty: false,
        }
    }

    fn track_window_size(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|input| input.viewport().inner_rect) {
            if remember_window_size(&mut self.settings, rect.size()) {
                self.settings_dirty = true;
            }
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);
        self.track_window_size(ctx);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| MonthView::show(ui, self.calendar.view()))
            .inner;
        apply_action(&mut self.calendar, action);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.settings_dirty {
            save_settings(self.settings_service.as_ref(), &self.settings);
        }
    }
}

/// Record a new window size. Returns whether it moved by more than a pixel.
pub(crate) fn remember_window_size(settings: &mut Settings, size: egui::Vec2) -> bool {
    let changed = (settings.window_width - size.x).abs() > 1.0
        || (settings.window_height - size.y).abs() > 1.0;
    if changed {
        settings.window_width = size.x;
        settings.window_height = size.y;
    }
    changed
}

/// Persist settings, logging instead of failing the shutdown.
pub(crate) fn save_settings(service: Option<&SettingsService>, settings: &Settings) {
    let Some(service) = service else {
        log::debug!("No settings location, window size not saved");
        return;
    };
    match service.save(settings) {
        Ok(()) => log::info!("Saved settings to {}", service.path().display()),
        Err(e) => log::warn!("Failed to save settings: {:#}", e),
    }
}

/// Forward a view action to the calendar. `None` when there was nothing to do.
pub(crate) fn apply_action(
    calendar: &mut MonthCalendar,
    action: MonthViewAction,
) -> Option<NavigationOutcome> {
    let outcome = match action {
        MonthViewAction::None => return None,
        MonthViewAction::PrevYear => calendar.prev_year(),
        MonthViewAction::NextYear => calendar.next_year(),
        MonthViewAction::PrevMonth => calendar.prev_month(),
        MonthViewAction::NextMonth => calendar.next_month(),
        MonthViewAction::Today => calendar.go_to_today(),
        MonthViewAction::MonthClicked(click) => calendar.month_click(&click),
        MonthViewAction::DayClicked(click) => calendar.day_click(&click),
    };
    Some(outcome)
}
