// Month Calendar Application
// Main entry point

use anyhow::anyhow;
use month_calendar::models::settings::Settings;
use month_calendar::services::clock::SystemClock;
use month_calendar::services::events::load_event_list_or_empty;
use month_calendar::services::navigation::MonthCalendar;
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_egui::CalendarApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let settings_service = SettingsService::from_environment();
    let settings = match &settings_service {
        Some(service) => {
            log::info!("Reading settings from {}", service.path().display());
            service.load_or_default()
        }
        None => {
            log::warn!("No configuration directory available, using default settings");
            Settings::default()
        }
    };

    let events = load_event_list_or_empty(settings.events_file.as_deref());
    let calendar = MonthCalendar::new(Box::new(SystemClock), events);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Calendar")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(|cc| {
            Ok(Box::new(CalendarApp::new(
                cc,
                calendar,
                settings,
                settings_service,
            )))
        }),
    )
    .map_err(|e| anyhow!("Failed to run calendar window: {e}"))
}
