use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use crate::models::calendar::{CalendarView, CellStyle, DayCell};
use crate::services::navigation::ClickEvent;

/// Side length of a day cell
const CELL_SIZE: f32 = 44.0;

/// Month labels per row of the month selector
const MONTHS_PER_ROW: usize = 6;

/// Action returned from month view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthViewAction {
    /// No action
    None,
    PrevYear,
    NextYear,
    PrevMonth,
    NextMonth,
    Today,
    /// A month label was clicked
    MonthClicked(ClickEvent),
    /// A day cell was clicked
    DayClicked(ClickEvent),
}

pub struct MonthView;

impl MonthView {
    /// Render the calendar view and report what the user clicked.
    pub fn show(ui: &mut egui::Ui, view: &CalendarView) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        Self::render_header(ui, view, &mut action);
        ui.add_space(4.0);
        Self::render_month_selector(ui, view, &mut action);
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);
        Self::render_day_grid(ui, view, &mut action);
        ui.add_space(6.0);
        ui.separator();
        ui.label(format!("Selected date: {}", view.formatted_date));

        action
    }

    fn render_header(ui: &mut egui::Ui, view: &CalendarView, action: &mut MonthViewAction) {
        ui.horizontal(|ui| {
            if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
                *action = MonthViewAction::PrevYear;
            }
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                *action = MonthViewAction::PrevMonth;
            }

            let summary = &view.current_date;
            ui.heading(format!(
                "{} {}, {}",
                summary.weekday_name, summary.day, summary.year
            ));

            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                *action = MonthViewAction::NextMonth;
            }
            if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
                *action = MonthViewAction::NextYear;
            }
            if ui.button("Today").clicked() {
                *action = MonthViewAction::Today;
            }
        });
    }

    fn render_month_selector(ui: &mut egui::Ui, view: &CalendarView, action: &mut MonthViewAction) {
        egui::Grid::new("month_selector_grid")
            .num_columns(MONTHS_PER_ROW)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for row in view.month_labels.chunks(MONTHS_PER_ROW) {
                    for label in row {
                        if ui.selectable_label(label.is_active, label.name).clicked() {
                            *action = MonthViewAction::MonthClicked(ClickEvent::on_month(label.ordinal));
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn render_day_grid(ui: &mut egui::Ui, view: &CalendarView, action: &mut MonthViewAction) {
        let palette = CalendarCellPalette::from_visuals(ui.visuals());

        egui::Grid::new("month_day_grid")
            .num_columns(7)
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                for label in &view.weekday_labels {
                    ui.allocate_ui_with_layout(
                        Vec2::new(CELL_SIZE, 20.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(egui::RichText::new(label.abbreviation).strong());
                        },
                    );
                }
                ui.end_row();

                for week in view.day_grid.chunks(7) {
                    for cell in week {
                        if Self::render_day_cell(ui, cell, palette) {
                            *action = MonthViewAction::DayClicked(ClickEvent::on_day(
                                cell.day_number,
                                cell.month,
                                cell.year,
                            ));
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Paint one day cell; returns whether it was clicked.
    fn render_day_cell(ui: &mut egui::Ui, cell: &DayCell, palette: CalendarCellPalette) -> bool {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(CELL_SIZE), Sense::click());

        let tags = cell.style_tags();
        let colors = cell_colors(&tags, palette);
        ui.painter().rect_filled(rect, 3.0, colors.background);
        ui.painter()
            .rect_stroke(rect, 3.0, Stroke::new(1.0, colors.border));

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 3.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            cell.day_number.to_string(),
            FontId::proportional(14.0),
            colors.text,
        );

        if tags.contains(&CellStyle::EventDay) {
            ui.painter().circle_filled(
                Pos2::new(rect.center().x, rect.bottom() - 7.0),
                3.0,
                palette.event_marker,
            );
        }

        response.on_hover_text(cell.key()).clicked()
    }
}

/// Colours for one day cell
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellColors {
    background: Color32,
    border: Color32,
    text: Color32,
}

/// Map a cell's style tags onto the palette. Selection wins over today,
/// which wins over another-month padding.
fn cell_colors(tags: &[CellStyle], palette: CalendarCellPalette) -> CellColors {
    let has = |style| tags.contains(&style);
    let another_month = has(CellStyle::AnotherMonth);

    let background = if has(CellStyle::SelectedDay) {
        palette.selected_bg
    } else if has(CellStyle::ActiveDay) {
        palette.today_bg
    } else if another_month {
        palette.other_month_bg
    } else {
        palette.regular_bg
    };

    CellColors {
        background,
        border: if has(CellStyle::ActiveDay) {
            palette.today_border
        } else {
            palette.border
        },
        text: if another_month {
            palette.other_month_text
        } else {
            palette.text
        },
    }
}
