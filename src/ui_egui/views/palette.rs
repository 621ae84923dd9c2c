use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub other_month_bg: Color32,
    pub today_bg: Color32,
    pub selected_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub hover_border: Color32,
    pub text: Color32,
    pub other_month_text: Color32,
    pub event_marker: Color32,
}

impl CalendarCellPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let accent = visuals.selection.bg_fill;
        let base = visuals.extreme_bg_color;
        let event_marker = if visuals.dark_mode {
            Color32::from_rgb(250, 180, 90)
        } else {
            Color32::from_rgb(200, 90, 20)
        };

        Self {
            regular_bg: base,
            other_month_bg: visuals.faint_bg_color,
            today_bg: blend(base, accent, 0.25),
            selected_bg: blend(base, accent, 0.55),
            border: visuals.widgets.noninteractive.bg_stroke.color,
            today_border: accent,
            hover_border: with_alpha(accent, if visuals.dark_mode { 160 } else { 120 }),
            text: visuals.text_color(),
            other_month_text: visuals.weak_text_color(),
            event_marker,
        }
    }
}
