use eframe::egui::{self, Color32};

/// Visual styling for the widget, kept out of the state machinery so colors
/// and rounding can change without touching any logic.
#[derive(Debug, Clone)]
pub struct Theme {
    pub window_fill: Color32,
    pub window_stroke: Color32,
    pub window_rounding: f32,

    pub title: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub danger: Color32,

    pub accent: Color32,
    pub accent_hover: Color32,

    pub row_fill: Color32,
    pub row_stroke: Color32,
    pub row_rounding: f32,
    pub placeholder_fill: Color32,
    pub placeholder_stroke: Color32,

    pub ball_fill: Color32,
    pub ball_stroke: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window_fill: Color32::from_rgba_unmultiplied(245, 247, 250, 245),
            window_stroke: Color32::from_rgba_unmultiplied(189, 195, 199, 100),
            window_rounding: 15.0,

            title: Color32::from_rgb(30, 41, 59),
            text: Color32::from_rgb(51, 65, 85),
            muted: Color32::from_rgb(148, 163, 184),
            danger: Color32::from_rgb(239, 68, 68),

            accent: Color32::from_rgb(59, 130, 246),
            accent_hover: Color32::from_rgb(37, 99, 235),

            row_fill: Color32::WHITE,
            row_stroke: Color32::from_rgb(226, 232, 240),
            row_rounding: 10.0,
            placeholder_fill: Color32::from_rgba_unmultiplied(241, 245, 249, 153),
            placeholder_stroke: Color32::from_rgb(203, 213, 225),

            ball_fill: Color32::from_rgb(96, 165, 250),
            ball_stroke: Color32::WHITE,
        }
    }
}

impl Theme {
    /// Install the parts of the theme that egui reads from its global style.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.panel_fill = Color32::TRANSPARENT;
        style.visuals.window_fill = Color32::WHITE;
        style.visuals.window_rounding = self.window_rounding.into();
        style.visuals.override_text_color = Some(self.text);
        style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(248, 250, 252);
        ctx.set_style(style);
    }
}
