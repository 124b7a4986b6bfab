use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Chart surface ────────────────────────────────────────────────────────────

pub const SURFACE_BG: Color32 = Color32::WHITE;
pub const SURFACE_BORDER: Stroke = Stroke {
    width: 2.0,
    color: Color32::BLACK,
};
pub const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);
pub const ROW_HOVER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);
pub const LABEL_PANEL: Color32 = Color32::from_rgb(211, 211, 211); // lightgray
pub const TASK_BOX: Color32 = Color32::from_rgb(0, 128, 128); // teal
pub const TASK_BOX_SELECTED: Stroke = Stroke {
    width: 2.0,
    color: Color32::from_rgb(90, 140, 220),
};
pub const TASK_LABEL_TEXT: Color32 = Color32::from_rgb(30, 30, 40);

// ── Application chrome ──────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 20, 28);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);
pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(240, 110, 110);

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const EDITOR_WIDTH: f32 = 300.0;
pub const LABEL_PADDING: f32 = 8.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_label() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
