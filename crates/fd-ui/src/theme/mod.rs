//! Dashboard look and feel

use egui::style::WidgetVisuals;
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use fd_core::Severity;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Dashboard Dark".to_string(),
            dark_mode: true,
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "Dashboard Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Surface colors of the dark theme, darkest first
struct Palette {
    background: Color32,
    panel: Color32,
    widget: Color32,
    hover: Color32,
    pressed: Color32,
    border: Color32,
    text: Color32,
}

const DARK: Palette = Palette {
    background: Color32::from_rgb(20, 22, 26),
    panel: Color32::from_rgb(28, 31, 36),
    widget: Color32::from_rgb(38, 42, 48),
    hover: Color32::from_rgb(50, 55, 63),
    pressed: Color32::from_rgb(62, 68, 78),
    border: Color32::from_rgb(66, 72, 82),
    text: Color32::from_rgb(222, 224, 228),
};

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    tracing::debug!("Applying theme '{}'", theme.name);

    let visuals = if theme.dark_mode {
        dark_visuals(&DARK)
    } else {
        Visuals::light()
    };

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    for (text_style, size) in [
        (TextStyle::Small, 11.0),
        (TextStyle::Body, 14.0),
        (TextStyle::Button, 14.0),
        (TextStyle::Heading, 24.0),
    ] {
        style.text_styles.insert(text_style, FontId::new(size, FontFamily::Proportional));
    }
    style.text_styles.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.visuals = visuals;

    ctx.set_style(style);
}

fn dark_visuals(palette: &Palette) -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.widget;
    visuals.code_bg_color = palette.widget;

    let widgets = &mut visuals.widgets;
    restyle(&mut widgets.noninteractive, palette.panel, palette.border, palette.text);
    restyle(&mut widgets.inactive, palette.widget, palette.border, palette.text);
    restyle(&mut widgets.hovered, palette.hover, palette.border, palette.text);
    restyle(&mut widgets.active, palette.pressed, accent_color(), palette.text);

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    visuals
}

fn restyle(widget: &mut WidgetVisuals, fill: Color32, border: Color32, text: Color32) {
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::new(1.0, border);
    widget.fg_stroke = Stroke::new(1.0, text);
    widget.rounding = Rounding::same(4.0);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

pub fn warning_color() -> Color32 {
    Color32::from_rgb(230, 180, 80)
}

/// Banner color for a diagnostic
pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Warning => warning_color(),
        Severity::Error => error_color(),
    }
}
