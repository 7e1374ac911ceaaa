//! Theme palettes for QuickDig.
//!
//! Two hardcoded palettes, dark and light, mapped onto `egui::Visuals` and
//! applied through the context in one call. The current theme lives in the
//! window's settings; nothing here holds state.

use egui::{Color32, Stroke, Visuals};

/// Fixed 12-slot palette covering the window, text, button, link, highlight,
/// and popup/tooltip roles.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window: Color32,
    pub window_text: Color32,
    pub base: Color32,
    pub alternate_base: Color32,
    pub popup: Color32,
    pub text: Color32,
    pub button: Color32,
    pub button_text: Color32,
    pub error_text: Color32,
    pub link: Color32,
    pub highlight: Color32,
    pub highlight_text: Color32,
}

pub const DARK: Palette = Palette {
    window: Color32::from_rgb(53, 53, 53),
    window_text: Color32::WHITE,
    base: Color32::from_rgb(25, 25, 25),
    alternate_base: Color32::from_rgb(53, 53, 53),
    popup: Color32::from_rgb(25, 25, 25),
    text: Color32::WHITE,
    button: Color32::from_rgb(53, 53, 53),
    button_text: Color32::WHITE,
    error_text: Color32::from_rgb(255, 0, 0),
    link: Color32::from_rgb(42, 130, 218),
    highlight: Color32::from_rgb(42, 130, 218),
    highlight_text: Color32::BLACK,
};

pub const LIGHT: Palette = Palette {
    window: Color32::from_rgb(240, 240, 240),
    window_text: Color32::BLACK,
    base: Color32::from_rgb(255, 255, 255),
    alternate_base: Color32::from_rgb(245, 245, 245),
    popup: Color32::from_rgb(255, 255, 255),
    text: Color32::BLACK,
    button: Color32::from_rgb(230, 230, 230),
    button_text: Color32::BLACK,
    error_text: Color32::from_rgb(255, 0, 0),
    link: Color32::from_rgb(0, 0, 255),
    highlight: Color32::from_rgb(51, 153, 255),
    highlight_text: Color32::WHITE,
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

/// Pure mapping from the dark-mode flag to a full set of visuals.
pub fn visuals(dark_mode: bool) -> Visuals {
    let palette = palette(dark_mode);
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.window;
    visuals.window_fill = palette.popup;
    visuals.extreme_bg_color = palette.base;
    visuals.faint_bg_color = palette.alternate_base;
    visuals.code_bg_color = palette.alternate_base;
    visuals.hyperlink_color = palette.link;
    visuals.warn_fg_color = palette.error_text;
    visuals.error_fg_color = palette.error_text;
    visuals.selection.bg_fill = palette.highlight;
    visuals.selection.stroke = Stroke::new(1.0, palette.highlight_text);

    visuals.widgets.noninteractive.bg_fill = palette.window;
    visuals.widgets.noninteractive.fg_stroke.color = palette.window_text;
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.bg_fill = palette.button;
        widget.weak_bg_fill = palette.button;
        widget.fg_stroke.color = palette.button_text;
    }

    visuals
}

/// Swaps the whole palette on the running application in one call.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(visuals(dark_mode));
}
