//! Widget stylesheets.
//!
//! `widget.css` carries the rules every widget needs; size, shape and
//! placement rules are generated per option so a standalone snippet only
//! ships the variants it uses. The runtime bundle ships all of them.

use std::fmt::Write;

use super::{Template, TemplateVars};
use crate::widget::{ButtonSize, ButtonStyle, Position, WidgetOptions};

/// Variables for widget.css.
pub struct StyleVars {
    /// Variant rules inserted between the base and override rules.
    pub variants: String,
}

impl TemplateVars for StyleVars {
    fn apply(&self, content: &str) -> String {
        content.replace("/*! SHARE_VARIANTS */", self.variants.trim_end())
    }
}

pub const WIDGET_CSS: Template<StyleVars> = Template::new(include_str!("css/widget.css"));

/// Variables for floating.css.
pub struct FloatingVars {
    pub position: Position,
}

impl TemplateVars for FloatingVars {
    fn apply(&self, content: &str) -> String {
        let side = match self.position {
            Position::FloatingRight => "right",
            Position::FloatingLeft | Position::Inline => "left",
        };
        content
            .replace("__POSITION__", self.position.as_str())
            .replace("__SIDE__", side)
    }
}

pub const FLOATING_CSS: Template<FloatingVars> = Template::new(include_str!("css/floating.css"));

/// Per-size metrics: button padding, font size, icon-only padding, icon edge.
const fn size_metrics(size: ButtonSize) -> (&'static str, u8, &'static str, u8) {
    match size {
        ButtonSize::Small => ("0.5rem 1rem", 12, "0.5rem", 16),
        ButtonSize::Medium => ("0.75rem 1rem", 14, "0.75rem", 20),
        ButtonSize::Large => ("1rem 1.5rem", 16, "1rem", 24),
    }
}

const fn corner_radius(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Rounded => "8px",
        ButtonStyle::Square => "4px",
        ButtonStyle::Circle => "999px",
    }
}

fn size_rules(out: &mut String, size: ButtonSize) {
    let (padding, font, icon_only, icon) = size_metrics(size);
    let _ = write!(
        out,
        ".share-widget-{size} .share-btn {{\n    padding: {padding};\n    font-size: {font}px;\n}}\n\n\
         .share-widget-{size} .share-btn.icon-only {{\n    padding: {icon_only};\n}}\n\n\
         .share-widget-{size} .share-btn-icon {{\n    width: {icon}px;\n    height: {icon}px;\n}}\n\n"
    );
}

fn shape_rules(out: &mut String, style: ButtonStyle) {
    let _ = write!(
        out,
        ".share-widget-{style} .share-btn {{\n    border-radius: {};\n}}\n\n",
        corner_radius(style)
    );
    if style == ButtonStyle::Circle {
        out.push_str(".share-widget-circle .share-btn.icon-only {\n    border-radius: 50%;\n}\n\n");
    }
}

fn position_rules(out: &mut String, position: Position) {
    if position != Position::Inline {
        out.push_str(&FLOATING_CSS.render(&FloatingVars { position }));
        out.push('\n');
    }
}

/// Stylesheet for exactly the variants `options` selects.
pub fn stylesheet(options: &WidgetOptions) -> String {
    let mut variants = String::new();
    position_rules(&mut variants, options.position);
    size_rules(&mut variants, options.size);
    shape_rules(&mut variants, options.button_style);
    WIDGET_CSS.render(&StyleVars { variants })
}

/// Stylesheet covering every variant, for the runtime bundle and previews.
pub fn full_stylesheet() -> String {
    let mut variants = String::new();
    for position in [Position::FloatingLeft, Position::FloatingRight] {
        position_rules(&mut variants, position);
    }
    for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large] {
        size_rules(&mut variants, size);
    }
    for style in [ButtonStyle::Rounded, ButtonStyle::Square, ButtonStyle::Circle] {
        shape_rules(&mut variants, style);
    }
    WIDGET_CSS.render(&StyleVars { variants })
}
