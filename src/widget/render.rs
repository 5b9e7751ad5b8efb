//! Option-to-markup renderer.
//!
//! The preview page and the standalone snippet both render through
//! [`WidgetMarkup`]; the runtime script builds the same classes and
//! attributes in the browser. Keep the three in sync.

use std::fmt::Write;

use super::{DisplayStyle, WidgetOptions};
use crate::log;
use crate::platform::{self, PlatformDescriptor};
use crate::utils::html::{escape, escape_attr};

/// Text shown in the preview when no platform is selected.
pub const EMPTY_PREVIEW: &str = "Select a platform to see the preview.";

/// Container attribute naming the rule set a standalone script carries.
/// A script only binds containers whose value equals its own.
pub const RULES_ATTRIBUTE: &str = "data-share-rules";

/// One share button, ready to be turned into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub platform: &'static PlatformDescriptor,
    pub aria_label: String,
    pub icon: &'static str,
    pub content: DisplayStyle,
}

impl ButtonSpec {
    pub fn id(&self) -> &'static str {
        self.platform.id
    }

    pub fn label(&self) -> &'static str {
        self.platform.label
    }

    /// Class list of the anchor.
    pub fn class(&self) -> String {
        let mut class = format!("share-btn share-btn-{}", self.id());
        match self.content {
            DisplayStyle::IconOnly => class.push_str(" icon-only"),
            DisplayStyle::TextOnly => class.push_str(" text-only"),
            DisplayStyle::IconText => {}
        }
        class
    }

    /// Inner HTML of the anchor.
    pub fn inner_html(&self) -> String {
        let label = escape(self.label());
        let img = format!(
            r#"<img src="{}" alt="{}" class="share-btn-icon" loading="lazy">"#,
            escape_attr(self.icon),
            escape_attr(self.label()),
        );
        match self.content {
            DisplayStyle::TextOnly => label.into_owned(),
            DisplayStyle::IconOnly => img,
            DisplayStyle::IconText => format!("{img} {label}"),
        }
    }

    /// Full anchor element.
    pub fn to_html(&self) -> String {
        format!(
            r##"<a href="#" class="{}" role="button" data-platform="{}" aria-label="{}">{}</a>"##,
            self.class(),
            escape_attr(self.id()),
            escape_attr(&self.aria_label),
            self.inner_html(),
        )
    }
}

/// Buttons for every known platform in `options`, in order.
///
/// Unknown ids are logged and skipped; they never abort the widget.
pub fn render_buttons(options: &WidgetOptions) -> Vec<ButtonSpec> {
    options
        .platforms
        .iter()
        .filter_map(|id| match platform::lookup(id) {
            Some(platform) => Some(ButtonSpec {
                platform,
                aria_label: platform.aria_label(),
                icon: platform.icon(options.icon_color),
                content: options.display_style,
            }),
            None => {
                log!("render"; "unknown platform `{id}` skipped (known: {})", platform::known_ids());
                None
            }
        })
        .collect()
}

/// Rendered widget: container classes plus buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetMarkup {
    pub class: String,
    pub buttons: Vec<ButtonSpec>,
}

impl WidgetMarkup {
    pub fn new(options: &WidgetOptions) -> Self {
        Self {
            class: container_class(options),
            buttons: render_buttons(options),
        }
    }

    /// True when no recognized platform is left to render.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Platforms the buttons need rules for, in table order, each once.
    pub fn rules(&self) -> Vec<&'static PlatformDescriptor> {
        platform::PLATFORMS
            .iter()
            .filter(|p| self.buttons.iter().any(|b| b.id() == p.id))
            .collect()
    }

    /// Value of [`RULES_ATTRIBUTE`]: rule ids joined with `,`.
    pub fn rules_key(&self) -> String {
        let ids: Vec<_> = self.rules().iter().map(|p| p.id).collect();
        ids.join(",")
    }

    /// Container with one anchor per line.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"{}\" {RULES_ATTRIBUTE}=\"{}\">\n",
            self.class,
            escape_attr(&self.rules_key())
        );
        for button in &self.buttons {
            let _ = writeln!(html, "{}", button.to_html());
        }
        html.push_str("</div>");
        html
    }

    /// Preview markup: the widget, or the empty-state hint.
    pub fn to_preview_html(&self) -> String {
        if self.is_empty() {
            format!("<p class=\"share-empty\">{EMPTY_PREVIEW}</p>")
        } else {
            self.to_html()
        }
    }
}

/// `share-widget share-widget-{position} share-widget-{size} share-widget-{shape}`
pub fn container_class(options: &WidgetOptions) -> String {
    format!(
        "share-widget share-widget-{} share-widget-{} share-widget-{}",
        options.position, options.size, options.button_style
    )
}
