//! Widget options and the tag-attribute contract.
//!
//! # Attributes
//!
//! | Attribute            | Default               | Values                                  |
//! |----------------------|-----------------------|-----------------------------------------|
//! | `data-platforms`     | `facebook,x,linkedin` | comma-separated platform ids            |
//! | `data-icon-color`    | `color`               | `color` \| `mono`                       |
//! | `data-display-style` | `icon-text`           | `icon-text` \| `icon-only` \| `text-only` |
//! | `data-button-style`  | `rounded`             | `rounded` \| `square` \| `circle`       |
//! | `data-size`          | `medium`              | `small` \| `medium` \| `large`          |
//! | `data-position`      | `inline`              | `inline` \| `floating-left` \| `floating-right` |
//!
//! Bare names (`platforms`, `size`, ...) are accepted as well.

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::log;

/// Platforms used when none are configured.
pub const DEFAULT_PLATFORMS: [&str; 3] = ["facebook", "x", "linkedin"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid value `{value}` for `{attribute}` (expected one of: {expected})")]
    InvalidValue {
        attribute: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Declares a kebab-case option enum with its literal attribute values.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $attr:literal {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            Serialize, Deserialize, clap::ValueEnum,
        )]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            /// Attribute name without the `data-` prefix.
            pub const ATTRIBUTE: &'static str = $attr;

            /// Allowed literals, for diagnostics.
            pub const EXPECTED: &'static str = concat!($($literal, " "),+);

            /// Literal attribute value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl FromStr for $name {
            type Err = OptionsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    _ => Err(OptionsError::InvalidValue {
                        attribute: $attr,
                        value: s.to_string(),
                        expected: Self::EXPECTED.trim_end(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    /// Icon asset set.
    IconColor, "icon-color" { Color => "color", Mono => "mono" }
}

option_enum! {
    /// What each button shows.
    DisplayStyle, "display-style" {
        IconText => "icon-text",
        IconOnly => "icon-only",
        TextOnly => "text-only",
    }
}

option_enum! {
    /// Button corner shape.
    ButtonStyle, "button-style" { Rounded => "rounded", Square => "square", Circle => "circle" }
}

option_enum! {
    /// Button size.
    ButtonSize, "size" { Medium => "medium", Small => "small", Large => "large" }
}

option_enum! {
    /// Widget placement.
    Position, "position" {
        Inline => "inline",
        FloatingLeft => "floating-left",
        FloatingRight => "floating-right",
    }
}

/// Options for one rendered widget.
///
/// Built fresh from configuration or attributes for every render; a changed
/// option means a new value and a full re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// Platform ids in render order. Unknown ids are kept and skipped later.
    pub platforms: Vec<String>,
    pub icon_color: IconColor,
    pub display_style: DisplayStyle,
    pub button_style: ButtonStyle,
    pub size: ButtonSize,
    pub position: Position,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            platforms: DEFAULT_PLATFORMS.iter().map(|s| s.to_string()).collect(),
            icon_color: IconColor::default(),
            display_style: DisplayStyle::default(),
            button_style: ButtonStyle::default(),
            size: ButtonSize::default(),
            position: Position::default(),
        }
    }
}

/// Attribute map read from an inclusion tag.
pub type Attributes = FxHashMap<String, String>;

impl WidgetOptions {
    /// Build options from tag attributes, falling back to defaults.
    ///
    /// Invalid literals are logged and replaced by the default; the runtime
    /// widget must come up regardless of what the host page wrote.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            platforms: parse_platforms(attribute(attrs, "platforms")),
            icon_color: lenient(attrs),
            display_style: lenient(attrs),
            button_style: lenient(attrs),
            size: lenient(attrs),
            position: lenient(attrs),
        }
    }

    /// Strict variant of [`from_attributes`](Self::from_attributes): invalid
    /// literals are errors. Missing attributes still take their defaults.
    pub fn try_from_attributes(attrs: &Attributes) -> Result<Self, OptionsError> {
        Ok(Self {
            platforms: parse_platforms(attribute(attrs, "platforms")),
            icon_color: strict(attrs)?,
            display_style: strict(attrs)?,
            button_style: strict(attrs)?,
            size: strict(attrs)?,
            position: strict(attrs)?,
        })
    }

    /// The six `data-*` attributes in emission order, literal-valued.
    pub fn to_attributes(&self) -> [(&'static str, String); 6] {
        [
            ("data-platforms", self.platforms.join(",")),
            ("data-icon-color", self.icon_color.to_string()),
            ("data-display-style", self.display_style.to_string()),
            ("data-button-style", self.button_style.to_string()),
            ("data-size", self.size.to_string()),
            ("data-position", self.position.to_string()),
        ]
    }
}

/// Trait glue so the lenient/strict helpers work for every option enum.
trait OptionAttribute: FromStr<Err = OptionsError> + Default {
    const NAME: &'static str;
}

macro_rules! impl_option_attribute {
    ($($name:ident),+) => {
        $(impl OptionAttribute for $name {
            const NAME: &'static str = $name::ATTRIBUTE;
        })+
    };
}

impl_option_attribute!(IconColor, DisplayStyle, ButtonStyle, ButtonSize, Position);

/// Non-empty attribute value, `data-` prefixed name first.
fn attribute<'a>(attrs: &'a Attributes, name: &str) -> Option<&'a str> {
    attrs
        .get(&format!("data-{name}"))
        .or_else(|| attrs.get(name))
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn lenient<T: OptionAttribute>(attrs: &Attributes) -> T {
    strict(attrs).unwrap_or_else(|e| {
        log!("widget"; "{e}, using default");
        T::default()
    })
}

fn strict<T: OptionAttribute>(attrs: &Attributes) -> Result<T, OptionsError> {
    attribute(attrs, T::NAME).map_or_else(|| Ok(T::default()), |v| v.parse())
}

/// Split a comma-separated platform list. Segments are trimmed, empty ones
/// dropped, order and duplicates kept. A missing or blank list is the default.
pub fn parse_platforms(value: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        WidgetOptions::default().platforms
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_match_attribute_table() {
        let options = WidgetOptions::from_attributes(&Attributes::default());
        assert_eq!(options.platforms, ["facebook", "x", "linkedin"]);
        assert_eq!(options.icon_color, IconColor::Color);
        assert_eq!(options.display_style, DisplayStyle::IconText);
        assert_eq!(options.button_style, ButtonStyle::Rounded);
        assert_eq!(options.size, ButtonSize::Medium);
        assert_eq!(options.position, Position::Inline);
        assert_eq!(options, WidgetOptions::default());
    }

    #[test]
    fn test_reads_data_attributes() {
        let options = WidgetOptions::from_attributes(&attrs(&[
            ("data-platforms", "reddit, copy,reddit"),
            ("data-icon-color", "mono"),
            ("data-display-style", "icon-only"),
            ("data-button-style", "circle"),
            ("data-size", "large"),
            ("data-position", "floating-right"),
        ]));
        assert_eq!(options.platforms, ["reddit", "copy", "reddit"]);
        assert_eq!(options.icon_color, IconColor::Mono);
        assert_eq!(options.display_style, DisplayStyle::IconOnly);
        assert_eq!(options.button_style, ButtonStyle::Circle);
        assert_eq!(options.size, ButtonSize::Large);
        assert_eq!(options.position, Position::FloatingRight);
    }

    #[test]
    fn test_bare_names_accepted() {
        let options = WidgetOptions::from_attributes(&attrs(&[("size", "small")]));
        assert_eq!(options.size, ButtonSize::Small);
    }

    #[test]
    fn test_blank_values_take_defaults() {
        let options =
            WidgetOptions::from_attributes(&attrs(&[("data-platforms", " , "), ("data-size", "")]));
        assert_eq!(options, WidgetOptions::default());
    }

    #[test]
    fn test_lenient_vs_strict_invalid_literal() {
        let a = attrs(&[("data-position", "sideways")]);
        assert_eq!(WidgetOptions::from_attributes(&a).position, Position::Inline);
        assert_eq!(
            WidgetOptions::try_from_attributes(&a),
            Err(OptionsError::InvalidValue {
                attribute: "position",
                value: "sideways".into(),
                expected: "inline floating-left floating-right",
            })
        );
    }

    #[test]
    fn test_unknown_platforms_are_kept() {
        let options = WidgetOptions::from_attributes(&attrs(&[("data-platforms", "x,myspace")]));
        assert_eq!(options.platforms, ["x", "myspace"]);
    }

    #[test]
    fn test_attributes_roundtrip() {
        let options = WidgetOptions {
            platforms: vec!["pinterest".into(), "instagram".into()],
            icon_color: IconColor::Mono,
            display_style: DisplayStyle::TextOnly,
            button_style: ButtonStyle::Square,
            size: ButtonSize::Small,
            position: Position::FloatingLeft,
        };
        let map: Attributes = options
            .to_attributes()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(WidgetOptions::try_from_attributes(&map), Ok(options));
    }

    #[test]
    fn test_literals() {
        assert_eq!(DisplayStyle::IconText.as_str(), "icon-text");
        assert_eq!(Position::FloatingLeft.to_string(), "floating-left");
        assert_eq!("mono".parse::<IconColor>(), Ok(IconColor::Mono));
        assert!("Mono".parse::<IconColor>().is_err());
    }

    #[test]
    fn test_serde_uses_literals() {
        let options: WidgetOptions =
            toml::from_str("platforms = [\"copy\"]\nposition = \"floating-left\"").unwrap();
        assert_eq!(options.platforms, ["copy"]);
        assert_eq!(options.position, Position::FloatingLeft);
        assert_eq!(options.size, ButtonSize::Medium);
    }
}
