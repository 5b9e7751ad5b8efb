//! Share widget: options, renderer and the runtime click model.
//!
//! - `options` - `WidgetOptions` and the tag-attribute contract
//! - `render` - option-to-markup renderer shared by preview and emission
//! - `runtime` - runtime widget: init from attributes, click handling

mod options;
pub mod render;
pub mod runtime;

pub use options::{
    Attributes, ButtonSize, ButtonStyle, DEFAULT_PLATFORMS, DisplayStyle, IconColor, OptionsError,
    Position, WidgetOptions, parse_platforms,
};
pub use render::{ButtonSpec, WidgetMarkup, render_buttons};
pub use runtime::{ClickOutcome, Popups, Ports, RuntimeWidget, handle_click};
