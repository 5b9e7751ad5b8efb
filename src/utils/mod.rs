//! Utility modules shared by the generator and the runtime widget.

pub mod encode;
pub mod html;
