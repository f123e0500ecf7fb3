//! `std_msgs` types generated from `definitions/std_msgs/` with `runtime_crate = "crate"`.

mod color_rgba;
mod header;
mod int16;
mod int32;

pub use color_rgba::ColorRGBA;
pub use header::Header;
pub use int16::Int16;
pub use int32::Int32;

use crate::wire::MessageType;

/// Descriptors of every bundled type.
pub const MESSAGE_TYPES: &[&MessageType] = &[
    ColorRGBA::MESSAGE_TYPE,
    Header::MESSAGE_TYPE,
    Int16::MESSAGE_TYPE,
    Int32::MESSAGE_TYPE,
];
