// Code generated by rosgen.
// source: ColorRGBA.msg
// DO NOT EDIT!

use crate::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
/// `std_msgs/ColorRGBA` message.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
impl Default for ColorRGBA {
    fn default() -> Self {
        ColorRGBA {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }
    }
}
impl ColorRGBA {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "std_msgs/ColorRGBA",
        "float32 r\nfloat32 g\nfloat32 b\nfloat32 a\n",
        "631d37ed76123c8a0893f65a4f3b63b9",
        ColorRGBA::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(ColorRGBA::default())
    }
}
impl Message for ColorRGBA {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Float32, FieldRef::Float32(self.r))
            .map_err(|e| e.in_field("R"))?;
        wire::write_field(w, FieldKind::Float32, FieldRef::Float32(self.g))
            .map_err(|e| e.in_field("G"))?;
        wire::write_field(w, FieldKind::Float32, FieldRef::Float32(self.b))
            .map_err(|e| e.in_field("B"))?;
        wire::write_field(w, FieldKind::Float32, FieldRef::Float32(self.a))
            .map_err(|e| e.in_field("A"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Float32, FieldMut::Float32(&mut self.r))
            .map_err(|e| e.in_field("R"))?;
        wire::read_field(r, FieldKind::Float32, FieldMut::Float32(&mut self.g))
            .map_err(|e| e.in_field("G"))?;
        wire::read_field(r, FieldKind::Float32, FieldMut::Float32(&mut self.b))
            .map_err(|e| e.in_field("B"))?;
        wire::read_field(r, FieldKind::Float32, FieldMut::Float32(&mut self.a))
            .map_err(|e| e.in_field("A"))?;
        Ok(())
    }
}
