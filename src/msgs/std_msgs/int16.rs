// Code generated by rosgen.
// source: Int16.msg
// DO NOT EDIT!

use crate::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
/// `std_msgs/Int16` message.
#[derive(Debug, Clone, PartialEq)]
pub struct Int16 {
    pub data: i16,
}
impl Default for Int16 {
    fn default() -> Self {
        Int16 { data: 0 }
    }
}
impl Int16 {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "std_msgs/Int16",
        "int16 data\n",
        "e89cc27b8d0ebcac7830e5a6e447f615",
        Int16::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(Int16::default())
    }
}
impl Message for Int16 {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Int16, FieldRef::Int16(self.data))
            .map_err(|e| e.in_field("Data"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Int16, FieldMut::Int16(&mut self.data))
            .map_err(|e| e.in_field("Data"))?;
        Ok(())
    }
}
