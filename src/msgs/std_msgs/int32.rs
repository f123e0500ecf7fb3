// Code generated by rosgen.
// source: Int32.msg
// DO NOT EDIT!

use crate::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
/// `std_msgs/Int32` message.
#[derive(Debug, Clone, PartialEq)]
pub struct Int32 {
    pub data: i32,
}
impl Default for Int32 {
    fn default() -> Self {
        Int32 { data: 0 }
    }
}
impl Int32 {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "std_msgs/Int32",
        "int32 data\n",
        "a8fa1b1a7e7b127d6264a565e3f58a01",
        Int32::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(Int32::default())
    }
}
impl Message for Int32 {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Int32, FieldRef::Int32(self.data))
            .map_err(|e| e.in_field("Data"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Int32, FieldMut::Int32(&mut self.data))
            .map_err(|e| e.in_field("Data"))?;
        Ok(())
    }
}
