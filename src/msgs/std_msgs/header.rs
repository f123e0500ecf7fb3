// Code generated by rosgen.
// source: Header.msg
// DO NOT EDIT!

use crate::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
/// `std_msgs/Header` message.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub seq: u32,
    pub stamp: wire::Time,
    pub frame_id: ::std::string::String,
}
impl Default for Header {
    fn default() -> Self {
        Header {
            seq: 0,
            stamp: wire::Time::default(),
            frame_id: ::std::string::String::new(),
        }
    }
}
impl Header {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "std_msgs/Header",
        "uint32 seq\ntime stamp\nstring frame_id\n",
        "96d385082008a8230a243de0e0f87244",
        Header::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(Header::default())
    }
}
impl Message for Header {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::UInt32, FieldRef::UInt32(self.seq))
            .map_err(|e| e.in_field("Seq"))?;
        wire::write_field(w, FieldKind::Time, FieldRef::Time(self.stamp))
            .map_err(|e| e.in_field("Stamp"))?;
        wire::write_field(w, FieldKind::String, FieldRef::String(&self.frame_id))
            .map_err(|e| e.in_field("FrameID"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::UInt32, FieldMut::UInt32(&mut self.seq))
            .map_err(|e| e.in_field("Seq"))?;
        wire::read_field(r, FieldKind::Time, FieldMut::Time(&mut self.stamp))
            .map_err(|e| e.in_field("Stamp"))?;
        wire::read_field(r, FieldKind::String, FieldMut::String(&mut self.frame_id))
            .map_err(|e| e.in_field("FrameID"))?;
        Ok(())
    }
}
