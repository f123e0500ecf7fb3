// Code generated by rosgen.
// source: Status.msg
// DO NOT EDIT!

use rosgen::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
use rosgen::msgs::std_msgs;
use super::Hello;
/// `example_msgs/Status` message.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub header: std_msgs::Header,
    pub status: u8,
    pub greetings: Vec<Hello>,
}
impl Default for Status {
    fn default() -> Self {
        Status {
            header: std_msgs::Header::default(),
            status: 0,
            greetings: Vec::new(),
        }
    }
}
impl Status {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "example_msgs/Status",
        "# Outcome of a task.\nuint8 PENDING = 0\nuint8 DONE = 1\nstring GREETING = hello # world\nHeader header\nuint8 status\nHello[] greetings\n",
        "f8a7bf1f15ec2bc870c91a4821a21df5",
        Status::new_boxed,
    );
    pub const PENDING: u8 = 0;
    pub const DONE: u8 = 1;
    pub const GREETING: &str = "hello # world";
    fn new_boxed() -> Box<dyn Message> {
        Box::new(Status::default())
    }
}
impl Message for Status {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Message, FieldRef::Message(&self.header))
            .map_err(|e| e.in_field("Header"))?;
        wire::write_field(w, FieldKind::UInt8, FieldRef::UInt8(self.status))
            .map_err(|e| e.in_field("Status"))?;
        wire::write_array(
                w,
                FieldKind::Message,
                self.greetings.iter().map(|item| FieldRef::Message(item)),
            )
            .map_err(|e| e.in_field("Greetings"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Message, FieldMut::Message(&mut self.header))
            .map_err(|e| e.in_field("Header"))?;
        wire::read_field(r, FieldKind::UInt8, FieldMut::UInt8(&mut self.status))
            .map_err(|e| e.in_field("Status"))?;
        wire::read_vec(
                r,
                FieldKind::Message,
                &mut self.greetings,
                |item| FieldMut::Message(item),
            )
            .map_err(|e| e.in_field("Greetings"))?;
        Ok(())
    }
}
