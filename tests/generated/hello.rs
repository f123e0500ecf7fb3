// Code generated by rosgen.
// source: Hello.msg
// DO NOT EDIT!

use rosgen::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
/// `example_msgs/Hello` message.
#[derive(Debug, Clone, PartialEq)]
pub struct Hello {
    pub data: ::std::string::String,
}
impl Default for Hello {
    fn default() -> Self {
        Hello {
            data: ::std::string::String::new(),
        }
    }
}
impl Hello {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "example_msgs/Hello",
        "string data\n",
        "5b89344b4d080ca499c0648063c40738",
        Hello::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(Hello::default())
    }
}
impl Message for Hello {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::String, FieldRef::String(&self.data))
            .map_err(|e| e.in_field("Data"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::String, FieldMut::String(&mut self.data))
            .map_err(|e| e.in_field("Data"))?;
        Ok(())
    }
}
