// Code generated by rosgen.
// source: AddTwoInts.srv
// DO NOT EDIT!

use rosgen::wire::{
    self, FieldKind, FieldMut, FieldRef, Message, MessageType, Service, ServiceType, WireError,
};
use std::io::{Read, Write};
/// `example_msgs/AddTwoIntsRequest` message.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTwoIntsRequest {
    pub a: i64,
    pub b: i64,
}
impl Default for AddTwoIntsRequest {
    fn default() -> Self {
        AddTwoIntsRequest { a: 0, b: 0 }
    }
}
impl AddTwoIntsRequest {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "example_msgs/AddTwoIntsRequest",
        "int64 a\nint64 b\n",
        "4a6c60dff5cf162c50be2faf33c2db50",
        AddTwoIntsRequest::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(AddTwoIntsRequest::default())
    }
}
impl Message for AddTwoIntsRequest {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Int64, FieldRef::Int64(self.a))
            .map_err(|e| e.in_field("A"))?;
        wire::write_field(w, FieldKind::Int64, FieldRef::Int64(self.b))
            .map_err(|e| e.in_field("B"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Int64, FieldMut::Int64(&mut self.a))
            .map_err(|e| e.in_field("A"))?;
        wire::read_field(r, FieldKind::Int64, FieldMut::Int64(&mut self.b))
            .map_err(|e| e.in_field("B"))?;
        Ok(())
    }
}
/// `example_msgs/AddTwoIntsResponse` message.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTwoIntsResponse {
    pub sum: i64,
}
impl Default for AddTwoIntsResponse {
    fn default() -> Self {
        AddTwoIntsResponse { sum: 0 }
    }
}
impl AddTwoIntsResponse {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "example_msgs/AddTwoIntsResponse",
        "\nint64 sum\n",
        "b0922422dd19edd8c17697d76957a178",
        AddTwoIntsResponse::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(AddTwoIntsResponse::default())
    }
}
impl Message for AddTwoIntsResponse {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Int64, FieldRef::Int64(self.sum))
            .map_err(|e| e.in_field("Sum"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Int64, FieldMut::Int64(&mut self.sum))
            .map_err(|e| e.in_field("Sum"))?;
        Ok(())
    }
}
/// `example_msgs/AddTwoInts` service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddTwoInts;
impl Service for AddTwoInts {
    type Request = AddTwoIntsRequest;
    type Response = AddTwoIntsResponse;
    const SERVICE_TYPE: &'static ServiceType = &ServiceType::new(
        "example_msgs/AddTwoInts",
        "int64 a\nint64 b\n---\nint64 sum\n",
        "4a6c60dff5cf162c50be2faf33c2db50",
        AddTwoIntsRequest::MESSAGE_TYPE,
        AddTwoIntsResponse::MESSAGE_TYPE,
    );
}
