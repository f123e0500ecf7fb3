// Code generated by rosgen.
// source: AllFieldTypes.msg
// DO NOT EDIT!

use rosgen::wire::{self, FieldKind, FieldMut, FieldRef, Message, MessageType, WireError};
use std::io::{Read, Write};
use rosgen::msgs::std_msgs;
/// `example_msgs/AllFieldTypes` message.
#[derive(Debug, Clone, PartialEq)]
pub struct AllFieldTypes {
    pub h: std_msgs::Header,
    pub b: i8,
    pub i8: i8,
    pub i16: i16,
    pub i32: i32,
    pub i64: i64,
    pub u8: u8,
    pub u16: u16,
    pub u32: u32,
    pub u64: u64,
    pub f32: f32,
    pub f64: f64,
    pub t: wire::Time,
    pub d: wire::Duration,
    pub s: ::std::string::String,
    pub c: std_msgs::ColorRGBA,
    pub dyn_ary: Vec<u32>,
    pub fix_ary: [u32; 2],
}
impl Default for AllFieldTypes {
    fn default() -> Self {
        AllFieldTypes {
            h: std_msgs::Header::default(),
            b: 0,
            i8: 0,
            i16: 0,
            i32: 0,
            i64: 0,
            u8: 0,
            u16: 0,
            u32: 0,
            u64: 0,
            f32: 0.0,
            f64: 0.0,
            t: wire::Time::default(),
            d: wire::Duration::default(),
            s: ::std::string::String::new(),
            c: std_msgs::ColorRGBA::default(),
            dyn_ary: Vec::new(),
            fix_ary: [0; 2],
        }
    }
}
impl AllFieldTypes {
    pub const MESSAGE_TYPE: &'static MessageType = &MessageType::new(
        "example_msgs/AllFieldTypes",
        "Header h\nbyte b\nint8 i8\nint16 i16\nint32 i32\nint64 i64\nuint8 u8\nuint16 u16\nuint32 u32\nuint64 u64\nfloat32 f32\nfloat64 f64\ntime t\nduration d\nstring s\nstd_msgs/ColorRGBA c\nuint32[] dyn_ary\nuint32[2] fix_ary\n",
        "f538360e29fadf70910cd1633b5efbdd",
        AllFieldTypes::new_boxed,
    );
    fn new_boxed() -> Box<dyn Message> {
        Box::new(AllFieldTypes::default())
    }
}
impl Message for AllFieldTypes {
    fn message_type(&self) -> &'static MessageType {
        Self::MESSAGE_TYPE
    }
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError> {
        wire::write_field(w, FieldKind::Message, FieldRef::Message(&self.h))
            .map_err(|e| e.in_field("H"))?;
        wire::write_field(w, FieldKind::Int8, FieldRef::Int8(self.b))
            .map_err(|e| e.in_field("B"))?;
        wire::write_field(w, FieldKind::Int8, FieldRef::Int8(self.i8))
            .map_err(|e| e.in_field("I8"))?;
        wire::write_field(w, FieldKind::Int16, FieldRef::Int16(self.i16))
            .map_err(|e| e.in_field("I16"))?;
        wire::write_field(w, FieldKind::Int32, FieldRef::Int32(self.i32))
            .map_err(|e| e.in_field("I32"))?;
        wire::write_field(w, FieldKind::Int64, FieldRef::Int64(self.i64))
            .map_err(|e| e.in_field("I64"))?;
        wire::write_field(w, FieldKind::UInt8, FieldRef::UInt8(self.u8))
            .map_err(|e| e.in_field("U8"))?;
        wire::write_field(w, FieldKind::UInt16, FieldRef::UInt16(self.u16))
            .map_err(|e| e.in_field("U16"))?;
        wire::write_field(w, FieldKind::UInt32, FieldRef::UInt32(self.u32))
            .map_err(|e| e.in_field("U32"))?;
        wire::write_field(w, FieldKind::UInt64, FieldRef::UInt64(self.u64))
            .map_err(|e| e.in_field("U64"))?;
        wire::write_field(w, FieldKind::Float32, FieldRef::Float32(self.f32))
            .map_err(|e| e.in_field("F32"))?;
        wire::write_field(w, FieldKind::Float64, FieldRef::Float64(self.f64))
            .map_err(|e| e.in_field("F64"))?;
        wire::write_field(w, FieldKind::Time, FieldRef::Time(self.t))
            .map_err(|e| e.in_field("T"))?;
        wire::write_field(w, FieldKind::Duration, FieldRef::Duration(self.d))
            .map_err(|e| e.in_field("D"))?;
        wire::write_field(w, FieldKind::String, FieldRef::String(&self.s))
            .map_err(|e| e.in_field("S"))?;
        wire::write_field(w, FieldKind::Message, FieldRef::Message(&self.c))
            .map_err(|e| e.in_field("C"))?;
        wire::write_array(
                w,
                FieldKind::UInt32,
                self.dyn_ary.iter().map(|item| FieldRef::UInt32(*item)),
            )
            .map_err(|e| e.in_field("DynAry"))?;
        wire::write_array(
                w,
                FieldKind::UInt32,
                self.fix_ary.iter().map(|item| FieldRef::UInt32(*item)),
            )
            .map_err(|e| e.in_field("FixAry"))?;
        Ok(())
    }
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError> {
        wire::read_field(r, FieldKind::Message, FieldMut::Message(&mut self.h))
            .map_err(|e| e.in_field("H"))?;
        wire::read_field(r, FieldKind::Int8, FieldMut::Int8(&mut self.b))
            .map_err(|e| e.in_field("B"))?;
        wire::read_field(r, FieldKind::Int8, FieldMut::Int8(&mut self.i8))
            .map_err(|e| e.in_field("I8"))?;
        wire::read_field(r, FieldKind::Int16, FieldMut::Int16(&mut self.i16))
            .map_err(|e| e.in_field("I16"))?;
        wire::read_field(r, FieldKind::Int32, FieldMut::Int32(&mut self.i32))
            .map_err(|e| e.in_field("I32"))?;
        wire::read_field(r, FieldKind::Int64, FieldMut::Int64(&mut self.i64))
            .map_err(|e| e.in_field("I64"))?;
        wire::read_field(r, FieldKind::UInt8, FieldMut::UInt8(&mut self.u8))
            .map_err(|e| e.in_field("U8"))?;
        wire::read_field(r, FieldKind::UInt16, FieldMut::UInt16(&mut self.u16))
            .map_err(|e| e.in_field("U16"))?;
        wire::read_field(r, FieldKind::UInt32, FieldMut::UInt32(&mut self.u32))
            .map_err(|e| e.in_field("U32"))?;
        wire::read_field(r, FieldKind::UInt64, FieldMut::UInt64(&mut self.u64))
            .map_err(|e| e.in_field("U64"))?;
        wire::read_field(r, FieldKind::Float32, FieldMut::Float32(&mut self.f32))
            .map_err(|e| e.in_field("F32"))?;
        wire::read_field(r, FieldKind::Float64, FieldMut::Float64(&mut self.f64))
            .map_err(|e| e.in_field("F64"))?;
        wire::read_field(r, FieldKind::Time, FieldMut::Time(&mut self.t))
            .map_err(|e| e.in_field("T"))?;
        wire::read_field(r, FieldKind::Duration, FieldMut::Duration(&mut self.d))
            .map_err(|e| e.in_field("D"))?;
        wire::read_field(r, FieldKind::String, FieldMut::String(&mut self.s))
            .map_err(|e| e.in_field("S"))?;
        wire::read_field(r, FieldKind::Message, FieldMut::Message(&mut self.c))
            .map_err(|e| e.in_field("C"))?;
        wire::read_vec(r, FieldKind::UInt32, &mut self.dyn_ary, |item| FieldMut::UInt32(item))
            .map_err(|e| e.in_field("DynAry"))?;
        wire::read_array(r, FieldKind::UInt32, &mut self.fix_ary, |item| FieldMut::UInt32(item))
            .map_err(|e| e.in_field("FixAry"))?;
        Ok(())
    }
}
