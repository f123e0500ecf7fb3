//! Runtime values for the data-driven codec.

use crate::wire::{Duration, FieldKind, FieldMut, FieldRef, Time};
use std::collections::HashMap;

/// A single decoded value (field element or compound).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Time(Time),
    Duration(Duration),
    /// Compound message, keyed by declared field name.
    Struct(HashMap<String, Value>),
    /// Dynamic or fixed array.
    List(Vec<Value>),
}

impl Value {
    /// Zero value for a builtin kind; `None` for compound messages.
    pub fn zero(kind: FieldKind) -> Option<Value> {
        Some(match kind {
            FieldKind::Bool => Value::Bool(false),
            FieldKind::Int8 => Value::I8(0),
            FieldKind::UInt8 => Value::U8(0),
            FieldKind::Int16 => Value::I16(0),
            FieldKind::UInt16 => Value::U16(0),
            FieldKind::Int32 => Value::I32(0),
            FieldKind::UInt32 => Value::U32(0),
            FieldKind::Int64 => Value::I64(0),
            FieldKind::UInt64 => Value::U64(0),
            FieldKind::Float32 => Value::F32(0.0),
            FieldKind::Float64 => Value::F64(0.0),
            FieldKind::String => Value::String(String::new()),
            FieldKind::Time => Value::Time(Time::default()),
            FieldKind::Duration => Value::Duration(Duration::default()),
            FieldKind::Message => return None,
        })
    }

    /// Human-readable name of the variant, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Struct(_) => "struct",
            Value::List(_) => "list",
            other => other.as_field_ref().map(|r| r.kind().name()).unwrap_or("value"),
        }
    }

    /// View a builtin value as a wire field; `None` for structs and lists.
    pub fn as_field_ref(&self) -> Option<FieldRef<'_>> {
        Some(match self {
            Value::Bool(v) => FieldRef::Bool(*v),
            Value::I8(v) => FieldRef::Int8(*v),
            Value::U8(v) => FieldRef::UInt8(*v),
            Value::I16(v) => FieldRef::Int16(*v),
            Value::U16(v) => FieldRef::UInt16(*v),
            Value::I32(v) => FieldRef::Int32(*v),
            Value::U32(v) => FieldRef::UInt32(*v),
            Value::I64(v) => FieldRef::Int64(*v),
            Value::U64(v) => FieldRef::UInt64(*v),
            Value::F32(v) => FieldRef::Float32(*v),
            Value::F64(v) => FieldRef::Float64(*v),
            Value::String(v) => FieldRef::String(v),
            Value::Time(v) => FieldRef::Time(*v),
            Value::Duration(v) => FieldRef::Duration(*v),
            Value::Struct(_) | Value::List(_) => return None,
        })
    }

    pub fn as_field_mut(&mut self) -> Option<FieldMut<'_>> {
        Some(match self {
            Value::Bool(v) => FieldMut::Bool(v),
            Value::I8(v) => FieldMut::Int8(v),
            Value::U8(v) => FieldMut::UInt8(v),
            Value::I16(v) => FieldMut::Int16(v),
            Value::U16(v) => FieldMut::UInt16(v),
            Value::I32(v) => FieldMut::Int32(v),
            Value::U32(v) => FieldMut::UInt32(v),
            Value::I64(v) => FieldMut::Int64(v),
            Value::U64(v) => FieldMut::UInt64(v),
            Value::F32(v) => FieldMut::Float32(v),
            Value::F64(v) => FieldMut::Float64(v),
            Value::String(v) => FieldMut::String(v),
            Value::Time(v) => FieldMut::Time(v),
            Value::Duration(v) => FieldMut::Duration(v),
            Value::Struct(_) | Value::List(_) => return None,
        })
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(x) => Some(*x as u64),
            Value::U16(x) => Some(*x as u64),
            Value::U32(x) => Some(*x as u64),
            Value::U64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(x) => Some(*x as i64),
            Value::I16(x) => Some(*x as i64),
            Value::I32(x) => Some(*x as i64),
            Value::I64(x) => Some(*x),
            Value::U8(x) => Some(*x as i64),
            Value::U16(x) => Some(*x as i64),
            Value::U32(x) => Some(*x as i64),
            Value::U64(x) => i64::try_from(*x).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Struct(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(x) => Some(*x),
            Value::F32(x) => Some(*x as f64),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<Time> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }
}
