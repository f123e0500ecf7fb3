//! Structure-only walk over encoded messages.
//!
//! Advances a byte position by following a message definition without allocating
//! decoded values. Use it to find where one message ends inside a larger buffer
//! (trailing bytes, back-to-back messages) when a full decode is not needed.
//!
//! | Use case | Prefer |
//! |----------|--------|
//! | Byte length of one message | [`message_extent`] |
//! | Full decode for inspection | [codec](crate::codec) |
//!
//! ```ignore
//! use rosgen::{message_extent, SpecRegistry};
//!
//! let registry = SpecRegistry::with_std_msgs()?;
//! let n = message_extent(&registry, "std_msgs/Header", &bytes)?;
//! let trailing = &bytes[n..];
//! ```

use crate::codec::{CodecError, SpecRegistry};
use crate::spec::{FieldSpec, MsgSpec};
use crate::wire::{self, FieldKind, WireError};
use byteorder::{ByteOrder, LittleEndian};

/// Read-only walker over one buffer. No decoded values are allocated.
pub struct BinaryWalker<'a> {
    data: &'a [u8],
    pos: usize,
    registry: &'a SpecRegistry,
}

impl<'a> BinaryWalker<'a> {
    pub fn new(data: &'a [u8], registry: &'a SpecRegistry) -> Self {
        BinaryWalker { data, pos: 0, registry }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Skip one message of the given type and return the bytes it occupied.
    pub fn skip_message(&mut self, message_name: &str) -> Result<usize, CodecError> {
        let spec = self
            .registry
            .get(message_name)
            .ok_or_else(|| CodecError::UnknownMessage(message_name.to_string()))?;
        let start = self.pos;
        self.skip_struct(spec)?;
        Ok(self.pos - start)
    }

    fn skip_struct(&mut self, spec: &MsgSpec) -> Result<(), CodecError> {
        for f in &spec.fields {
            self.skip_field(spec, f).map_err(|e| match e {
                CodecError::Wire(w) => CodecError::Wire(w.in_field(&f.ident)),
                other => other,
            })?;
        }
        Ok(())
    }

    fn skip_field(&mut self, spec: &MsgSpec, f: &FieldSpec) -> Result<(), CodecError> {
        if !f.is_array {
            return self.skip_element(spec, f);
        }
        let n = self.read_u32()? as usize;
        if f.is_fixed_array() && n != f.array_size {
            return Err(WireError::ArrayLength {
                expected: f.array_size,
                found: n,
            }
            .into());
        }
        if self.registry.element_is_empty(spec, f)? {
            wire::check_empty_elements(n)?;
            return Ok(());
        }
        if let Some(size) = f.kind().fixed_size() {
            let total = n.checked_mul(size).ok_or(WireError::Truncated { kind: f.kind() })?;
            return self.advance(total, f.kind());
        }
        for _ in 0..n {
            self.skip_element(spec, f)?;
        }
        Ok(())
    }

    fn skip_element(&mut self, spec: &MsgSpec, f: &FieldSpec) -> Result<(), CodecError> {
        let kind = f.kind();
        match kind {
            FieldKind::Message => {
                let nested = self.registry.field_spec(spec, f)?;
                self.skip_struct(nested)
            }
            FieldKind::String => {
                let len = self.read_u32()? as usize;
                self.advance(len, kind)
            }
            _ => {
                let size = kind.fixed_size().unwrap_or(0);
                self.advance(size, kind)
            }
        }
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        if self.pos + 4 > self.data.len() {
            return Err(WireError::Truncated { kind: FieldKind::UInt32 }.into());
        }
        let v = LittleEndian::read_u32(&self.data[self.pos..]);
        self.pos += 4;
        Ok(v)
    }

    fn advance(&mut self, len: usize, kind: FieldKind) -> Result<(), CodecError> {
        if len > self.data.len() - self.pos {
            return Err(WireError::Truncated { kind }.into());
        }
        self.pos += len;
        Ok(())
    }
}

/// Number of bytes one message of `message_name` occupies at the start of `data`.
pub fn message_extent(registry: &SpecRegistry, message_name: &str, data: &[u8]) -> Result<usize, CodecError> {
    BinaryWalker::new(data, registry).skip_message(message_name)
}
