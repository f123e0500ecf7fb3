//! Encode/decode messages straight from their parsed definitions.
//!
//! The generated types are the fast path; this codec interprets a [`SpecRegistry`] at
//! run time over [`Value`] trees instead. Both go through the same [`wire`] primitives,
//! so for a given definition the bytes are identical.

use crate::config::GenConfig;
use crate::parser::{self, ParseError};
use crate::resolve::{BuiltinTable, Resolver};
use crate::spec::{FieldSpec, MsgSpec, TypeClass};
use crate::value::Value;
use crate::wire::{self, FieldKind, MessageType, WireError};
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error("Parse: {0}")]
    Parse(#[from] ParseError),
    #[error("Unknown message: {0}")]
    UnknownMessage(String),
    #[error("Duplicate message: {0}")]
    Duplicate(String),
    #[error("Missing field: {0}")]
    MissingField(String),
}

impl CodecError {
    fn in_field(self, field: &str) -> CodecError {
        match self {
            CodecError::Wire(e) => CodecError::Wire(e.in_field(field)),
            CodecError::MissingField(inner) => CodecError::MissingField(format!("{}.{}", field, inner)),
            other => other,
        }
    }
}

/// Parsed message definitions keyed by `package/Name`.
#[derive(Debug, Clone, Default)]
pub struct SpecRegistry {
    specs: HashMap<String, MsgSpec>,
}

impl SpecRegistry {
    pub fn new() -> Self {
        SpecRegistry::default()
    }

    /// Registry preloaded with the bundled `std_msgs` definitions.
    pub fn with_std_msgs() -> Result<Self, CodecError> {
        let mut registry = SpecRegistry::new();
        for message_type in crate::msgs::std_msgs::MESSAGE_TYPES {
            registry.register_type(message_type)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, spec: MsgSpec) -> Result<(), CodecError> {
        let key = spec.full_name();
        if self.specs.contains_key(&key) {
            return Err(CodecError::Duplicate(key));
        }
        tracing::debug!("registered {} ({} fields)", key, spec.fields.len());
        self.specs.insert(key, spec);
        Ok(())
    }

    /// Parse and register the definition carried by a generated type's descriptor.
    pub fn register_type(&mut self, message_type: &MessageType) -> Result<(), CodecError> {
        let (package, name) = message_type
            .name()
            .split_once('/')
            .ok_or_else(|| CodecError::UnknownMessage(message_type.name().to_string()))?;
        let builtins = BuiltinTable::standard();
        let config = GenConfig::default();
        let resolver = Resolver::new(&builtins, &config, package);
        let spec = parser::parse_msg_spec(&resolver, name, message_type.text().as_bytes())?;
        self.insert(spec)
    }

    pub fn get(&self, full_name: &str) -> Option<&MsgSpec> {
        self.specs.get(full_name)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.specs.contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The definition a compound field of `owner` refers to.
    pub(crate) fn field_spec(&self, owner: &MsgSpec, field: &FieldSpec) -> Result<&MsgSpec, CodecError> {
        let key = match &field.class {
            TypeClass::Local(name) => format!("{}/{}", owner.package, name),
            TypeClass::Foreign { package, name } => format!("{}/{}", package, name),
            _ => return Err(CodecError::UnknownMessage(field.type_token.clone())),
        };
        self.get(&key).ok_or(CodecError::UnknownMessage(key))
    }

    /// Whether an element of `field` takes no bytes on the wire: a message whose
    /// fields are all, recursively, such messages.
    pub(crate) fn element_is_empty(&self, owner: &MsgSpec, field: &FieldSpec) -> Result<bool, CodecError> {
        self.element_is_empty_at(owner, field, 0)
    }

    fn element_is_empty_at(&self, owner: &MsgSpec, field: &FieldSpec, depth: usize) -> Result<bool, CodecError> {
        if field.kind() != FieldKind::Message || depth > MAX_NESTING {
            return Ok(false);
        }
        let nested = self.field_spec(owner, field)?;
        for f in &nested.fields {
            if f.is_array || !self.element_is_empty_at(nested, f, depth + 1)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Nesting depth past which a compound is assumed to take bytes.
const MAX_NESTING: usize = 64;

#[derive(Debug, Clone)]
pub struct Codec {
    registry: SpecRegistry,
}

impl Codec {
    pub fn new(registry: SpecRegistry) -> Self {
        Codec { registry }
    }

    pub fn registry(&self) -> &SpecRegistry {
        &self.registry
    }

    /// Encode a message by `package/Name`. Every declared field must be present.
    pub fn encode_message(&self, message_name: &str, values: &HashMap<String, Value>) -> Result<Vec<u8>, CodecError> {
        let spec = self
            .registry
            .get(message_name)
            .ok_or_else(|| CodecError::UnknownMessage(message_name.to_string()))?;
        let mut out = Vec::new();
        self.encode_struct(&mut out, spec, values)?;
        Ok(out)
    }

    /// Decode a single message by `package/Name` from the start of `bytes`.
    pub fn decode_message(&self, message_name: &str, bytes: &[u8]) -> Result<HashMap<String, Value>, CodecError> {
        self.decode_message_with_extent(message_name, bytes).1
    }

    /// Decode a single message and return (bytes_consumed, result).
    /// On error the count is how far decoding got.
    pub fn decode_message_with_extent(
        &self,
        message_name: &str,
        bytes: &[u8],
    ) -> (usize, Result<HashMap<String, Value>, CodecError>) {
        let spec = match self.registry.get(message_name) {
            Some(s) => s,
            None => return (0, Err(CodecError::UnknownMessage(message_name.to_string()))),
        };
        let mut cursor = Cursor::new(bytes);
        let result = self.decode_struct(&mut cursor, spec);
        (cursor.position() as usize, result)
    }

    fn encode_struct(
        &self,
        w: &mut dyn Write,
        spec: &MsgSpec,
        values: &HashMap<String, Value>,
    ) -> Result<(), CodecError> {
        for f in &spec.fields {
            let v = values
                .get(&f.name)
                .ok_or_else(|| CodecError::MissingField(f.name.clone()))?;
            self.encode_field(w, spec, f, v).map_err(|e| e.in_field(&f.ident))?;
        }
        Ok(())
    }

    fn encode_field(&self, w: &mut dyn Write, spec: &MsgSpec, f: &FieldSpec, v: &Value) -> Result<(), CodecError> {
        if !f.is_array {
            return self.encode_element(w, spec, f, v);
        }
        let items = v.as_list().ok_or(WireError::TypeMismatch {
            expected: f.kind(),
            found: v.type_name(),
        })?;
        if f.is_fixed_array() && items.len() != f.array_size {
            return Err(WireError::ArrayLength {
                expected: f.array_size,
                found: items.len(),
            }
            .into());
        }
        wire::write_len(w, items.len())?;
        for item in items {
            self.encode_element(w, spec, f, item)?;
        }
        Ok(())
    }

    fn encode_element(&self, w: &mut dyn Write, spec: &MsgSpec, f: &FieldSpec, v: &Value) -> Result<(), CodecError> {
        let kind = f.kind();
        if kind == FieldKind::Message {
            let nested = self.registry.field_spec(spec, f)?;
            let values = v.as_struct().ok_or(WireError::TypeMismatch {
                expected: kind,
                found: v.type_name(),
            })?;
            return self.encode_struct(w, nested, values);
        }
        let r = v.as_field_ref().ok_or(WireError::TypeMismatch {
            expected: kind,
            found: v.type_name(),
        })?;
        wire::write_field(w, kind, r)?;
        Ok(())
    }

    fn decode_struct(&self, r: &mut dyn Read, spec: &MsgSpec) -> Result<HashMap<String, Value>, CodecError> {
        let mut out = HashMap::with_capacity(spec.fields.len());
        for f in &spec.fields {
            let v = self.decode_field(r, spec, f).map_err(|e| e.in_field(&f.ident))?;
            out.insert(f.name.clone(), v);
        }
        Ok(out)
    }

    fn decode_field(&self, r: &mut dyn Read, spec: &MsgSpec, f: &FieldSpec) -> Result<Value, CodecError> {
        if !f.is_array {
            return self.decode_element(r, spec, f);
        }
        let n = wire::read_len(r)?;
        if f.is_fixed_array() && n != f.array_size {
            return Err(WireError::ArrayLength {
                expected: f.array_size,
                found: n,
            }
            .into());
        }
        if self.registry.element_is_empty(spec, f)? {
            wire::check_empty_elements(n)?;
        }
        // The count is untrusted; let the data run out before memory does.
        let mut items = Vec::with_capacity(n.min(1024));
        for _ in 0..n {
            items.push(self.decode_element(r, spec, f)?);
        }
        Ok(Value::List(items))
    }

    fn decode_element(&self, r: &mut dyn Read, spec: &MsgSpec, f: &FieldSpec) -> Result<Value, CodecError> {
        let kind = f.kind();
        let mut v = match Value::zero(kind) {
            Some(v) => v,
            None => {
                let nested = self.registry.field_spec(spec, f)?;
                return Ok(Value::Struct(self.decode_struct(r, nested)?));
            }
        };
        if let Some(slot) = v.as_field_mut() {
            wire::read_field(r, kind, slot)?;
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(package: &str, name: &str, text: &str) -> SpecRegistry {
        let builtins = BuiltinTable::standard();
        let config = GenConfig::default();
        let resolver = Resolver::new(&builtins, &config, package);
        let mut reg = SpecRegistry::with_std_msgs().unwrap();
        reg.insert(parser::parse_msg_spec(&resolver, name, text.as_bytes()).unwrap())
            .unwrap();
        reg
    }

    #[test]
    fn bundled_header_is_registered() {
        let reg = SpecRegistry::with_std_msgs().unwrap();
        assert!(reg.contains("std_msgs/Header"));
        assert_eq!(reg.get("std_msgs/Header").unwrap().fields.len(), 3);
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut reg = SpecRegistry::with_std_msgs().unwrap();
        let err = reg.register_type(crate::msgs::std_msgs::Header::MESSAGE_TYPE).unwrap_err();
        assert!(matches!(err, CodecError::Duplicate(ref n) if n == "std_msgs/Header"));
    }

    #[test]
    fn missing_field_is_reported() {
        let codec = Codec::new(registry("p", "Pair", "int32 a\nint32 b\n"));
        let mut values = HashMap::new();
        values.insert("a".to_string(), Value::I32(1));
        let err = codec.encode_message("p/Pair", &values).unwrap_err();
        assert!(matches!(err, CodecError::MissingField(ref f) if f == "b"));
    }

    #[test]
    fn wrong_variant_is_a_type_mismatch() {
        let codec = Codec::new(registry("p", "Pair", "int32 a\nint32 b\n"));
        let mut values = HashMap::new();
        values.insert("a".to_string(), Value::I32(1));
        values.insert("b".to_string(), Value::String("x".into()));
        let err = codec.encode_message("p/Pair", &values).unwrap_err();
        match err {
            CodecError::Wire(e) => assert!(matches!(
                e.root(),
                WireError::TypeMismatch { expected: FieldKind::Int32, found: "string" }
            )),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_element_count_is_bounded() {
        let mut reg = registry("p", "Empty", "");
        let builtins = BuiltinTable::standard();
        let config = GenConfig::default();
        let resolver = Resolver::new(&builtins, &config, "p");
        reg.insert(parser::parse_msg_spec(&resolver, "Wrapper", b"Empty inner\n").unwrap())
            .unwrap();
        reg.insert(parser::parse_msg_spec(&resolver, "Outer", b"Wrapper[] xs\n").unwrap())
            .unwrap();
        let codec = Codec::new(reg);

        let (n, res) = codec.decode_message_with_extent("p/Outer", &[0x00, 0x00, 0x40, 0x00]);
        assert_eq!(n, 4);
        match res.unwrap_err() {
            CodecError::Wire(e) => assert!(matches!(
                e.root(),
                WireError::ElementLimit { count: 0x0040_0000, limit: wire::MAX_EMPTY_ELEMENTS }
            )),
            other => panic!("unexpected {other:?}"),
        }

        let decoded = codec.decode_message("p/Outer", &[0x02, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(decoded["xs"].as_list().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn initialism_type_names_resolve() {
        let mut reg = registry("p", "Url", "string s\n");
        let builtins = BuiltinTable::standard();
        let config = GenConfig::default();
        let resolver = Resolver::new(&builtins, &config, "p");
        reg.insert(parser::parse_msg_spec(&resolver, "Page", b"Url link\nUrl[] more\n").unwrap())
            .unwrap();
        let codec = Codec::new(reg);
        let bytes = [0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, b'x'];
        let decoded = codec.decode_message("p/Page", &bytes).unwrap();
        let link = decoded["link"].as_struct().unwrap();
        assert_eq!(link["s"].as_str(), Some(""));
        assert_eq!(decoded["more"].as_list().unwrap()[0].as_struct().unwrap()["s"].as_str(), Some("x"));
    }

    #[test]
    fn unknown_message() {
        let codec = Codec::new(SpecRegistry::new());
        let (n, res) = codec.decode_message_with_extent("p/Nope", &[]);
        assert_eq!(n, 0);
        assert!(matches!(res, Err(CodecError::UnknownMessage(_))));
    }
}
