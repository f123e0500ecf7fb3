//! Type and name resolution: builtin table, compound references, identifier casing.

use crate::config::GenConfig;
use crate::parser::ParseError;
use crate::spec::{ConstantSpec, FieldSpec, TypeClass};
use crate::wire::FieldKind;
use std::collections::HashMap;

/// Builtin type entry: wire kind, Rust type and zero value expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinType {
    pub kind: FieldKind,
    pub rust_type: &'static str,
    pub zero_value: &'static str,
}

/// Immutable table of builtin type tokens.
#[derive(Debug, Clone)]
pub struct BuiltinTable {
    types: HashMap<&'static str, BuiltinType>,
}

impl BuiltinTable {
    pub fn standard() -> Self {
        let entries: [(&'static str, FieldKind, &'static str, &'static str); 16] = [
            ("bool", FieldKind::Bool, "bool", "false"),
            // byte and char are the legacy aliases of int8 and uint8.
            ("byte", FieldKind::Int8, "i8", "0"),
            ("char", FieldKind::UInt8, "u8", "0"),
            ("int8", FieldKind::Int8, "i8", "0"),
            ("uint8", FieldKind::UInt8, "u8", "0"),
            ("int16", FieldKind::Int16, "i16", "0"),
            ("uint16", FieldKind::UInt16, "u16", "0"),
            ("int32", FieldKind::Int32, "i32", "0"),
            ("uint32", FieldKind::UInt32, "u32", "0"),
            ("int64", FieldKind::Int64, "i64", "0"),
            ("uint64", FieldKind::UInt64, "u64", "0"),
            ("float32", FieldKind::Float32, "f32", "0.0"),
            ("float64", FieldKind::Float64, "f64", "0.0"),
            ("string", FieldKind::String, "::std::string::String", "::std::string::String::new()"),
            ("time", FieldKind::Time, "wire::Time", "wire::Time::default()"),
            ("duration", FieldKind::Duration, "wire::Duration", "wire::Duration::default()"),
        ];
        let types = entries
            .into_iter()
            .map(|(token, kind, rust_type, zero_value)| {
                (token, BuiltinType { kind, rust_type, zero_value })
            })
            .collect();
        BuiltinTable { types }
    }

    pub fn get(&self, token: &str) -> Option<&BuiltinType> {
        self.types.get(token)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for BuiltinTable {
    fn default() -> Self {
        BuiltinTable::standard()
    }
}

/// Package and name the bare `Header` token always refers to.
pub const HEADER_PACKAGE: &str = "std_msgs";
pub const HEADER_TYPE: &str = "Header";

/// Initialisms kept fully uppercase by [`snake_to_camel`].
pub const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP", "JSON", "LHS",
    "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL", "UDP", "UI", "UID", "UUID",
    "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

/// `frame_id` -> `FrameID`, `dyn_ary` -> `DynAry`, `ColorRGBA` -> `ColorRGBA`.
pub fn snake_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split('_') {
        let upper = word.to_uppercase();
        if COMMON_INITIALISMS.contains(&upper.as_str()) {
            out.push_str(&upper);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// A resolved field plus the foreign import it requires, if any.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub field: FieldSpec,
    /// (package, module path)
    pub dependency: Option<(String, String)>,
}

/// Resolves type tokens for definitions of one package.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    builtins: &'a BuiltinTable,
    config: &'a GenConfig,
    package: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(builtins: &'a BuiltinTable, config: &'a GenConfig, package: &'a str) -> Self {
        Resolver { builtins, config, package }
    }

    pub fn package(&self) -> &'a str {
        self.package
    }

    /// Classify one field declaration.
    ///
    /// `array` is `None` without brackets, `Some("")` for `T[]`, `Some("N")` for `T[N]`.
    /// `package_override` is the module path from an inline `package=` directive.
    pub fn resolve_field(
        &self,
        name: &str,
        type_token: &str,
        array: Option<&str>,
        package_override: Option<&str>,
    ) -> Result<ResolvedField, ParseError> {
        let (is_array, array_size) = match array {
            None => (false, 0),
            Some("") => (true, 0),
            Some(digits) => {
                let n = digits.parse::<usize>().map_err(|source| ParseError::ArraySize {
                    size: digits.to_string(),
                    source,
                })?;
                (true, n)
            }
        };

        let mut field = FieldSpec {
            name: name.to_string(),
            ident: snake_to_camel(name),
            type_token: type_token.to_string(),
            is_array,
            array_size,
            class: TypeClass::Scalar(FieldKind::Bool),
            rust_type: String::new(),
            zero_value: String::new(),
        };

        if let Some(builtin) = self.builtins.get(type_token) {
            field.class = match builtin.kind {
                FieldKind::Time => TypeClass::Time,
                FieldKind::Duration => TypeClass::Duration,
                kind => TypeClass::Scalar(kind),
            };
            field.rust_type = builtin.rust_type.to_string();
            field.zero_value = builtin.zero_value.to_string();
            return Ok(ResolvedField { field, dependency: None });
        }

        // The class keeps the name as declared (registry key); the Rust name is derived.
        let (import, declared) = if type_token == HEADER_TYPE {
            (Some(HEADER_PACKAGE), HEADER_TYPE)
        } else {
            let parts: Vec<&str> = type_token.split('/').collect();
            match parts.as_slice() {
                [ty] if !ty.is_empty() => (None, *ty),
                [pkg, ty] if !pkg.is_empty() && !ty.is_empty() => (Some(*pkg), *ty),
                _ => {
                    return Err(ParseError::InvalidType {
                        token: type_token.to_string(),
                    })
                }
            }
        };
        let rust_name = snake_to_camel(declared);

        let mut dependency = None;
        match import {
            Some(pkg) if pkg != self.package => {
                field.rust_type = format!("{}::{}", pkg, rust_name);
                field.class = TypeClass::Foreign {
                    package: pkg.to_string(),
                    name: declared.to_string(),
                };
                if let Some(path) = package_override {
                    dependency = Some((pkg.to_string(), path.to_string()));
                } else if let Some(path) = self.config.import_path(pkg) {
                    dependency = Some((pkg.to_string(), path.to_string()));
                } else {
                    tracing::warn!(
                        "import name not found in package directive nor known imports: {}",
                        pkg
                    );
                }
            }
            _ => {
                field.rust_type = rust_name;
                field.class = TypeClass::Local(declared.to_string());
            }
        }
        field.zero_value = format!("{}::default()", field.rust_type);
        Ok(ResolvedField { field, dependency })
    }

    pub fn resolve_constant(&self, name: &str, type_token: &str, value: &str) -> ConstantSpec {
        ConstantSpec {
            name: name.to_string(),
            ident: snake_to_camel(name),
            type_token: type_token.to_string(),
            value: value.to_string(),
        }
    }

    pub fn builtins(&self) -> &'a BuiltinTable {
        self.builtins
    }
}
