//! Specification model: parsed, resolved and immutable definitions.

use crate::wire::FieldKind;
use std::collections::BTreeMap;

/// Resolved classification of a field's type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClass {
    /// Fixed-width builtin or `string`.
    Scalar(FieldKind),
    Time,
    Duration,
    /// Message in the owning package, by declared name.
    Local(String),
    /// Message in another package, by declared name.
    Foreign { package: String, name: String },
}

impl TypeClass {
    pub fn kind(&self) -> FieldKind {
        match self {
            TypeClass::Scalar(kind) => *kind,
            TypeClass::Time => FieldKind::Time,
            TypeClass::Duration => FieldKind::Duration,
            TypeClass::Local(_) | TypeClass::Foreign { .. } => FieldKind::Message,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, TypeClass::Local(_) | TypeClass::Foreign { .. })
    }

    /// Owning package of a foreign compound.
    pub fn package(&self) -> Option<&str> {
        match self {
            TypeClass::Foreign { package, .. } => Some(package),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Declared name, source casing.
    pub name: String,
    /// Upper camel case identifier.
    pub ident: String,
    /// Raw type token as written (`uint32`, `std_msgs/Header`, `Header`).
    pub type_token: String,
    pub is_array: bool,
    /// 0 for dynamic arrays (and non-arrays), N for `T[N]`.
    pub array_size: usize,
    pub class: TypeClass,
    /// Rust element type (`URL`, `geometry_msgs::Pose`).
    pub rust_type: String,
    /// Rust expression for a zero element.
    pub zero_value: String,
}

impl FieldSpec {
    pub fn kind(&self) -> FieldKind {
        self.class.kind()
    }

    pub fn is_fixed_array(&self) -> bool {
        self.is_array && self.array_size > 0
    }

    pub fn is_dynamic_array(&self) -> bool {
        self.is_array && self.array_size == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantSpec {
    /// Declared name, source casing.
    pub name: String,
    /// Upper camel case identifier.
    pub ident: String,
    pub type_token: String,
    /// Literal kept as written; interpreted when emitted.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MsgSpec {
    pub package: String,
    pub name: String,
    /// Verbatim definition text.
    pub raw: String,
    /// MD5 over the raw bytes.
    pub md5sum: String,
    /// Declaration order, which is wire order.
    pub fields: Vec<FieldSpec>,
    pub constants: Vec<ConstantSpec>,
    /// Foreign package -> Rust module path.
    pub dependencies: BTreeMap<String, String>,
    /// Derived at parse time for callers; emission does not depend on them.
    pub has_builtin: bool,
    pub has_array: bool,
    pub has_fixed_array: bool,
}

impl MsgSpec {
    /// `package/Name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }

    /// Referenced foreign packages, sorted.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn constant(&self, name: &str) -> Option<&ConstantSpec> {
        self.constants.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SrvSpec {
    pub package: String,
    pub name: String,
    /// Verbatim definition text, both segments.
    pub raw: String,
    /// Alias of the request's fingerprint.
    pub md5sum: String,
    pub request: MsgSpec,
    pub response: MsgSpec,
    pub dependencies: BTreeMap<String, String>,
}

impl SrvSpec {
    pub fn compose(package: &str, name: &str, raw: String, request: MsgSpec, response: MsgSpec) -> SrvSpec {
        let mut dependencies = request.dependencies.clone();
        for (pkg, path) in &response.dependencies {
            dependencies.entry(pkg.clone()).or_insert_with(|| path.clone());
        }
        // Peers expect the request fingerprint here, not a digest of the whole service text.
        let md5sum = request.md5sum.clone();
        SrvSpec {
            package: package.to_string(),
            name: name.to_string(),
            raw,
            md5sum,
            request,
            response,
            dependencies,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }
}
