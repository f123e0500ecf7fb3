//! Render resolved definitions as Rust source.
//!
//! Templates are expanded into a plain string, checked with `syn` and formatted with
//! `prettyplease`, then prefixed with the generated-code banner. Nothing is written to
//! disk here.

use crate::config::GenConfig;
use crate::resolve::snake_to_camel;
use crate::spec::{ConstantSpec, FieldSpec, MsgSpec, SrvSpec, TypeClass};
use crate::wire::FieldKind;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

pub const GENERATOR_NAME: &str = "rosgen";

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("template expansion failed: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("constant {name}: {reason}")]
    Constant { name: String, reason: String },
    #[error("{name} collides with a name generated code relies on")]
    ReservedName { name: String },
    #[error("generated source does not parse: {error}")]
    InvalidSource {
        #[source]
        error: syn::Error,
        /// Unformatted source, for diagnosis.
        code: String,
    },
}

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "static", "struct", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED_PATHS: &[&str] = &["crate", "self", "Self", "super"];

/// Names every generated file brings into scope, through its imports or the prelude.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Box", "Default", "FieldKind", "FieldMut", "FieldRef", "Message", "MessageType", "Read", "Result",
    "Service", "ServiceType", "Vec", "WireError", "Write",
];

/// Associated const every generated message defines.
const MESSAGE_TYPE_CONST: &str = "MESSAGE_TYPE";

fn check_type_name(name: &str) -> Result<(), EmitError> {
    if RESERVED_TYPE_NAMES.contains(&name) {
        return Err(EmitError::ReservedName { name: name.to_string() });
    }
    Ok(())
}

/// Rust identifier for a declared field name.
pub fn field_ident(name: &str) -> String {
    if RESERVED_PATHS.contains(&name) {
        format!("{}_", name)
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Struct name for a definition name (`add_two_ints` -> `AddTwoInts`).
pub fn type_ident(name: &str) -> String {
    snake_to_camel(name)
}

/// Banner placed above every generated file.
pub fn banner(source: &str) -> String {
    format!(
        "// Code generated by {}.\n// source: {}\n// DO NOT EDIT!\n\n",
        GENERATOR_NAME, source
    )
}

pub struct Emitter<'a> {
    config: &'a GenConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a GenConfig) -> Self {
        Emitter { config }
    }

    /// Source for one message definition.
    pub fn emit_msg(&self, spec: &MsgSpec, source: &str) -> Result<String, EmitError> {
        let mut code = String::new();
        let locals = local_types(&spec.fields);
        check_names(&locals, &spec.dependencies, &[spec])?;
        self.write_imports(&mut code, &spec.dependencies, &locals, !spec.fields.is_empty(), false)?;
        write_message(&mut code, spec)?;
        finish(code, source)
    }

    /// Source for one service: request, response and the service marker type.
    pub fn emit_srv(&self, spec: &SrvSpec, source: &str) -> Result<String, EmitError> {
        let mut code = String::new();
        let mut locals = local_types(&spec.request.fields);
        locals.extend(local_types(&spec.response.fields));
        check_names(&locals, &spec.dependencies, &[&spec.request, &spec.response])?;
        check_type_name(&type_ident(&spec.name))?;
        let has_fields = !spec.request.fields.is_empty() || !spec.response.fields.is_empty();
        self.write_imports(&mut code, &spec.dependencies, &locals, has_fields, true)?;
        write_message(&mut code, &spec.request)?;
        write_message(&mut code, &spec.response)?;

        let name = type_ident(&spec.name);
        let request = type_ident(&spec.request.name);
        let response = type_ident(&spec.response.name);
        writeln!(code, "/// `{}` service.", spec.full_name())?;
        writeln!(code, "#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]")?;
        writeln!(code, "pub struct {};", name)?;
        writeln!(code, "impl Service for {} {{", name)?;
        writeln!(code, "    type Request = {};", request)?;
        writeln!(code, "    type Response = {};", response)?;
        writeln!(
            code,
            "    const SERVICE_TYPE: &'static ServiceType = &ServiceType::new({:?}, {:?}, {:?}, {}::MESSAGE_TYPE, {}::MESSAGE_TYPE);",
            spec.full_name(),
            spec.raw,
            spec.md5sum,
            request,
            response
        )?;
        writeln!(code, "}}")?;
        finish(code, source)
    }

    fn write_imports(
        &self,
        code: &mut String,
        dependencies: &BTreeMap<String, String>,
        locals: &BTreeSet<String>,
        has_fields: bool,
        service: bool,
    ) -> Result<(), EmitError> {
        let mut items: Vec<&str> = Vec::new();
        if has_fields {
            items.extend(["self", "FieldKind", "FieldMut", "FieldRef"]);
        }
        items.extend(["Message", "MessageType"]);
        if service {
            items.extend(["Service", "ServiceType"]);
        }
        items.push("WireError");
        writeln!(code, "use {}::wire::{{{}}};", self.config.runtime_crate, items.join(", "))?;
        writeln!(code, "use std::io::{{Read, Write}};")?;
        for (pkg, path) in dependencies {
            let last = path.rsplit("::").next().unwrap_or(path);
            if last == pkg {
                writeln!(code, "use {};", path)?;
            } else {
                writeln!(code, "use {} as {};", path, pkg)?;
            }
        }
        for local in locals {
            writeln!(code, "use super::{};", local)?;
        }
        Ok(())
    }
}

/// Reject definitions whose names would shadow or clash with what the emitted file imports.
fn check_names(
    locals: &BTreeSet<String>,
    dependencies: &BTreeMap<String, String>,
    messages: &[&MsgSpec],
) -> Result<(), EmitError> {
    for local in locals {
        check_type_name(local)?;
    }
    for pkg in dependencies.keys() {
        if pkg == "wire" || pkg == "std" {
            return Err(EmitError::ReservedName { name: pkg.clone() });
        }
    }
    for spec in messages {
        check_type_name(&type_ident(&spec.name))?;
        if let Some(c) = spec.constants.iter().find(|c| c.name.to_uppercase() == MESSAGE_TYPE_CONST) {
            return Err(EmitError::ReservedName { name: c.name.clone() });
        }
    }
    Ok(())
}

fn finish(code: String, source: &str) -> Result<String, EmitError> {
    let file = match syn::parse_file(&code) {
        Ok(file) => file,
        Err(error) => return Err(EmitError::InvalidSource { error, code }),
    };
    Ok(format!("{}{}", banner(source), prettyplease::unparse(&file)))
}

fn local_types(fields: &[FieldSpec]) -> BTreeSet<String> {
    fields
        .iter()
        .filter_map(|f| match &f.class {
            TypeClass::Local(_) => Some(f.rust_type.clone()),
            _ => None,
        })
        .collect()
}

fn write_message(code: &mut String, spec: &MsgSpec) -> Result<(), EmitError> {
    let name = type_ident(&spec.name);

    writeln!(code, "/// `{}` message.", spec.full_name())?;
    writeln!(code, "#[derive(Debug, Clone, PartialEq)]")?;
    if spec.fields.iter().any(|f| f.name.chars().any(|c| c.is_ascii_uppercase())) {
        writeln!(code, "#[allow(non_snake_case)]")?;
    }
    writeln!(code, "pub struct {} {{", name)?;
    for f in &spec.fields {
        writeln!(code, "    pub {}: {},", field_ident(&f.name), field_type(f))?;
    }
    writeln!(code, "}}")?;

    writeln!(code, "impl Default for {} {{", name)?;
    writeln!(code, "    fn default() -> Self {{")?;
    writeln!(code, "        {} {{", name)?;
    for f in &spec.fields {
        writeln!(code, "            {}: {},", field_ident(&f.name), field_zero(f))?;
    }
    writeln!(code, "        }}")?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;

    writeln!(code, "impl {} {{", name)?;
    writeln!(
        code,
        "    pub const {}: &'static MessageType = &MessageType::new({:?}, {:?}, {:?}, {}::new_boxed);",
        MESSAGE_TYPE_CONST,
        spec.full_name(),
        spec.raw,
        spec.md5sum,
        name
    )?;
    for c in &spec.constants {
        let (ty, value) = constant_literal(c)?;
        writeln!(code, "    pub const {}: {} = {};", c.name.to_uppercase(), ty, value)?;
    }
    writeln!(code, "    fn new_boxed() -> Box<dyn Message> {{")?;
    writeln!(code, "        Box::new({}::default())", name)?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;

    let (w, r) = if spec.fields.is_empty() { ("_w", "_r") } else { ("w", "r") };
    writeln!(code, "impl Message for {} {{", name)?;
    writeln!(code, "    fn message_type(&self) -> &'static MessageType {{")?;
    writeln!(code, "        Self::MESSAGE_TYPE")?;
    writeln!(code, "    }}")?;
    writeln!(code, "    fn serialize(&self, {}: &mut dyn Write) -> Result<(), WireError> {{", w)?;
    for f in &spec.fields {
        write_serialize(code, f)?;
    }
    writeln!(code, "        Ok(())")?;
    writeln!(code, "    }}")?;
    writeln!(code, "    fn deserialize(&mut self, {}: &mut dyn Read) -> Result<(), WireError> {{", r)?;
    for f in &spec.fields {
        write_deserialize(code, f)?;
    }
    writeln!(code, "        Ok(())")?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;
    Ok(())
}

fn field_type(f: &FieldSpec) -> String {
    if f.is_fixed_array() {
        format!("[{}; {}]", f.rust_type, f.array_size)
    } else if f.is_array {
        format!("Vec<{}>", f.rust_type)
    } else {
        f.rust_type.clone()
    }
}

/// Element types that can fill an array with `[x; N]`.
fn is_copy(f: &FieldSpec) -> bool {
    !matches!(f.kind(), FieldKind::String | FieldKind::Message)
}

fn field_zero(f: &FieldSpec) -> String {
    if f.is_fixed_array() {
        if is_copy(f) {
            format!("[{}; {}]", f.zero_value, f.array_size)
        } else {
            format!("std::array::from_fn(|_| {})", f.zero_value)
        }
    } else if f.is_array {
        "Vec::new()".to_string()
    } else {
        f.zero_value.clone()
    }
}

/// `FieldKind`, `FieldRef` and `FieldMut` share variant names.
fn variant(kind: FieldKind) -> String {
    format!("{:?}", kind)
}

fn write_serialize(code: &mut String, f: &FieldSpec) -> Result<(), EmitError> {
    let kind = variant(f.kind());
    let ident = field_ident(&f.name);
    if f.is_array {
        let item = match f.kind() {
            FieldKind::String | FieldKind::Message => format!("FieldRef::{}(item)", kind),
            _ => format!("FieldRef::{}(*item)", kind),
        };
        writeln!(
            code,
            "        wire::write_array(w, FieldKind::{}, self.{}.iter().map(|item| {})).map_err(|e| e.in_field({:?}))?;",
            kind, ident, item, f.ident
        )?;
    } else {
        let value = match f.kind() {
            FieldKind::String | FieldKind::Message => format!("FieldRef::{}(&self.{})", kind, ident),
            _ => format!("FieldRef::{}(self.{})", kind, ident),
        };
        writeln!(
            code,
            "        wire::write_field(w, FieldKind::{}, {}).map_err(|e| e.in_field({:?}))?;",
            kind, value, f.ident
        )?;
    }
    Ok(())
}

fn write_deserialize(code: &mut String, f: &FieldSpec) -> Result<(), EmitError> {
    let kind = variant(f.kind());
    let ident = field_ident(&f.name);
    let call = if f.is_fixed_array() {
        format!(
            "wire::read_array(r, FieldKind::{}, &mut self.{}, |item| FieldMut::{}(item))",
            kind, ident, kind
        )
    } else if f.is_array {
        format!(
            "wire::read_vec(r, FieldKind::{}, &mut self.{}, |item| FieldMut::{}(item))",
            kind, ident, kind
        )
    } else {
        format!("wire::read_field(r, FieldKind::{}, FieldMut::{}(&mut self.{}))", kind, kind, ident)
    };
    writeln!(code, "        {}.map_err(|e| e.in_field({:?}))?;", call, f.ident)?;
    Ok(())
}

/// Rust type and literal for a constant, checked against its declared type.
pub fn constant_literal(c: &ConstantSpec) -> Result<(String, String), EmitError> {
    let fail = |reason: String| EmitError::Constant {
        name: c.name.clone(),
        reason,
    };
    let value = c.value.trim();
    let int = |ty: &str, min: i128, max: i128| -> Result<(String, String), EmitError> {
        let n: i128 = value
            .parse()
            .map_err(|_| fail(format!("'{}' is not an integer", value)))?;
        if n < min || n > max {
            return Err(fail(format!("{} is out of range for {}", n, c.type_token)));
        }
        Ok((ty.to_string(), n.to_string()))
    };
    match c.type_token.as_str() {
        "bool" => match value {
            "1" | "true" | "True" => Ok(("bool".into(), "true".into())),
            "0" | "false" | "False" => Ok(("bool".into(), "false".into())),
            other => Err(fail(format!("'{}' is not a bool", other))),
        },
        "int8" | "byte" => int("i8", i8::MIN as i128, i8::MAX as i128),
        "uint8" | "char" => int("u8", 0, u8::MAX as i128),
        "int16" => int("i16", i16::MIN as i128, i16::MAX as i128),
        "uint16" => int("u16", 0, u16::MAX as i128),
        "int32" => int("i32", i32::MIN as i128, i32::MAX as i128),
        "uint32" => int("u32", 0, u32::MAX as i128),
        "int64" => int("i64", i64::MIN as i128, i64::MAX as i128),
        "uint64" => int("u64", 0, u64::MAX as i128),
        "float32" => {
            let x: f32 = value
                .parse()
                .map_err(|_| fail(format!("'{}' is not a float", value)))?;
            if !x.is_finite() {
                return Err(fail(format!("{} is not a finite float32", value)));
            }
            Ok(("f32".into(), format!("{:?}", x)))
        }
        "float64" => {
            let x: f64 = value
                .parse()
                .map_err(|_| fail(format!("'{}' is not a float", value)))?;
            if !x.is_finite() {
                return Err(fail(format!("{} is not a finite float64", value)));
            }
            Ok(("f64".into(), format!("{:?}", x)))
        }
        "string" => Ok(("&str".into(), format!("{:?}", value))),
        other => Err(fail(format!("constants of type {} are not supported", other))),
    }
}
