//! Parse message and service definition text into [`crate::spec`] types using pest.

use crate::resolve::Resolver;
use crate::spec::{ConstantSpec, MsgSpec, SrvSpec};
use md5::{Digest, Md5};
use pest::Parser;
use pest_derive::Parser as PestParser;
use std::collections::BTreeMap;
use std::num::ParseIntError;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct DefinitionParser;

/// Line separating the request and response sections of a service.
pub const SERVICE_SEPARATOR: &str = "---";

/// Directive namespace addressed to this generator; other namespaces are ignored.
pub const DIRECTIVE_NAMESPACE: &str = "rust";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized msg line: {0}")]
    UnrecognizedLine(String),
    #[error("invalid array size '{size}': {source}")]
    ArraySize {
        size: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid type name: {token}")]
    InvalidType { token: String },
    #[error("srv definition must have 2 sections separated by '---', found {0}")]
    SegmentCount(usize),
    #[error("definition is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// MD5 of the raw definition bytes, lowercase hex.
pub fn fingerprint(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

/// `key=value` directives from a trailing comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    entries: BTreeMap<String, String>,
}

impl Directives {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Module path overriding the inferred import of a foreign field.
    pub fn package(&self) -> Option<&str> {
        self.get("package")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect directives from comment text (leading `#` optional).
pub fn parse_directives(comment: &str) -> Directives {
    let mut entries = BTreeMap::new();
    let pair = match DefinitionParser::parse(Rule::comment, comment)
        .ok()
        .and_then(|mut pairs| pairs.next())
    {
        Some(p) => p,
        None => return Directives::default(),
    };
    for directive in pair.into_inner().filter(|p| p.as_rule() == Rule::directive) {
        let mut namespace = None;
        let mut key = "";
        let mut value = "";
        for part in directive.into_inner() {
            match part.as_rule() {
                Rule::namespace => namespace = Some(part.as_str()),
                Rule::key => key = part.as_str(),
                Rule::directive_value => value = part.as_str(),
                _ => {}
            }
        }
        if namespace.map_or(true, |ns| ns == DIRECTIVE_NAMESPACE) {
            entries.insert(key.to_string(), value.to_string());
        }
    }
    Directives { entries }
}

/// Parse one message definition.
pub fn parse_msg_spec(resolver: &Resolver<'_>, name: &str, data: &[u8]) -> Result<MsgSpec, ParseError> {
    let text = std::str::from_utf8(data)?;
    let mut spec = MsgSpec {
        package: resolver.package().to_string(),
        name: name.to_string(),
        raw: text.to_string(),
        md5sum: fingerprint(data),
        fields: Vec::new(),
        constants: Vec::new(),
        dependencies: BTreeMap::new(),
        has_builtin: false,
        has_array: false,
        has_fixed_array: false,
    };

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let pair = DefinitionParser::parse(Rule::line, line)
            .ok()
            .and_then(|mut pairs| pairs.next())
            .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;

        let mut decl = None;
        let mut trailer = "";
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::constant_decl | Rule::field_decl => decl = Some(inner),
                Rule::trailer => trailer = inner.as_str(),
                _ => {}
            }
        }
        let decl = decl.ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;

        if decl.as_rule() == Rule::constant_decl {
            spec.constants.push(build_constant(resolver, decl, line));
            continue;
        }

        let mut type_name = "";
        let mut array = None;
        let mut field_name = "";
        for part in decl.into_inner() {
            match part.as_rule() {
                Rule::type_name => type_name = part.as_str(),
                Rule::array_spec => {
                    array = Some(part.into_inner().next().map(|p| p.as_str()).unwrap_or(""));
                }
                Rule::ident => field_name = part.as_str(),
                _ => {}
            }
        }
        let directives = trailer
            .find('#')
            .map(|i| parse_directives(&trailer[i..]))
            .unwrap_or_default();

        let resolved = resolver.resolve_field(field_name, type_name, array, directives.package())?;
        let field = resolved.field;
        if field.class.is_builtin() {
            spec.has_builtin = true;
        }
        if field.is_array {
            spec.has_array = true;
            if field.array_size > 0 {
                spec.has_fixed_array = true;
            }
        }
        if let Some((pkg, path)) = resolved.dependency {
            spec.dependencies.insert(pkg, path);
        }
        spec.fields.push(field);
    }

    tracing::debug!(
        "parsed {}: {} field(s), {} constant(s), md5sum {}",
        spec.full_name(),
        spec.fields.len(),
        spec.constants.len(),
        spec.md5sum
    );
    Ok(spec)
}

fn build_constant(resolver: &Resolver<'_>, pair: pest::iterators::Pair<Rule>, line: &str) -> ConstantSpec {
    let mut type_name = "";
    let mut name = "";
    let mut value = "";
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::type_name => type_name = part.as_str(),
            Rule::ident => name = part.as_str(),
            Rule::const_value => value = part.as_str(),
            _ => {}
        }
    }
    // String constants take everything after '=', comment characters included.
    if type_name == "string" {
        if let Some(eq) = line.find('=') {
            value = line[eq + 1..].trim();
        }
    }
    resolver.resolve_constant(name, type_name, value)
}

/// Split service text on separator lines. The request keeps everything before the
/// separator line; the response starts right after the separator token.
pub fn split_service(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut offset = 0;
    for chunk in text.split_inclusive('\n') {
        if chunk.trim() == SERVICE_SEPARATOR {
            segments.push(&text[segment_start..offset]);
            let token_at = chunk.find(SERVICE_SEPARATOR).unwrap_or(0);
            segment_start = offset + token_at + SERVICE_SEPARATOR.len();
        }
        offset += chunk.len();
    }
    segments.push(&text[segment_start..]);
    segments
}

/// Parse a service definition: request and response sections, composed.
pub fn parse_srv_spec(resolver: &Resolver<'_>, name: &str, data: &[u8]) -> Result<SrvSpec, ParseError> {
    let text = std::str::from_utf8(data)?;
    let segments = split_service(text);
    let (request_text, response_text) = match segments.as_slice() {
        [request, response] => (*request, *response),
        other => return Err(ParseError::SegmentCount(other.len())),
    };
    let request = parse_msg_spec(resolver, &format!("{}Request", name), request_text.as_bytes())?;
    let response = parse_msg_spec(resolver, &format!("{}Response", name), response_text.as_bytes())?;
    let spec = SrvSpec::compose(resolver.package(), name, text.to_string(), request, response);
    tracing::debug!(
        "parsed {}: md5sum {} (request), whole-text md5sum {}",
        spec.full_name(),
        spec.md5sum,
        fingerprint(data)
    );
    Ok(spec)
}
