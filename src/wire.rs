//! Wire codec runtime shared by generated message types and the data-driven codec.
//!
//! Every field is moved through [`write_field`] / [`read_field`], which dispatch on a
//! closed [`FieldKind`] tag decided when the definition was resolved. All multi-byte
//! integers are little-endian.
//!
//! | Kind | Encoding |
//! |------|----------|
//! | scalar | fixed width, no prefix |
//! | string | `u32` byte length, then the raw bytes |
//! | time / duration | `u32` seconds, then `u32` nanoseconds |
//! | array (dynamic or fixed) | `u32` element count, then the elements |
//! | message | the referenced type's own encoding, no framing |
//!
//! Fixed-size arrays carry the element count on the wire exactly like dynamic ones.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io::{self, Read, Write};

/// Wire kind of a single field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    String,
    Time,
    Duration,
    /// A compound type that encodes itself.
    Message,
}

impl FieldKind {
    /// Encoded size in bytes for kinds with a fixed width.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            FieldKind::Bool | FieldKind::Int8 | FieldKind::UInt8 => Some(1),
            FieldKind::Int16 | FieldKind::UInt16 => Some(2),
            FieldKind::Int32 | FieldKind::UInt32 | FieldKind::Float32 => Some(4),
            FieldKind::Int64 | FieldKind::UInt64 | FieldKind::Float64 => Some(8),
            FieldKind::Time | FieldKind::Duration => Some(8),
            FieldKind::String | FieldKind::Message => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int8 => "int8",
            FieldKind::UInt8 => "uint8",
            FieldKind::Int16 => "int16",
            FieldKind::UInt16 => "uint16",
            FieldKind::Int32 => "int32",
            FieldKind::UInt32 => "uint32",
            FieldKind::Int64 => "int64",
            FieldKind::UInt64 => "uint64",
            FieldKind::Float32 => "float32",
            FieldKind::Float64 => "float64",
            FieldKind::String => "string",
            FieldKind::Time => "time",
            FieldKind::Duration => "duration",
            FieldKind::Message => "message",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point in time: seconds and nanoseconds since the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub sec: u32,
    pub nsec: u32,
}

impl Time {
    pub const fn new(sec: u32, nsec: u32) -> Self {
        Time { sec, nsec }
    }
}

/// Time span: seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    pub sec: u32,
    pub nsec: u32,
}

impl Duration {
    pub const fn new(sec: u32, nsec: u32) -> Self {
        Duration { sec, nsec }
    }

    pub fn to_std(self) -> std::time::Duration {
        std::time::Duration::new(self.sec as u64, self.nsec)
    }
}

impl From<std::time::Duration> for Duration {
    /// Seconds beyond `u32::MAX` saturate.
    fn from(d: std::time::Duration) -> Self {
        Duration {
            sec: u32::try_from(d.as_secs()).unwrap_or(u32::MAX),
            nsec: d.subsec_nanos(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("IO: {0}")]
    Io(#[from] io::Error),
    #[error("truncated input while reading {kind}")]
    Truncated { kind: FieldKind },
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch { expected: FieldKind, found: &'static str },
    #[error("fixed array length mismatch: expected {expected}, got {found}")]
    ArrayLength { expected: usize, found: usize },
    #[error("{count} elements that take no bytes on the wire exceed the limit of {limit}")]
    ElementLimit { count: usize, limit: usize },
    #[error("length {0} does not fit the u32 length prefix")]
    LengthOverflow(usize),
    #[error("string is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("field {field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<WireError>,
    },
}

impl WireError {
    /// Attach the name of the field being encoded or decoded.
    pub fn in_field(self, field: &str) -> WireError {
        WireError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping field context.
    pub fn root(&self) -> &WireError {
        match self {
            WireError::Field { source, .. } => source.root(),
            other => other,
        }
    }

    fn reading(e: io::Error, kind: FieldKind) -> WireError {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            WireError::Truncated { kind }
        } else {
            WireError::Io(e)
        }
    }
}

/// Borrowed value handed to [`write_field`].
#[derive(Clone, Copy)]
pub enum FieldRef<'a> {
    Bool(bool),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(&'a str),
    Time(Time),
    Duration(Duration),
    Message(&'a dyn Message),
}

impl FieldRef<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldRef::Bool(_) => FieldKind::Bool,
            FieldRef::Int8(_) => FieldKind::Int8,
            FieldRef::UInt8(_) => FieldKind::UInt8,
            FieldRef::Int16(_) => FieldKind::Int16,
            FieldRef::UInt16(_) => FieldKind::UInt16,
            FieldRef::Int32(_) => FieldKind::Int32,
            FieldRef::UInt32(_) => FieldKind::UInt32,
            FieldRef::Int64(_) => FieldKind::Int64,
            FieldRef::UInt64(_) => FieldKind::UInt64,
            FieldRef::Float32(_) => FieldKind::Float32,
            FieldRef::Float64(_) => FieldKind::Float64,
            FieldRef::String(_) => FieldKind::String,
            FieldRef::Time(_) => FieldKind::Time,
            FieldRef::Duration(_) => FieldKind::Duration,
            FieldRef::Message(_) => FieldKind::Message,
        }
    }
}

/// Destination handed to [`read_field`].
pub enum FieldMut<'a> {
    Bool(&'a mut bool),
    Int8(&'a mut i8),
    UInt8(&'a mut u8),
    Int16(&'a mut i16),
    UInt16(&'a mut u16),
    Int32(&'a mut i32),
    UInt32(&'a mut u32),
    Int64(&'a mut i64),
    UInt64(&'a mut u64),
    Float32(&'a mut f32),
    Float64(&'a mut f64),
    String(&'a mut String),
    Time(&'a mut Time),
    Duration(&'a mut Duration),
    Message(&'a mut dyn Message),
}

impl FieldMut<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldMut::Bool(_) => FieldKind::Bool,
            FieldMut::Int8(_) => FieldKind::Int8,
            FieldMut::UInt8(_) => FieldKind::UInt8,
            FieldMut::Int16(_) => FieldKind::Int16,
            FieldMut::UInt16(_) => FieldKind::UInt16,
            FieldMut::Int32(_) => FieldKind::Int32,
            FieldMut::UInt32(_) => FieldKind::UInt32,
            FieldMut::Int64(_) => FieldKind::Int64,
            FieldMut::UInt64(_) => FieldKind::UInt64,
            FieldMut::Float32(_) => FieldKind::Float32,
            FieldMut::Float64(_) => FieldKind::Float64,
            FieldMut::String(_) => FieldKind::String,
            FieldMut::Time(_) => FieldKind::Time,
            FieldMut::Duration(_) => FieldKind::Duration,
            FieldMut::Message(_) => FieldKind::Message,
        }
    }
}

/// Encode one field element of the given kind.
pub fn write_field(w: &mut dyn Write, kind: FieldKind, value: FieldRef<'_>) -> Result<(), WireError> {
    match (kind, value) {
        (FieldKind::Bool, FieldRef::Bool(v)) => w.write_u8(v as u8)?,
        (FieldKind::Int8, FieldRef::Int8(v)) => w.write_i8(v)?,
        (FieldKind::UInt8, FieldRef::UInt8(v)) => w.write_u8(v)?,
        (FieldKind::Int16, FieldRef::Int16(v)) => w.write_i16::<LittleEndian>(v)?,
        (FieldKind::UInt16, FieldRef::UInt16(v)) => w.write_u16::<LittleEndian>(v)?,
        (FieldKind::Int32, FieldRef::Int32(v)) => w.write_i32::<LittleEndian>(v)?,
        (FieldKind::UInt32, FieldRef::UInt32(v)) => w.write_u32::<LittleEndian>(v)?,
        (FieldKind::Int64, FieldRef::Int64(v)) => w.write_i64::<LittleEndian>(v)?,
        (FieldKind::UInt64, FieldRef::UInt64(v)) => w.write_u64::<LittleEndian>(v)?,
        (FieldKind::Float32, FieldRef::Float32(v)) => w.write_f32::<LittleEndian>(v)?,
        (FieldKind::Float64, FieldRef::Float64(v)) => w.write_f64::<LittleEndian>(v)?,
        (FieldKind::String, FieldRef::String(s)) => {
            write_len(w, s.len())?;
            w.write_all(s.as_bytes())?;
        }
        (FieldKind::Time, FieldRef::Time(t)) => {
            w.write_u32::<LittleEndian>(t.sec)?;
            w.write_u32::<LittleEndian>(t.nsec)?;
        }
        (FieldKind::Duration, FieldRef::Duration(d)) => {
            w.write_u32::<LittleEndian>(d.sec)?;
            w.write_u32::<LittleEndian>(d.nsec)?;
        }
        (FieldKind::Message, FieldRef::Message(m)) => m.serialize(w)?,
        (expected, other) => {
            return Err(WireError::TypeMismatch {
                expected,
                found: other.kind().name(),
            })
        }
    }
    Ok(())
}

/// Decode one field element of the given kind into `out`.
pub fn read_field(r: &mut dyn Read, kind: FieldKind, out: FieldMut<'_>) -> Result<(), WireError> {
    let eof = |e| WireError::reading(e, kind);
    match (kind, out) {
        (FieldKind::Bool, FieldMut::Bool(v)) => *v = r.read_u8().map_err(eof)? != 0,
        (FieldKind::Int8, FieldMut::Int8(v)) => *v = r.read_i8().map_err(eof)?,
        (FieldKind::UInt8, FieldMut::UInt8(v)) => *v = r.read_u8().map_err(eof)?,
        (FieldKind::Int16, FieldMut::Int16(v)) => *v = r.read_i16::<LittleEndian>().map_err(eof)?,
        (FieldKind::UInt16, FieldMut::UInt16(v)) => *v = r.read_u16::<LittleEndian>().map_err(eof)?,
        (FieldKind::Int32, FieldMut::Int32(v)) => *v = r.read_i32::<LittleEndian>().map_err(eof)?,
        (FieldKind::UInt32, FieldMut::UInt32(v)) => *v = r.read_u32::<LittleEndian>().map_err(eof)?,
        (FieldKind::Int64, FieldMut::Int64(v)) => *v = r.read_i64::<LittleEndian>().map_err(eof)?,
        (FieldKind::UInt64, FieldMut::UInt64(v)) => *v = r.read_u64::<LittleEndian>().map_err(eof)?,
        (FieldKind::Float32, FieldMut::Float32(v)) => *v = r.read_f32::<LittleEndian>().map_err(eof)?,
        (FieldKind::Float64, FieldMut::Float64(v)) => *v = r.read_f64::<LittleEndian>().map_err(eof)?,
        (FieldKind::String, FieldMut::String(s)) => {
            let len = read_len(r)?;
            // Bounded by what the source actually holds, not by the claimed length.
            let mut buf = Vec::new();
            (&mut *r).take(len as u64).read_to_end(&mut buf)?;
            if buf.len() != len {
                return Err(WireError::Truncated { kind });
            }
            *s = String::from_utf8(buf)?;
        }
        (FieldKind::Time, FieldMut::Time(t)) => {
            t.sec = r.read_u32::<LittleEndian>().map_err(eof)?;
            t.nsec = r.read_u32::<LittleEndian>().map_err(eof)?;
        }
        (FieldKind::Duration, FieldMut::Duration(d)) => {
            d.sec = r.read_u32::<LittleEndian>().map_err(eof)?;
            d.nsec = r.read_u32::<LittleEndian>().map_err(eof)?;
        }
        (FieldKind::Message, FieldMut::Message(m)) => m.deserialize(r)?,
        (expected, other) => {
            return Err(WireError::TypeMismatch {
                expected,
                found: other.kind().name(),
            })
        }
    }
    Ok(())
}

/// Write a `u32` length or element count.
pub fn write_len(w: &mut dyn Write, len: usize) -> Result<(), WireError> {
    let n = u32::try_from(len).map_err(|_| WireError::LengthOverflow(len))?;
    w.write_u32::<LittleEndian>(n)?;
    Ok(())
}

/// Read a `u32` length or element count.
pub fn read_len(r: &mut dyn Read) -> Result<usize, WireError> {
    let n = r
        .read_u32::<LittleEndian>()
        .map_err(|e| WireError::reading(e, FieldKind::UInt32))?;
    Ok(n as usize)
}

/// Most elements of a type with an empty encoding one array may hold. Such elements
/// consume no input, so their count is the only thing bounding the work.
pub const MAX_EMPTY_ELEMENTS: usize = 1 << 16;

/// Reject a count of zero-byte elements above [`MAX_EMPTY_ELEMENTS`].
pub fn check_empty_elements(count: usize) -> Result<(), WireError> {
    if count > MAX_EMPTY_ELEMENTS {
        return Err(WireError::ElementLimit {
            count,
            limit: MAX_EMPTY_ELEMENTS,
        });
    }
    Ok(())
}

/// Reader that tallies the bytes pulled through it.
struct CountingReader<'a> {
    inner: &'a mut dyn Read,
    count: u64,
}

impl Read for CountingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

/// Write an element count followed by every element.
pub fn write_array<'a, I>(w: &mut dyn Write, kind: FieldKind, items: I) -> Result<(), WireError>
where
    I: IntoIterator<Item = FieldRef<'a>>,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    write_len(w, items.len())?;
    for item in items {
        write_field(w, kind, item)?;
    }
    Ok(())
}

/// Read a counted sequence into `out`, replacing its contents.
pub fn read_vec<T, F>(r: &mut dyn Read, kind: FieldKind, out: &mut Vec<T>, mut as_mut: F) -> Result<(), WireError>
where
    T: Default,
    F: for<'x> FnMut(&'x mut T) -> FieldMut<'x>,
{
    let n = read_len(r)?;
    out.clear();
    if n == 0 {
        return Ok(());
    }
    // An element type either always reads bytes or never does; the first one tells.
    let mut first = T::default();
    let mut counted = CountingReader { inner: &mut *r, count: 0 };
    read_field(&mut counted, kind, as_mut(&mut first))?;
    if counted.count == 0 {
        check_empty_elements(n)?;
    }
    out.push(first);
    for _ in 1..n {
        let mut item = T::default();
        read_field(r, kind, as_mut(&mut item))?;
        out.push(item);
    }
    Ok(())
}

/// Read a counted sequence into a fixed-size slot; the count must equal its length.
pub fn read_array<T, F>(r: &mut dyn Read, kind: FieldKind, out: &mut [T], mut as_mut: F) -> Result<(), WireError>
where
    F: for<'x> FnMut(&'x mut T) -> FieldMut<'x>,
{
    let n = read_len(r)?;
    if n != out.len() {
        return Err(WireError::ArrayLength {
            expected: out.len(),
            found: n,
        });
    }
    for item in out.iter_mut() {
        read_field(r, kind, as_mut(item))?;
    }
    Ok(())
}

/// A value that moves itself through the wire format.
pub trait Message: Send + fmt::Debug {
    fn message_type(&self) -> &'static MessageType;
    fn serialize(&self, w: &mut dyn Write) -> Result<(), WireError>;
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), WireError>;
}

/// Fingerprint accepted by either side to skip shape checks.
pub const ANY_MD5SUM: &str = "*";

/// Type descriptor exchanged when two endpoints negotiate a connection.
pub struct MessageType {
    name: &'static str,
    text: &'static str,
    md5sum: &'static str,
    factory: fn() -> Box<dyn Message>,
}

impl MessageType {
    pub const fn new(
        name: &'static str,
        text: &'static str,
        md5sum: &'static str,
        factory: fn() -> Box<dyn Message>,
    ) -> Self {
        MessageType { name, text, md5sum, factory }
    }

    /// `package/Name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Full original definition text.
    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn md5sum(&self) -> &'static str {
        self.md5sum
    }

    /// A fresh zero-valued instance.
    pub fn new_message(&self) -> Box<dyn Message> {
        (self.factory)()
    }

    pub fn is_compatible(&self, md5sum: &str) -> bool {
        md5sum == self.md5sum || md5sum == ANY_MD5SUM || self.md5sum == ANY_MD5SUM
    }
}

impl fmt::Debug for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageType")
            .field("name", &self.name)
            .field("md5sum", &self.md5sum)
            .finish()
    }
}

/// A request/response pair.
pub trait Service {
    type Request: Message + Default;
    type Response: Message + Default;
    const SERVICE_TYPE: &'static ServiceType;
}

/// Service descriptor. Its fingerprint is the request's fingerprint.
pub struct ServiceType {
    name: &'static str,
    text: &'static str,
    md5sum: &'static str,
    request: &'static MessageType,
    response: &'static MessageType,
}

impl ServiceType {
    pub const fn new(
        name: &'static str,
        text: &'static str,
        md5sum: &'static str,
        request: &'static MessageType,
        response: &'static MessageType,
    ) -> Self {
        ServiceType { name, text, md5sum, request, response }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn md5sum(&self) -> &'static str {
        self.md5sum
    }

    pub fn request(&self) -> &'static MessageType {
        self.request
    }

    pub fn response(&self) -> &'static MessageType {
        self.response
    }
}

impl fmt::Debug for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceType")
            .field("name", &self.name)
            .field("md5sum", &self.md5sum)
            .finish()
    }
}

/// Serialize a whole message into a fresh buffer.
pub fn to_bytes(m: &dyn Message) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::new();
    m.serialize(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn string_is_length_prefixed() {
        let mut out = Vec::new();
        write_field(&mut out, FieldKind::String, FieldRef::String("hi")).unwrap();
        assert_eq!(out, [0x02, 0x00, 0x00, 0x00, 0x68, 0x69]);
    }

    #[test]
    fn time_is_sec_then_nsec() {
        let mut out = Vec::new();
        write_field(&mut out, FieldKind::Time, FieldRef::Time(Time::new(0x89ABCDEF, 0x01234567))).unwrap();
        assert_eq!(out, [0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01]);
    }

    #[test]
    fn duration_converts_to_and_from_std() {
        let d = Duration::new(3, 500);
        assert_eq!(d.to_std(), std::time::Duration::new(3, 500));
        assert_eq!(Duration::from(std::time::Duration::from_millis(1_500)), Duration::new(1, 500_000_000));
        let huge = std::time::Duration::from_secs(u64::from(u32::MAX) + 10);
        assert_eq!(Duration::from(huge).sec, u32::MAX);
    }

    #[test]
    fn mismatched_tag_is_rejected() {
        let mut out = Vec::new();
        let err = write_field(&mut out, FieldKind::Int32, FieldRef::String("x")).unwrap_err();
        assert!(matches!(err, WireError::TypeMismatch { expected: FieldKind::Int32, found: "string" }));
        assert!(out.is_empty());

        let mut v = 0u8;
        let err = read_field(&mut Cursor::new(vec![1u8]), FieldKind::Bool, FieldMut::UInt8(&mut v)).unwrap_err();
        assert!(matches!(err, WireError::TypeMismatch { expected: FieldKind::Bool, .. }));
    }

    #[test]
    fn short_string_body_is_truncation() {
        let bytes = [0x05, 0x00, 0x00, 0x00, b'a', b'b'];
        let mut s = String::new();
        let err = read_field(&mut Cursor::new(&bytes[..]), FieldKind::String, FieldMut::String(&mut s)).unwrap_err();
        assert!(matches!(err, WireError::Truncated { kind: FieldKind::String }));
    }

    #[test]
    fn short_scalar_is_truncation() {
        let mut v = 0i64;
        let err = read_field(&mut Cursor::new(vec![0u8; 3]), FieldKind::Int64, FieldMut::Int64(&mut v)).unwrap_err();
        assert!(matches!(err, WireError::Truncated { kind: FieldKind::Int64 }));
    }

    #[test]
    fn fixed_array_count_must_match() {
        let bytes: [u8; 6] = [0x01, 0x00, 0x00, 0x00, 0x07, 0x00];
        let mut out = [0u16; 2];
        let err = read_array(&mut Cursor::new(&bytes[..]), FieldKind::UInt16, &mut out, |v| FieldMut::UInt16(v))
            .unwrap_err();
        assert!(matches!(err, WireError::ArrayLength { expected: 2, found: 1 }));
    }

    #[derive(Debug, Default)]
    struct Nothing;

    impl Message for Nothing {
        fn message_type(&self) -> &'static MessageType {
            fn new_nothing() -> Box<dyn Message> {
                Box::new(Nothing)
            }
            const T: &MessageType = &MessageType::new("p/Nothing", "", "d41d8cd98f00b204e9800998ecf8427e", new_nothing);
            T
        }
        fn serialize(&self, _w: &mut dyn Write) -> Result<(), WireError> {
            Ok(())
        }
        fn deserialize(&mut self, _r: &mut dyn Read) -> Result<(), WireError> {
            Ok(())
        }
    }

    #[test]
    fn empty_elements_are_bounded() {
        let mut out: Vec<Nothing> = Vec::new();
        let bytes = 0xFFFF_FFFFu32.to_le_bytes();
        let err = read_vec(&mut Cursor::new(&bytes[..]), FieldKind::Message, &mut out, |m| FieldMut::Message(m))
            .unwrap_err();
        assert!(matches!(err, WireError::ElementLimit { count: 0xFFFF_FFFF, limit: MAX_EMPTY_ELEMENTS }));

        let bytes = 3u32.to_le_bytes();
        read_vec(&mut Cursor::new(&bytes[..]), FieldKind::Message, &mut out, |m| FieldMut::Message(m)).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn sized_elements_stop_at_end_of_input() {
        let mut out: Vec<u32> = Vec::new();
        let bytes: [u8; 8] = [0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00];
        let err = read_vec(&mut Cursor::new(&bytes[..]), FieldKind::UInt32, &mut out, |v| FieldMut::UInt32(v))
            .unwrap_err();
        assert!(matches!(err, WireError::Truncated { kind: FieldKind::UInt32 }));
    }

    #[test]
    fn field_context_nests() {
        let err = WireError::Truncated { kind: FieldKind::UInt32 }.in_field("Seq").in_field("Header");
        assert_eq!(err.to_string(), "field Header: field Seq: truncated input while reading uint32");
        assert!(matches!(err.root(), WireError::Truncated { .. }));
    }

    #[test]
    fn wildcard_md5sum_is_compatible() {
        fn never() -> Box<dyn Message> {
            unreachable!()
        }
        let t = MessageType::new("p/T", "", "abc", never);
        assert!(t.is_compatible("abc"));
        assert!(t.is_compatible(ANY_MD5SUM));
        assert!(!t.is_compatible("abd"));
    }
}
