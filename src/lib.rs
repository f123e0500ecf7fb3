//! # rosgen: message definition compiler and wire runtime
//!
//! Reads ROS-style `.msg` / `.srv` definitions with a PEST grammar, resolves their
//! types, and emits Rust source for them. Emitted types serialize through the
//! little-endian runtime in [`wire`]; the same definitions can also be interpreted
//! directly with [`codec::Codec`].
//!
//! ## Definition syntax
//!
//! ```text
//! # comments run to end of line
//! uint8 PENDING = 0            # constant
//! Header header                # std_msgs/Header
//! string name
//! float64[] values             # dynamic array
//! uint8[16] uuid               # fixed array
//! geometry_msgs/Pose pose      # rust:package=crate::geometry
//! ```
//!
//! A service is a request and a response separated by a `---` line.
//!
//! ## Field types
//!
//! - `bool`, `int8`..`int64`, `uint8`..`uint64`, `float32`, `float64`
//! - `byte` (= `int8`), `char` (= `uint8`)
//! - `string`, `time`, `duration`
//! - `Name` (same package) or `pkg/Name`, and `T[]` / `T[N]` of any of these
//!
//! ## Usage
//!
//! ```ignore
//! use rosgen::{CompileJob, Compiler, DefinitionKind, GenConfig};
//!
//! let compiler = Compiler::new(GenConfig::default());
//! let out = compiler.compile(&CompileJob::new(DefinitionKind::Msg, "Hello.msg"))?;
//! ```
//!
//! See `tests/` for generated code exercised end to end.

pub mod codec;
pub mod compiler;
pub mod config;
pub mod emit;
pub mod msgs;
pub mod parser;
pub mod resolve;
pub mod spec;
pub mod value;
pub mod walk;
pub mod wire;

pub use codec::{Codec, CodecError, SpecRegistry};
pub use compiler::{CompileJob, CompileOutput, Compiler, DefinitionKind, GenError};
pub use config::{ConfigError, GenConfig};
pub use emit::{EmitError, Emitter};
pub use parser::{fingerprint, parse_directives, parse_msg_spec, parse_srv_spec, ParseError};
pub use resolve::{BuiltinTable, Resolver};
pub use spec::{ConstantSpec, FieldSpec, MsgSpec, SrvSpec, TypeClass};
pub use value::Value;
pub use walk::{message_extent, BinaryWalker};
pub use wire::{Duration, FieldKind, Message, MessageType, Service, ServiceType, Time, WireError};
