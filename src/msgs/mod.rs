//! Message types bundled with the runtime, produced by this crate's own generator.

pub mod std_msgs;
