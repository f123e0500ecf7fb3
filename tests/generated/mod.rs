//! Generator output for `tests/data/` (package `example_msgs`), checked in so the
//! emitted-code contract is compiled and exercised by the tests.

#![allow(dead_code, unused_imports)]

mod add_two_ints;
mod all_field_types;
mod hello;
mod status;

pub use add_two_ints::{AddTwoInts, AddTwoIntsRequest, AddTwoIntsResponse};
pub use all_field_types::AllFieldTypes;
pub use hello::Hello;
pub use status::Status;
