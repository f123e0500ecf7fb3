//! Wire fuzz target: arbitrary payloads decoded as bundled std_msgs types, both
//! through the generated code and the data-driven codec. Truncated or oversized
//! counts must surface as errors, never as panics or runaway allocation.

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use rosgen::msgs::std_msgs::MESSAGE_TYPES;
    let registry = match rosgen::SpecRegistry::with_std_msgs() {
        Ok(r) => r,
        Err(_) => return,
    };
    let codec = rosgen::Codec::new(registry);
    for t in MESSAGE_TYPES {
        let mut msg = t.new_message();
        let _ = msg.deserialize(&mut std::io::Cursor::new(data));
        let _ = codec.decode_message(t.name(), data);
        let _ = rosgen::message_extent(codec.registry(), t.name(), data);
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run wire_fuzz");
}
