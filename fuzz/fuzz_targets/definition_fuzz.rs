//! Definition fuzz target: arbitrary bytes through msg/srv parsing and emission.
//! Neither step may panic; malformed input must come back as an error.
//! Build with: cargo fuzz run definition_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let compiler = rosgen::Compiler::default();
    let _ = compiler.generate(rosgen::DefinitionKind::Msg, "fuzz", "Fuzz", "Fuzz.msg", data);
    let _ = compiler.parse_srv("fuzz", "Fuzz", data);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run definition_fuzz");
}
