// crates/shared-kernel/src/value_objects/mod.rs
pub mod timestamp;

pub use timestamp::Timestamp;
