pub mod disk;
pub mod error;
pub mod memory;
pub mod sample;
