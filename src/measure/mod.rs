pub mod accumulator;
pub mod format;
