//! House number description compiling and matching
//!
//! This module compiles street segment descriptions like
//! "нечетные 1-21, четные 2-28" and checks house numbers against them.

pub mod cache;
pub mod compiler;
pub mod matcher;
mod parser;
mod rule;

#[cfg(test)]
mod property_tests;

pub use cache::*;
pub use matcher::HouseNumber;
pub use parser::*;
pub use rule::*;
