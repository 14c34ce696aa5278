//! Street Houses - house number membership for street segment descriptions
//!
//! Postal registries describe which houses belong to a street segment in free
//! text: "нечетные 1-21, четные 2-28", "четные 42+", "7/1, 11, 15а". This crate
//! compiles such a description once into parity-scoped rules and answers
//! whether a given house number belongs to the segment.
//!
//! ```
//! use street_houses::HousesParser;
//!
//! let parser = HousesParser::new("нечетные 11+, четные 42+").unwrap();
//! assert!(parser.is_included("17/1").unwrap());
//! assert!(!parser.is_included("18").unwrap());
//! ```
//!
//! Python bindings are available with the `python` feature.

pub mod error;
pub mod houses;

#[cfg(feature = "python")]
mod python;

pub use error::{HousesError, Result};
pub use houses::{check_house, HouseNumber, HousesParser, Parity, Rule, RuleSet};
