//! # primitives-core
//!
//! Small, pure building blocks for working with script-style primitive values:
//! base conversion over {2, 8, 10, 16}, numeric literal evaluation and display,
//! and `typeof`-style classification of dynamic values.
//!
//! ## Quick start
//!
//! ```rust
//! use primitives_core::{classify, format, parse, Value};
//!
//! assert_eq!(format(1024, 2).unwrap(), "10000000000");
//! assert_eq!(parse("100101", 2).unwrap(), 37);
//!
//! assert_eq!(classify(&Value::Null).as_str(), "object");
//! assert_eq!(classify(&Value::from("x")).as_str(), "string");
//! ```
//!
//! ## Modules
//!
//! - [`radix`] — the `Radix` type (2, 8, 10, 16)
//! - [`formatter`] — integer → digits (`format`) and lenient digits → integer (`parse`)
//! - [`literal`] — numeric literal source text → `f64`, and console-style number display
//! - [`value`] — the `Value` tagged union
//! - [`classify`] — `Value` → `TypeTag`
//! - [`error`] — error type shared by all of the above

pub mod classify;
pub mod error;
pub mod formatter;
pub mod literal;
pub mod radix;
pub mod value;

pub use classify::{classify, classify_precise, TypeTag};
pub use error::PrimitiveError;
pub use formatter::{format, parse};
pub use literal::{format_number, parse_literal, Literal, LiteralKind};
pub use radix::Radix;
pub use value::{Callable, Value};
