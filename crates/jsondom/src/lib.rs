//! An owned JSON document tree.
//!
//! [`parse`] turns UTF-8 text into a [`Value`] tree, the mutation API on
//! [`Value`], [`Array`], and [`Object`] edits trees in place, and
//! [`to_string`] / [`to_vec`] render the tree back as canonical JSON text.
//!
//! The parser is strict: no comments, no trailing commas, no extensions of
//! any kind. Rejected input is reported as one of the [`ParseError`] kinds
//! and never leaves a partial tree behind.
//!
//! ```
//! use jsondom::{Value, parse, to_string};
//!
//! let mut doc = parse(r#"{"name":"door","open":false}"#)?;
//! if let Some(object) = doc.as_object_mut() {
//!     *object.entry("open") = Value::Boolean(true);
//! }
//! assert_eq!(to_string(&doc), r#"{"name":"door","open":true}"#);
//! # Ok::<(), jsondom::ParseError>(())
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod parser;
#[cfg(any(test, feature = "serde"))]
mod serde;
mod stringify;
mod value;

#[cfg(test)]
mod tests;

pub use parser::{ParseError, parse};
pub use stringify::{to_string, to_vec};
pub use value::{Array, Member, Object, Value};
