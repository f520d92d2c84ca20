//! # hjson-core
//!
//! In-memory document model for JSON and Hjson data: a closed [`Value`] sum
//! type and an [`Object`] container that keeps members in insertion order and
//! tolerates duplicate names.
//!
//! Parsers build documents bottom-up with [`Object::add`] and [`Array::add`];
//! writers walk the finished tree read-only through [`Object::iter`] and
//! [`Array::iter`]. Neither parsing nor writing lives here, apart from the
//! serde bridge in [`interop`].
//!
//! ## Quick start
//!
//! ```rust
//! use hjson_core::{Object, Value};
//!
//! let mut obj = Object::new();
//! obj.add("a", 1).add("a", 2).add("b", "text");
//!
//! // Lookups see the last "a"; iteration sees both.
//! assert_eq!(obj.get_int("a", 0).unwrap(), 2);
//! let pairs: Vec<(&str, &Value)> = obj.iter().map(|m| (m.name(), m.value())).collect();
//! assert_eq!(pairs[0], ("a", &Value::from(1)));
//! assert_eq!(pairs[1], ("a", &Value::from(2)));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Value`, `Kind`, the `NULL`/`TRUE`/`FALSE` constants
//! - [`number`] — numeric literal payload and narrowing
//! - [`object`] — ordered, duplicate-tolerant `Object`
//! - [`array`] — ordered `Array`
//! - [`interop`] — serde `Serialize`/`Deserialize` impls
//! - [`error`] — `ValueError` taxonomy
//!
//! The model is not synchronized. Callers sharing a document across threads
//! while mutating it must serialize access themselves.

pub mod array;
pub mod error;
pub mod interop;
pub mod number;
pub mod object;
pub mod value;

pub use array::{Array, Elements};
pub use error::{Result, ValueError};
pub use number::Number;
pub use object::{Member, Members, Names, NamesIter, Object};
pub use value::{Kind, Value, FALSE, NULL, TRUE};
