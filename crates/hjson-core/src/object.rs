//! Ordered, duplicate-tolerant object container.
//!
//! An [`Object`] stores its members as a sequence of `(name, value)` pairs in
//! insertion order. That sequence is the source of truth for iteration,
//! equality and hashing. A side index maps each name to the position of its
//! last occurrence so that lookups do not scan.
//!
//! # Duplicate names
//!
//! - [`Object::add`] always appends, even when the name is already present.
//! - [`Object::get`] resolves to the **last** member with that name.
//! - [`Object::set`] overwrites the member `get` resolves to, in place, or
//!   appends when the name is absent.
//! - [`Object::remove`] deletes the member `get` resolves to. An earlier
//!   member with the same name, if any, becomes the one `get` resolves to.
//!
//! Earlier duplicates stay visible through [`Object::iter`] and
//! [`Object::names`], so a document with repeated keys keeps them all:
//!
//! ```rust
//! use hjson_core::{Object, Value};
//!
//! let mut obj = Object::new();
//! obj.add("x", true).add("x", "y");
//!
//! assert_eq!(obj.len(), 2);
//! assert_eq!(obj.get("x"), Some(&Value::from("y")));
//! let names: Vec<&str> = obj.names().iter().collect();
//! assert_eq!(names, ["x", "x"]);
//! ```

use crate::error::{Result, ValueError};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FusedIterator, Map};
use std::slice;

/// A JSON object: `(name, value)` members in document order.
#[derive(Clone, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
    /// Name -> position of its last occurrence in `entries`.
    index: HashMap<String, usize>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append a member without looking for an existing one of the same name.
    ///
    /// This is the construction path for parsers: it never scans and keeps
    /// duplicate names in source order.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value.into()));
        self
    }

    /// Like [`Object::add`], for callers whose name or value slot may be empty.
    ///
    /// Returns [`ValueError::NullArgument`] and leaves the object untouched if
    /// either is `None`.
    pub fn try_add(&mut self, name: Option<&str>, value: Option<Value>) -> Result<&mut Self> {
        let name = name.ok_or(ValueError::NullArgument("name"))?;
        let value = value.ok_or(ValueError::NullArgument("value"))?;
        Ok(self.add(name, value))
    }

    /// Replace the value of the member [`Object::get`] resolves to, keeping its
    /// position; append a new member if the name is absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        match self.index.get(&name).copied() {
            Some(pos) => self.entries[pos].1 = value.into(),
            None => {
                self.add(name, value);
            }
        }
        self
    }

    /// Value of the last member named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let pos = self.index.get(name).copied()?;
        Some(&mut self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove the member [`Object::get`] resolves to and return its value.
    /// Does nothing if no member has that name.
    ///
    /// Linear in the number of members: later members shift down and their
    /// index slots are renumbered.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let pos = self.index.remove(name)?;
        let (_, value) = self.entries.remove(pos);

        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        // Later duplicates cannot exist, so the new last occurrence is before `pos`.
        if let Some(prev) = self.entries[..pos].iter().rposition(|(n, _)| n == name) {
            self.index.insert(name.to_string(), prev);
        }

        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Member names in document order, duplicates included.
    pub fn names(&self) -> Names<'_> {
        Names {
            entries: &self.entries,
        }
    }

    /// Members in document order, duplicates included.
    pub fn iter(&self) -> Members<'_> {
        Members {
            inner: self.entries.iter(),
        }
    }

    pub fn get_int(&self, name: &str, default: i32) -> Result<i32> {
        self.get(name).map_or(Ok(default), Value::as_int)
    }

    pub fn get_long(&self, name: &str, default: i64) -> Result<i64> {
        self.get(name).map_or(Ok(default), Value::as_long)
    }

    pub fn get_float(&self, name: &str, default: f32) -> Result<f32> {
        self.get(name).map_or(Ok(default), Value::as_float)
    }

    pub fn get_double(&self, name: &str, default: f64) -> Result<f64> {
        self.get(name).map_or(Ok(default), Value::as_double)
    }

    pub fn get_boolean(&self, name: &str, default: bool) -> Result<bool> {
        self.get(name).map_or(Ok(default), Value::as_boolean)
    }

    pub fn get_string<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str> {
        self.get(name).map_or(Ok(default), Value::as_str)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, v)| (n, v)))
            .finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Object::new();
        obj.extend(iter);
        obj
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = Member<'a>;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One `(name, value)` pair, produced while iterating an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member<'a> {
    name: &'a str,
    value: &'a Value,
}

impl<'a> Member<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }
}

/// Read-only iterator over the members of an [`Object`].
#[derive(Debug, Clone)]
pub struct Members<'a> {
    inner: slice::Iter<'a, (String, Value)>,
}

impl Members<'_> {
    /// Members cannot be removed through the iterator; always fails with
    /// [`ValueError::UnsupportedOperation`]. Use [`Object::remove`] instead.
    pub fn remove(&mut self) -> Result<()> {
        Err(ValueError::UnsupportedOperation(
            "members cannot be removed through an iterator",
        ))
    }
}

impl<'a> Iterator for Members<'a> {
    type Item = Member<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| Member { name, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, value)| Member { name, value })
    }
}

impl ExactSizeIterator for Members<'_> {}
impl FusedIterator for Members<'_> {}

/// Read-only view of an [`Object`]'s member names in document order.
///
/// The view borrows the object, so it always reflects the object's current
/// contents and offers no way to change them.
#[derive(Debug, Clone, Copy)]
pub struct Names<'a> {
    entries: &'a [(String, Value)],
}

impl<'a> Names<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a str> {
        self.entries.get(position).map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> NamesIter<'a> {
        (*self).into_iter()
    }
}

/// Iterator over [`Names`].
pub type NamesIter<'a> = Map<slice::Iter<'a, (String, Value)>, fn(&'a (String, Value)) -> &'a str>;

impl<'a> IntoIterator for Names<'a> {
    type Item = &'a str;
    type IntoIter = NamesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let name_of: fn(&'a (String, Value)) -> &'a str = |(name, _)| name.as_str();
        self.entries.iter().map(name_of)
    }
}
