//! Ordered array container.

use crate::error::{Result, ValueError};
use crate::value::Value;
use std::iter::FusedIterator;
use std::slice;

/// A JSON array: values in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Array {
    elements: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Append `value` to the end of the array.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.elements.push(value.into());
        self
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        let len = self.elements.len();
        self.elements
            .get(index)
            .ok_or(ValueError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(ValueError::IndexOutOfRange { index, len })
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        let len = self.elements.len();
        if index >= len {
            return Err(ValueError::IndexOutOfRange { index, len });
        }
        Ok(self.elements.remove(index))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> Elements<'_> {
        Elements {
            inner: self.elements.iter(),
        }
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only iterator over the elements of an [`Array`].
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    inner: slice::Iter<'a, Value>,
}

impl Elements<'_> {
    /// Elements cannot be removed through the iterator; always fails with
    /// [`ValueError::UnsupportedOperation`]. Use [`Array::remove`] instead.
    pub fn remove(&mut self) -> Result<()> {
        Err(ValueError::UnsupportedOperation(
            "elements cannot be removed through an iterator",
        ))
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Elements<'_> {}
impl FusedIterator for Elements<'_> {}
