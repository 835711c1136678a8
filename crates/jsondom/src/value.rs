//! JSON tree types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with the [`Object`] ordered multimap and its [`Member`]
//! entries.

use alloc::{string::String, vec::Vec};
use core::{fmt, slice};

/// An ordered sequence of owned values.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// Exactly one representation is active at a time; the enum makes a payload
/// without its tag unconstructible. A fresh value is [`Null`], and assigning
/// a new value (directly or through one of the `From` conversions) drops the
/// previous payload first, so replacement is safe in any state.
///
/// # Examples
///
/// ```
/// use jsondom::{Object, Value};
///
/// let mut object = Object::new();
/// object.push("key", Value::String("value".into()));
/// let v = Value::Object(object);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [`Null`]: Value::Null
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The payload of a [`Boolean`](Value::Boolean), if that is the active
    /// representation.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// The payload of a [`Number`](Value::Number), if that is the active
    /// representation.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The payload of a [`String`](Value::String), if that is the active
    /// representation.
    ///
    /// The returned slice carries its exact byte length and may contain
    /// embedded NUL.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// The elements of an [`Array`](Value::Array), if that is the active
    /// representation.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Mutable access to the elements of an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// The members of an [`Object`](Value::Object), if that is the active
    /// representation.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutable access to the members of an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Moves the value out, leaving [`Null`](Value::Null) behind.
    ///
    /// This is the ownership-transferring move: the payload changes hands
    /// without a deep copy and the source is reset to its initial state.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let mut source = Value::String("payload".into());
    /// let moved = source.take();
    /// assert!(source.is_null());
    /// assert_eq!(moved.as_str(), Some("payload"));
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }
}

/// Writes the canonical serialization, identical to [`to_string`].
///
/// [`to_string`]: crate::to_string
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::to_string(self))
    }
}

/// One `key: value` pair inside an [`Object`].
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// Owned key; compared byte-for-byte, never normalized.
    pub key: String,
    /// The member's value.
    pub value: Value,
}

impl Member {
    /// Creates a member from a key and a value.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self { key: key.into(), value }
    }
}

/// An ordered multimap of [`Member`]s.
///
/// Insertion order is preserved and duplicate keys are permitted; key lookup
/// is an ordered linear scan returning the first exact match. Equality
/// ignores member order (see [`PartialEq`](#impl-PartialEq-for-Object)).
#[derive(Clone, Debug, Default)]
pub struct Object {
    members: Vec<Member>,
}

impl Object {
    /// Creates an empty object without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Creates an empty object with room for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { members: Vec::with_capacity(capacity) }
    }

    /// Number of members, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members the object can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    /// Grows the backing storage for at least `additional` more members.
    pub fn reserve(&mut self, additional: usize) {
        self.members.reserve(additional);
    }

    /// Shrinks the backing storage to the current member count.
    pub fn shrink_to_fit(&mut self) {
        self.members.shrink_to_fit();
    }

    /// Removes all members, keeping the allocation.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// The members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Index of the first member whose key equals `key` byte-for-byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{Object, Value};
    ///
    /// let mut object = Object::new();
    /// object.push("k", Value::Number(1.0));
    /// object.push("k", Value::Number(2.0));
    /// assert_eq!(object.position("k"), Some(0));
    /// assert_eq!(object.position("missing"), None);
    /// ```
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.members.iter().position(|member| member.key == key)
    }

    /// The value of the first member with this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members
            .iter()
            .find(|member| member.key == key)
            .map(|member| &member.value)
    }

    /// Mutable access to the value of the first member with this key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.members
            .iter_mut()
            .find(|member| member.key == key)
            .map(|member| &mut member.value)
    }

    /// The value slot for `key`, appending a [`Null`](Value::Null) member
    /// if no member with this key exists yet.
    ///
    /// An existing first-match slot is returned unchanged; callers replace
    /// it by assigning through the reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{Object, Value};
    ///
    /// let mut object = Object::new();
    /// *object.entry("answer") = Value::Number(42.0);
    /// assert_eq!(object.get("answer"), Some(&Value::Number(42.0)));
    /// ```
    pub fn entry(&mut self, key: &str) -> &mut Value {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.members.push(Member::new(key, Value::Null));
                self.members.len() - 1
            }
        };
        &mut self.members[index].value
    }

    /// Appends a member, regardless of whether the key is already present.
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.members.push(Member::new(key, value));
    }

    /// Removes and returns the member at `index`, shifting later members
    /// down to close the gap.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Member {
        self.members.remove(index)
    }

    /// Iterates over the members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Iterates over the members in insertion order, mutably.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Member> {
        self.members.iter_mut()
    }
}

/// Every member of `left` has an equal `(key, value)` counterpart in
/// `right`, first match by key-and-value.
fn covered_by(left: &Object, right: &Object) -> bool {
    left.members.iter().all(|member| {
        right
            .members
            .iter()
            .any(|candidate| candidate.key == member.key && candidate.value == member.value)
    })
}

/// Unordered set-of-pairs equality: member counts match and the member
/// multisets cover each other. `{"a":1,"b":2}` equals `{"b":2,"a":1}`.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && covered_by(self, other)
            && covered_by(other, self)
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = &'a mut Member;
    type IntoIter = slice::IterMut<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter_mut()
    }
}

impl IntoIterator for Object {
    type Item = Member;
    type IntoIter = alloc::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            members: iter
                .into_iter()
                .map(|(key, value)| Member::new(key, value))
                .collect(),
        }
    }
}
