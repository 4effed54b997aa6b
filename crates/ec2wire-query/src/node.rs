//! Structured request arguments.

use std::borrow::Cow;

/// A scalar parameter value with a fixed textual encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Sent verbatim.
    Text(String),
    /// Sent in decimal notation.
    Integer(i64),
    /// Sent as `true` or `false`.
    Boolean(bool),
}

impl ParamValue {
    /// The wire form of this value.
    #[must_use]
    pub fn encode(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Integer(n) => Cow::Owned(n.to_string()),
            Self::Boolean(true) => Cow::Borrowed("true"),
            Self::Boolean(false) => Cow::Borrowed("false"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u16> for ParamValue {
    fn from(n: u16) -> Self {
        Self::Integer(i64::from(n))
    }
}

/// Numbering scheme of a list's indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// `Name.0`, `Name.1`, ... used by structured specifications.
    #[default]
    Zero,
    /// `Name.1`, `Name.2`, ... used by EC2 id lists and disk containers.
    One,
}

impl IndexBase {
    /// Wire index of the item at `position`.
    #[must_use]
    pub fn index(self, position: usize) -> usize {
        match self {
            Self::Zero => position,
            Self::One => position + 1,
        }
    }
}

/// A node of a request argument tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamNode {
    /// A single value.
    Scalar(ParamValue),
    /// Named fields, flattened as `Path.Field`.
    Object(ParamObject),
    /// Uniform items, flattened as `Path.<index>`.
    List(ParamList),
}

impl ParamNode {
    /// The value of a scalar node.
    #[must_use]
    pub fn as_value(&self) -> Option<&ParamValue> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// The fields of an object node.
    #[must_use]
    pub fn as_object(&self) -> Option<&ParamObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<ParamValue> for ParamNode {
    fn from(v: ParamValue) -> Self {
        Self::Scalar(v)
    }
}

impl From<ParamObject> for ParamNode {
    fn from(o: ParamObject) -> Self {
        Self::Object(o)
    }
}

impl From<ParamList> for ParamNode {
    fn from(l: ParamList) -> Self {
        Self::List(l)
    }
}

/// Ordered named fields.
///
/// Builder methods skip absent values, so an unset field never reaches the
/// wire, not even as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamObject {
    fields: Vec<(String, ParamNode)>,
}

impl ParamObject {
    /// Create an object with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar field.
    #[must_use]
    pub fn value(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.push(name, ParamNode::Scalar(value.into()));
        self
    }

    /// Add a scalar field if `value` is present.
    #[must_use]
    pub fn optional<V: Into<ParamValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.value(name, v),
            None => self,
        }
    }

    /// Add a nested object if it is present and has at least one field.
    #[must_use]
    pub fn object(mut self, name: &str, object: Option<ParamObject>) -> Self {
        if let Some(object) = object.filter(|o| !o.is_empty()) {
            self.push(name, ParamNode::Object(object));
        }
        self
    }

    /// Add a list field if it has at least one item.
    #[must_use]
    pub fn list(mut self, name: &str, list: ParamList) -> Self {
        if !list.is_empty() {
            self.push(name, ParamNode::List(list));
        }
        self
    }

    /// Append a field as is.
    pub fn push(&mut self, name: &str, node: ParamNode) {
        self.fields.push((name.to_owned(), node));
    }

    /// The node stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamNode> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, node)| node)
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &ParamNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }
}

/// Ordered items of one logical type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    items: Vec<ParamNode>,
    base: IndexBase,
}

impl ParamList {
    /// Create an empty list with the given numbering.
    #[must_use]
    pub fn new(base: IndexBase) -> Self {
        Self {
            items: Vec::new(),
            base,
        }
    }

    /// Build a list of scalars, e.g. security group ids or task ids.
    #[must_use]
    pub fn of_values<I, V>(base: IndexBase, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        Self {
            items: values
                .into_iter()
                .map(|v| ParamNode::Scalar(v.into()))
                .collect(),
            base,
        }
    }

    /// Build a list of objects.
    #[must_use]
    pub fn of_objects<I>(base: IndexBase, objects: I) -> Self
    where
        I: IntoIterator<Item = ParamObject>,
    {
        Self {
            items: objects.into_iter().map(ParamNode::Object).collect(),
            base,
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Into<ParamNode>) {
        self.items.push(item.into());
    }

    /// Numbering scheme of this list.
    #[must_use]
    pub fn base(&self) -> IndexBase {
        self.base
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in order.
    #[must_use]
    pub fn items(&self) -> &[ParamNode] {
        &self.items
    }
}
