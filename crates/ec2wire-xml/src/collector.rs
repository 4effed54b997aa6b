//! List accumulation and pass-through storage.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::Serialize;
use tracing::debug;

use crate::delegate::DecodingDelegate;
use crate::error::DecodeResult;
use crate::event::Attributes;
use crate::value::parse_bool;

/// Element name that marks one member of a repeated block.
pub const ITEM_MARKER: &str = "item";

/// Elements an entity does not recognize, kept verbatim by name.
///
/// The repetition marker is structural and never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnknownFields(BTreeMap<String, String>);

impl UnknownFields {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text of an unrecognized element. A later element with the
    /// same name replaces the earlier value.
    pub fn record(&mut self, name: &str, text: &str) {
        if name == ITEM_MARKER {
            return;
        }
        debug!(element = %name, "passing through unrecognized element");
        self.0.insert(name.to_owned(), text.to_owned());
    }

    /// Text recorded for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether `name` was recorded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of recorded elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, text)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An ordered list of entities that is itself a decoding delegate.
///
/// Each opening of the marker element appends a fresh `T` and hands it the
/// element's subtree. Any other element is ignored by the collector, so text
/// directly inside the list wrapper is dropped. Order is document order and
/// duplicates are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collector<T> {
    items: Vec<T>,
    #[serde(skip)]
    marker: &'static str,
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::with_marker(ITEM_MARKER)
    }
}

impl<T> Collector<T> {
    /// Create an empty collector for `<item>` members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collector for a different member element name.
    #[must_use]
    pub fn with_marker(marker: &'static str) -> Self {
        Self {
            items: Vec::new(),
            marker,
        }
    }

    /// The member element name.
    #[must_use]
    pub fn marker(&self) -> &'static str {
        self.marker
    }

    /// Append an entity.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Drop every entity, keeping the marker.
    ///
    /// Owners call this when the list wrapper opens, so a repeated wrapper
    /// replaces the earlier list instead of extending it.
    pub fn reset(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Consume the collector and return its entities.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for Collector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Collector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Collector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> From<Vec<T>> for Collector<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            marker: ITEM_MARKER,
        }
    }
}

impl<T: DecodingDelegate + Default> DecodingDelegate for Collector<T> {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        if name != self.marker {
            return None;
        }
        self.items.push(T::default());
        self.items
            .last_mut()
            .map(|item| item as &mut dyn DecodingDelegate)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        if name != self.marker {
            return None;
        }
        self.items
            .last_mut()
            .map(|item| item as &mut dyn DecodingDelegate)
    }

    fn on_close(&mut self, _: &str, _: &str) -> DecodeResult<()> {
        Ok(())
    }
}

/// Root delegate for `Describe*` style responses.
///
/// Collects every `<item>` block not claimed by an entity, wherever the
/// action's envelope puts it, and captures the envelope's request id and
/// pagination fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet<T> {
    /// Decoded entities in document order.
    pub items: Collector<T>,
    /// Request id reported by the service.
    pub request_id: Option<String>,
    /// Token for the next page, if the listing was truncated.
    pub next_token: Option<String>,
    /// Whether more results are available.
    pub is_truncated: Option<bool>,
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self {
            items: Collector::new(),
            request_id: None,
            next_token: None,
            is_truncated: None,
        }
    }
}

impl<T> ResultSet<T> {
    /// Create an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Deref for ResultSet<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: DecodingDelegate + Default> DecodingDelegate for ResultSet<T> {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        self.items.on_open(name, attributes)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        self.items.active_child(name)
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "requestId" | "RequestId" => self.request_id = Some(text.to_owned()),
            "nextToken" | "NextToken" => self.next_token = Some(text.to_owned()),
            "isTruncated" | "IsTruncated" => self.is_truncated = Some(parse_bool(name, text)?),
            _ => {}
        }
        Ok(())
    }
}

/// Root delegate for actions that answer with a bare `<return>` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    /// Value of `<return>`.
    pub status: Option<bool>,
    /// Request id reported by the service.
    pub request_id: Option<String>,
}

impl StatusResponse {
    /// Whether the service reported success. A response without
    /// `<return>` counts as success.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status != Some(false)
    }
}

impl DecodingDelegate for StatusResponse {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "return" => self.status = Some(parse_bool(name, text)?),
            "requestId" | "RequestId" => self.request_id = Some(text.to_owned()),
            _ => {}
        }
        Ok(())
    }
}
