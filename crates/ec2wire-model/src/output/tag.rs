//! Resource tags.

use ec2wire_xml::{Attributes, Collector, DecodeResult, DecodingDelegate, UnknownFields};
use serde::Serialize;

/// One `key` / `value` pair of a `tagSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for Tag {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "key" => self.key = Some(text.to_owned()),
            "value" => self.value = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// The tags of a resource, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagSet(Collector<Tag>);

impl TagSet {
    /// Value of the first tag named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|tag| tag.key.as_deref() == Some(key))
            .and_then(|tag| tag.value.as_deref())
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the resource has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every tag; called when a `tagSet` opens.
    pub fn reset(&mut self) -> &mut Self {
        self.0.reset();
        self
    }

    /// Iterate over the tags in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }
}

impl DecodingDelegate for TagSet {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        self.0.on_open(name, attributes)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        self.0.active_child(name)
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        self.0.on_close(name, text)
    }
}
