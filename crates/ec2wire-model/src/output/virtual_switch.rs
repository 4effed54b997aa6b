//! Virtual switches.

use ec2wire_xml::{
    Attributes, DecodeResult, DecodingDelegate, UnknownFields, value::parse_bool,
};
use serde::Serialize;

use crate::output::tag::TagSet;

/// A virtual switch (`DescribeVirtualSwitches`, `CreateVirtualSwitch`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSwitch {
    /// The `switchId`.
    pub id: Option<String>,
    /// The `switchName`.
    pub name: Option<String>,
    /// The `<return>` flag of action responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    pub tags: TagSet,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for VirtualSwitch {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "tagSet" => Some(self.tags.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "tagSet" => Some(&mut self.tags),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "switchId" => self.id = Some(text.to_owned()),
            "switchName" => self.name = Some(text.to_owned()),
            "return" => self.status = Some(parse_bool(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}
