//! Public IPv4 pools and bring-your-own-IP ranges.

use ec2wire_xml::{
    Attributes, Collector, DecodeResult, DecodingDelegate, UnknownFields, value::parse_int,
};
use serde::Serialize;

/// A public IPv4 address pool (`DescribePublicIpv4Pools`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPool {
    /// The `poolId`.
    pub id: Option<String>,
    pub description: Option<String>,
    pub total_address_count: Option<u32>,
    pub total_available_address_count: Option<u32>,
    pub pool_address_ranges: Collector<AddressRange>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for AddressPool {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "poolAddressRangeSet" => Some(self.pool_address_ranges.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "poolAddressRangeSet" => Some(&mut self.pool_address_ranges),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "poolId" => self.id = Some(text.to_owned()),
            "description" => self.description = Some(text.to_owned()),
            "totalAddressCount" => self.total_address_count = Some(parse_int(name, text)?),
            "totalAvailableAddressCount" => {
                self.total_available_address_count = Some(parse_int(name, text)?);
            }
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// A contiguous range of addresses inside an [`AddressPool`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRange {
    pub first_address: Option<String>,
    pub last_address: Option<String>,
    pub address_count: Option<u32>,
    pub available_address_count: Option<u32>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for AddressRange {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "firstAddress" => self.first_address = Some(text.to_owned()),
            "lastAddress" => self.last_address = Some(text.to_owned()),
            "addressCount" => self.address_count = Some(parse_int(name, text)?),
            "availableAddressCount" => self.available_address_count = Some(parse_int(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// A customer-owned CIDR block (`DescribeByoipCidrs`, `ProvisionByoipCidr`,
/// `DeprovisionByoipCidr`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByoipCidr {
    pub cidr: Option<String>,
    pub description: Option<String>,
    pub status_message: Option<String>,
    pub state: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl ByoipCidr {
    /// The block is identified by its CIDR.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.cidr.as_deref()
    }
}

impl DecodingDelegate for ByoipCidr {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "cidr" => self.cidr = Some(text.to_owned()),
            "description" => self.description = Some(text.to_owned()),
            "statusMessage" => self.status_message = Some(text.to_owned()),
            "state" => self.state = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}
