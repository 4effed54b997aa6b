//! Network interfaces, private addresses and external networks.

use ec2wire_xml::{
    Attributes, Collector, DecodeResult, DecodingDelegate, UnknownFields,
    value::{parse_bool, parse_int},
};
use serde::Serialize;

use crate::output::tag::TagSet;

/// An elastic network interface (`DescribeNetworkInterfaces`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// The `networkInterfaceId`.
    pub id: Option<String>,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub availability_zone: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<String>,
    pub requester_managed: Option<bool>,
    pub status: Option<String>,
    pub mac_address: Option<String>,
    pub private_ip_address: Option<String>,
    pub source_dest_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association: Option<Association>,
    pub groups: Collector<GroupRef>,
    pub tags: TagSet,
    pub private_ip_addresses: Collector<PrivateIpAddress>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for NetworkInterface {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "attachment" => Some(self.attachment.insert(Attachment::default())),
            "association" => Some(self.association.insert(Association::default())),
            "groupSet" => Some(self.groups.reset()),
            "tagSet" => Some(self.tags.reset()),
            "privateIpAddressesSet" => Some(self.private_ip_addresses.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "attachment" => self
                .attachment
                .as_mut()
                .map(|a| a as &mut dyn DecodingDelegate),
            "association" => self
                .association
                .as_mut()
                .map(|a| a as &mut dyn DecodingDelegate),
            "groupSet" => Some(&mut self.groups),
            "tagSet" => Some(&mut self.tags),
            "privateIpAddressesSet" => Some(&mut self.private_ip_addresses),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "networkInterfaceId" => self.id = Some(text.to_owned()),
            "subnetId" => self.subnet_id = Some(text.to_owned()),
            "vpcId" => self.vpc_id = Some(text.to_owned()),
            "availabilityZone" => self.availability_zone = Some(text.to_owned()),
            "description" => self.description = Some(text.to_owned()),
            "ownerId" => self.owner_id = Some(text.to_owned()),
            "requesterManaged" => self.requester_managed = Some(parse_bool(name, text)?),
            "status" => self.status = Some(text.to_owned()),
            "macAddress" => self.mac_address = Some(text.to_owned()),
            "privateIpAddress" => self.private_ip_address = Some(text.to_owned()),
            "sourceDestCheck" => self.source_dest_check = Some(parse_bool(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// How a network interface is attached to an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// The `attachmentId`.
    pub id: Option<String>,
    pub instance_id: Option<String>,
    pub instance_owner_id: Option<String>,
    pub device_index: Option<u32>,
    pub status: Option<String>,
    pub attach_time: Option<String>,
    pub delete_on_termination: Option<bool>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for Attachment {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "attachmentId" => self.id = Some(text.to_owned()),
            "instanceId" => self.instance_id = Some(text.to_owned()),
            "instanceOwnerId" => self.instance_owner_id = Some(text.to_owned()),
            "deviceIndex" => self.device_index = Some(parse_int(name, text)?),
            "status" => self.status = Some(text.to_owned()),
            "attachTime" => self.attach_time = Some(text.to_owned()),
            "deleteOnTermination" => self.delete_on_termination = Some(parse_bool(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// An elastic IP associated with an interface or one of its addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    /// The `associationId`.
    pub id: Option<String>,
    pub public_ip: Option<String>,
    pub public_dns_name: Option<String>,
    pub allocation_id: Option<String>,
    pub ip_owner_id: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for Association {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "associationId" => self.id = Some(text.to_owned()),
            "publicIp" => self.public_ip = Some(text.to_owned()),
            "publicDnsName" => self.public_dns_name = Some(text.to_owned()),
            "allocationId" => self.allocation_id = Some(text.to_owned()),
            "ipOwnerId" => self.ip_owner_id = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// One private address of a network interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateIpAddress {
    pub private_ip_address: Option<String>,
    pub private_dns_name: Option<String>,
    pub primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association: Option<Association>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for PrivateIpAddress {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "association" => Some(self.association.insert(Association::default())),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "association" => self
                .association
                .as_mut()
                .map(|a| a as &mut dyn DecodingDelegate),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "privateIpAddress" => self.private_ip_address = Some(text.to_owned()),
            "privateDnsName" => self.private_dns_name = Some(text.to_owned()),
            "primary" => self.primary = Some(parse_bool(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// A security group a network interface belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for GroupRef {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "groupId" => self.group_id = Some(text.to_owned()),
            "groupName" => self.group_name = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// A standalone private address (`DescribePrivateIpAddresses`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateIp {
    /// The `privateIpAddressId`.
    pub id: Option<String>,
    pub subnet_id: Option<String>,
    pub state: Option<String>,
    pub availability_zone: Option<String>,
    pub private_ip_address: Option<String>,
    pub ip_address: Option<String>,
    /// The `dnsName`.
    pub public_dns_name: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for PrivateIp {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "privateIpAddressId" => self.id = Some(text.to_owned()),
            "subnetId" => self.subnet_id = Some(text.to_owned()),
            "state" => self.state = Some(text.to_owned()),
            "availabilityZone" => self.availability_zone = Some(text.to_owned()),
            "privateIpAddress" => self.private_ip_address = Some(text.to_owned()),
            "ipAddress" => self.ip_address = Some(text.to_owned()),
            "dnsName" => self.public_dns_name = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// An external network (`DescribeExternalNetworks`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtNetwork {
    /// The `extNetName`.
    pub name: Option<String>,
    pub state: Option<String>,
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for ExtNetwork {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "extNetName" => self.name = Some(text.to_owned()),
            "state" => self.state = Some(text.to_owned()),
            "availabilityZone" => self.availability_zone = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}
