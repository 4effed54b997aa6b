//! Network interface specifications and the calls that carry them.

use ec2wire_query::{
    EncodeResult, Exclusive, IndexBase, ListEncoder, ParamList, ParamObject, ParameterSet,
    ToParams, encode_object,
};
use serde::Deserialize;
use tracing::debug;

use crate::input::{Ec2Request, dry_run};
use crate::operations::Ec2Action;

/// A public address may only be requested for a launch with a single
/// interface, at device index 0.
pub const PUBLIC_IP_CONSTRAINT: Exclusive = Exclusive::new("AssociatePublicIpAddress")
    .sole()
    .at_position(0)
    .requiring("DeviceIndex", "0");

/// A secondary private address requested for an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PrivateIpAddressSpec {
    pub private_ip_address: Option<String>,
    pub primary: Option<bool>,
}

impl PrivateIpAddressSpec {
    #[must_use]
    pub fn new(address: impl Into<String>, primary: bool) -> Self {
        Self {
            private_ip_address: Some(address.into()),
            primary: Some(primary),
        }
    }
}

impl ToParams for PrivateIpAddressSpec {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .optional("PrivateIpAddress", self.private_ip_address.as_deref())
            .optional("Primary", self.primary)
    }
}

/// One network interface to create or attach at launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NetworkInterfaceSpecification {
    pub network_interface_id: Option<String>,
    pub device_index: Option<u32>,
    pub subnet_id: Option<String>,
    pub description: Option<String>,
    pub private_ip_address: Option<String>,
    pub security_group_ids: Vec<String>,
    pub delete_on_termination: Option<bool>,
    pub private_ip_addresses: Vec<PrivateIpAddressSpec>,
    pub secondary_private_ip_address_count: Option<u32>,
    pub associate_public_ip_address: Option<bool>,
    pub switch_id: Option<String>,
}

impl ToParams for NetworkInterfaceSpecification {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .optional("NetworkInterfaceId", self.network_interface_id.as_deref())
            .optional("DeviceIndex", self.device_index)
            .optional("SubnetId", self.subnet_id.as_deref())
            .optional("Description", self.description.as_deref())
            .optional("PrivateIpAddress", self.private_ip_address.as_deref())
            .list(
                "SecurityGroupId",
                ParamList::of_values(IndexBase::Zero, &self.security_group_ids),
            )
            .optional("DeleteOnTermination", self.delete_on_termination)
            .list(
                "PrivateIpAddresses",
                ParamList::of_objects(
                    IndexBase::Zero,
                    self.private_ip_addresses.iter().map(ToParams::to_params),
                ),
            )
            .optional(
                "SecondaryPrivateIpAddressCount",
                self.secondary_private_ip_address_count,
            )
            .optional("AssociatePublicIpAddress", self.associate_public_ip_address)
            .optional("SwitchId", self.switch_id.as_deref())
    }
}

/// The interfaces of one launch, encoded as `NetworkInterface.0`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NetworkInterfaceCollection(pub Vec<NetworkInterfaceSpecification>);

impl NetworkInterfaceCollection {
    /// The encoder for this list, with the public address constraint.
    #[must_use]
    pub fn encoder() -> ListEncoder {
        ListEncoder::new("NetworkInterface").exclusive(PUBLIC_IP_CONSTRAINT)
    }

    /// Flatten the interfaces under an optional prefix such as
    /// `LaunchSpecification`.
    ///
    /// Fails with [`EncodeError::ClientValidation`](ec2wire_query::EncodeError)
    /// and produces nothing if the public address constraint is violated.
    pub fn build_list_params(&self, prefix: Option<&str>) -> EncodeResult<ParameterSet> {
        Self::encoder().encode_items(&self.0, prefix)
    }

    /// Number of interfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no interface is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<NetworkInterfaceSpecification>> for NetworkInterfaceCollection {
    fn from(specs: Vec<NetworkInterfaceSpecification>) -> Self {
        Self(specs)
    }
}

/// `RunInstances` with explicit network interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInstancesRequest {
    pub image_id: String,
    pub instance_type: Option<String>,
    pub min_count: u32,
    pub max_count: u32,
    pub network_interfaces: NetworkInterfaceCollection,
    pub dry_run: bool,
}

impl ToParams for RunInstancesRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("ImageId", &self.image_id)
            .optional("InstanceType", self.instance_type.as_deref())
            .value("MinCount", self.min_count)
            .value("MaxCount", self.max_count)
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for RunInstancesRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::RunInstances
    }

    fn build_params(&self) -> EncodeResult<ParameterSet> {
        let interfaces = self.network_interfaces.build_list_params(None)?;
        let mut params = encode_object(&self.to_params(), None)?;
        params.merge(interfaces)?;
        params.set("Action", self.action().as_str());
        debug!(
            action = %self.action(),
            interfaces = self.network_interfaces.len(),
            keys = params.len(),
            "built request parameters"
        );
        Ok(params)
    }
}

/// `DescribeNetworkInterfaces`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeNetworkInterfacesRequest {
    pub network_interface_ids: Vec<String>,
    pub dry_run: bool,
}

impl ToParams for DescribeNetworkInterfacesRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .list(
                "NetworkInterfaceId",
                ParamList::of_values(IndexBase::One, &self.network_interface_ids),
            )
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribeNetworkInterfacesRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeNetworkInterfaces
    }
}

/// `DescribePrivateIpAddresses`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribePrivateIpAddressesRequest {
    pub private_ip_address_ids: Vec<String>,
    pub dry_run: bool,
}

impl ToParams for DescribePrivateIpAddressesRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .list(
                "PrivateIpAddressId",
                ParamList::of_values(IndexBase::One, &self.private_ip_address_ids),
            )
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribePrivateIpAddressesRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribePrivateIpAddresses
    }
}

/// `DescribeExternalNetworks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeExternalNetworksRequest {
    pub dry_run: bool,
}

impl ToParams for DescribeExternalNetworksRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new().optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribeExternalNetworksRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeExternalNetworks
    }
}
