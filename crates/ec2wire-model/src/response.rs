//! Choosing the root shape of a response by action.

use ec2wire_xml::{
    DecodeResult, DecoderConfig, DecodingDelegate, ResultSet, StatusResponse, UnknownFields,
    decode_with,
};
use serde::Serialize;
use tracing::debug;

use crate::operations::Ec2Action;
use crate::output::{
    AddressPool, ByoipCidr, CancelledImportTask, ExportTask, ExtNetwork, ImportImageTask,
    ImportSnapshotTask, NetworkInterface, PrivateIp, Tariff, VirtualSwitch,
};

/// Every leaf of a response whose shape is not modelled, by element name.
///
/// Leaves with the same name overwrite each other; the request id is kept
/// separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericResponse {
    pub request_id: Option<String>,
    pub fields: UnknownFields,
}

impl DecodingDelegate for GenericResponse {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "requestId" | "RequestId" => self.request_id = Some(text.to_owned()),
            _ => self.fields.record(name, text),
        }
        Ok(())
    }
}

/// A decoded response of any supported action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(clippy::large_enum_variant)]
pub enum Ec2Response {
    AddressPools(ResultSet<AddressPool>),
    ByoipCidrs(ResultSet<ByoipCidr>),
    ByoipCidr(ByoipCidr),
    VirtualSwitches(ResultSet<VirtualSwitch>),
    VirtualSwitch(VirtualSwitch),
    Status(StatusResponse),
    NetworkInterfaces(ResultSet<NetworkInterface>),
    ImportImageTask(ImportImageTask),
    ImportImageTasks(ResultSet<ImportImageTask>),
    ImportSnapshotTask(ImportSnapshotTask),
    ImportSnapshotTasks(ResultSet<ImportSnapshotTask>),
    CancelledImportTask(CancelledImportTask),
    ExportTask(ExportTask),
    ExportTasks(ResultSet<ExportTask>),
    Tariffs(ResultSet<Tariff>),
    ExtNetworks(ResultSet<ExtNetwork>),
    PrivateIps(ResultSet<PrivateIp>),
    Generic(GenericResponse),
}

impl Ec2Response {
    /// Decode the body of a response to `action` with the default
    /// configuration.
    pub fn decode(action: Ec2Action, xml: &[u8]) -> DecodeResult<Self> {
        Self::decode_with(action, xml, &DecoderConfig::default())
    }

    /// Decode the body of a response to `action`.
    ///
    /// Actions without a modelled answer decode into
    /// [`Ec2Response::Generic`].
    pub fn decode_with(action: Ec2Action, xml: &[u8], config: &DecoderConfig) -> DecodeResult<Self> {
        debug!(%action, "decoding response");
        let response = match action {
            Ec2Action::DescribePublicIpv4Pools => Self::AddressPools(root(xml, config)?),
            Ec2Action::DescribeByoipCidrs => Self::ByoipCidrs(root(xml, config)?),
            Ec2Action::ProvisionByoipCidr | Ec2Action::DeprovisionByoipCidr => {
                Self::ByoipCidr(root(xml, config)?)
            }
            Ec2Action::DescribeVirtualSwitches => Self::VirtualSwitches(root(xml, config)?),
            Ec2Action::CreateVirtualSwitch => Self::VirtualSwitch(root(xml, config)?),
            Ec2Action::DeleteVirtualSwitch | Ec2Action::CancelExportTask => {
                Self::Status(root(xml, config)?)
            }
            Ec2Action::DescribeNetworkInterfaces => Self::NetworkInterfaces(root(xml, config)?),
            Ec2Action::ImportImage => Self::ImportImageTask(root(xml, config)?),
            Ec2Action::DescribeImportImageTasks => Self::ImportImageTasks(root(xml, config)?),
            Ec2Action::ImportSnapshot => Self::ImportSnapshotTask(root(xml, config)?),
            Ec2Action::DescribeImportSnapshotTasks => {
                Self::ImportSnapshotTasks(root(xml, config)?)
            }
            Ec2Action::CancelImportTask => Self::CancelledImportTask(root(xml, config)?),
            Ec2Action::CreateInstanceExportTask => Self::ExportTask(root(xml, config)?),
            Ec2Action::DescribeExportTasks => Self::ExportTasks(root(xml, config)?),
            Ec2Action::DescribeTariffs => Self::Tariffs(root(xml, config)?),
            Ec2Action::DescribeExternalNetworks => Self::ExtNetworks(root(xml, config)?),
            Ec2Action::DescribePrivateIpAddresses => Self::PrivateIps(root(xml, config)?),
            Ec2Action::RunInstances => Self::Generic(root(xml, config)?),
        };
        Ok(response)
    }
}

fn root<D: DecodingDelegate + Default>(xml: &[u8], config: &DecoderConfig) -> DecodeResult<D> {
    let mut root = D::default();
    decode_with(xml, &mut root, config)?;
    Ok(root)
}
