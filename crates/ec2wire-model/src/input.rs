//! Request specifications.
//!
//! Each request knows its [`Ec2Action`] and describes its arguments as a
//! [`ParamObject`](ec2wire_query::ParamObject) through
//! [`ToParams`](ec2wire_query::ToParams). Unset arguments never reach the
//! wire and `DryRun=true` is sent only when asked for.

pub mod address;
pub mod import_export;
pub mod network;
pub mod tariff;
pub mod virtual_switch;

use ec2wire_query::{EncodeResult, ParameterSet, ToParams, encode_object};
use tracing::debug;

use crate::operations::Ec2Action;

pub use address::{
    DeprovisionByoipCidrRequest, DescribeByoipCidrsRequest, DescribePublicIpv4PoolsRequest,
    ProvisionByoipCidrRequest,
};
pub use import_export::{
    CancelExportTaskRequest, CancelImportTaskRequest, CreateInstanceExportTaskRequest,
    DescribeExportTasksRequest, DescribeImportImageTasksRequest,
    DescribeImportSnapshotTasksRequest, DiskContainer, ExportToS3Task, ImportImageRequest,
    ImportSnapshotRequest, UserBucket,
};
pub use network::{
    DescribeExternalNetworksRequest, DescribeNetworkInterfacesRequest,
    DescribePrivateIpAddressesRequest, NetworkInterfaceCollection, NetworkInterfaceSpecification,
    PrivateIpAddressSpec, RunInstancesRequest,
};
pub use tariff::DescribeTariffsRequest;
pub use virtual_switch::{
    CreateVirtualSwitchRequest, DeleteVirtualSwitchRequest, DescribeVirtualSwitchesRequest,
    SwitchRef,
};

/// A complete call of one action.
pub trait Ec2Request: ToParams {
    /// The action this request invokes.
    fn action(&self) -> Ec2Action;

    /// Flatten the request into its final parameter set, `Action` included.
    fn build_params(&self) -> EncodeResult<ParameterSet> {
        let mut params = encode_object(&self.to_params(), None)?;
        params.set("Action", self.action().as_str());
        debug!(action = %self.action(), keys = params.len(), "built request parameters");
        Ok(params)
    }
}

/// `Some(true)` when a dry run was requested, so `DryRun` is otherwise omitted.
pub(crate) fn dry_run(requested: bool) -> Option<bool> {
    requested.then_some(true)
}
