//! Supported API actions.

/// All supported EC2 actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ec2Action {
    /// The ImportImage action.
    ImportImage,
    /// The ImportSnapshot action.
    ImportSnapshot,
    /// The DescribeImportImageTasks action.
    DescribeImportImageTasks,
    /// The DescribeImportSnapshotTasks action.
    DescribeImportSnapshotTasks,
    /// The CancelImportTask action.
    CancelImportTask,
    /// The CreateInstanceExportTask action.
    CreateInstanceExportTask,
    /// The DescribeExportTasks action.
    DescribeExportTasks,
    /// The CancelExportTask action.
    CancelExportTask,
    /// The DescribePublicIpv4Pools action.
    DescribePublicIpv4Pools,
    /// The DescribeByoipCidrs action.
    DescribeByoipCidrs,
    /// The ProvisionByoipCidr action.
    ProvisionByoipCidr,
    /// The DeprovisionByoipCidr action.
    DeprovisionByoipCidr,
    /// The DescribeVirtualSwitches action.
    DescribeVirtualSwitches,
    /// The CreateVirtualSwitch action.
    CreateVirtualSwitch,
    /// The DeleteVirtualSwitch action.
    DeleteVirtualSwitch,
    /// The DescribeNetworkInterfaces action.
    DescribeNetworkInterfaces,
    /// The RunInstances action.
    RunInstances,
    /// The DescribeTariffs action.
    DescribeTariffs,
    /// The DescribeExternalNetworks action.
    DescribeExternalNetworks,
    /// The DescribePrivateIpAddresses action.
    DescribePrivateIpAddresses,
}

impl Ec2Action {
    /// Every supported action, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::ImportImage,
        Self::ImportSnapshot,
        Self::DescribeImportImageTasks,
        Self::DescribeImportSnapshotTasks,
        Self::CancelImportTask,
        Self::CreateInstanceExportTask,
        Self::DescribeExportTasks,
        Self::CancelExportTask,
        Self::DescribePublicIpv4Pools,
        Self::DescribeByoipCidrs,
        Self::ProvisionByoipCidr,
        Self::DeprovisionByoipCidr,
        Self::DescribeVirtualSwitches,
        Self::CreateVirtualSwitch,
        Self::DeleteVirtualSwitch,
        Self::DescribeNetworkInterfaces,
        Self::RunInstances,
        Self::DescribeTariffs,
        Self::DescribeExternalNetworks,
        Self::DescribePrivateIpAddresses,
    ];

    /// Returns the wire name sent as the `Action` parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImportImage => "ImportImage",
            Self::ImportSnapshot => "ImportSnapshot",
            Self::DescribeImportImageTasks => "DescribeImportImageTasks",
            Self::DescribeImportSnapshotTasks => "DescribeImportSnapshotTasks",
            Self::CancelImportTask => "CancelImportTask",
            Self::CreateInstanceExportTask => "CreateInstanceExportTask",
            Self::DescribeExportTasks => "DescribeExportTasks",
            Self::CancelExportTask => "CancelExportTask",
            Self::DescribePublicIpv4Pools => "DescribePublicIpv4Pools",
            Self::DescribeByoipCidrs => "DescribeByoipCidrs",
            Self::ProvisionByoipCidr => "ProvisionByoipCidr",
            Self::DeprovisionByoipCidr => "DeprovisionByoipCidr",
            Self::DescribeVirtualSwitches => "DescribeVirtualSwitches",
            Self::CreateVirtualSwitch => "CreateVirtualSwitch",
            Self::DeleteVirtualSwitch => "DeleteVirtualSwitch",
            Self::DescribeNetworkInterfaces => "DescribeNetworkInterfaces",
            Self::RunInstances => "RunInstances",
            Self::DescribeTariffs => "DescribeTariffs",
            Self::DescribeExternalNetworks => "DescribeExternalNetworks",
            Self::DescribePrivateIpAddresses => "DescribePrivateIpAddresses",
        }
    }

    /// Parse an action name into an `Ec2Action`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

impl std::fmt::Display for Ec2Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
