//! Virtual switch management.

use ec2wire_query::{IndexBase, ParamList, ParamObject, ToParams};

use crate::input::{Ec2Request, dry_run};
use crate::operations::Ec2Action;

/// How a switch is addressed: by id when known, otherwise by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchRef {
    Id(String),
    Name(String),
}

/// `DescribeVirtualSwitches`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeVirtualSwitchesRequest {
    pub switch_ids: Vec<String>,
    pub dry_run: bool,
}

impl ToParams for DescribeVirtualSwitchesRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .list("SwitchId", ParamList::of_values(IndexBase::One, &self.switch_ids))
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribeVirtualSwitchesRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeVirtualSwitches
    }
}

/// `CreateVirtualSwitch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVirtualSwitchRequest {
    pub switch_name: String,
    pub dry_run: bool,
}

impl ToParams for CreateVirtualSwitchRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("SwitchName", &self.switch_name)
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for CreateVirtualSwitchRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::CreateVirtualSwitch
    }
}

/// `DeleteVirtualSwitch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteVirtualSwitchRequest {
    pub switch: SwitchRef,
    pub dry_run: bool,
}

impl ToParams for DeleteVirtualSwitchRequest {
    fn to_params(&self) -> ParamObject {
        let object = match &self.switch {
            SwitchRef::Id(id) => ParamObject::new().value("SwitchId", id),
            SwitchRef::Name(name) => ParamObject::new().value("SwitchName", name),
        };
        object.optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DeleteVirtualSwitchRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DeleteVirtualSwitch
    }
}
