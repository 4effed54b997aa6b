//! Public IPv4 pools and bring-your-own-IP ranges.

use ec2wire_query::{IndexBase, ParamList, ParamObject, ToParams};

use crate::input::{Ec2Request, dry_run};
use crate::operations::Ec2Action;

/// `DescribePublicIpv4Pools`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribePublicIpv4PoolsRequest {
    pub pool_ids: Vec<String>,
    pub next_token: Option<String>,
    pub max_results: Option<u32>,
    pub dry_run: bool,
}

impl ToParams for DescribePublicIpv4PoolsRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .list("PoolId", ParamList::of_values(IndexBase::One, &self.pool_ids))
            .optional("NextToken", self.next_token.as_deref())
            .optional("MaxResults", self.max_results)
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribePublicIpv4PoolsRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribePublicIpv4Pools
    }
}

/// `DescribeByoipCidrs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeByoipCidrsRequest {
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
    pub dry_run: bool,
}

impl ToParams for DescribeByoipCidrsRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .optional("MaxResults", self.max_results)
            .optional("NextToken", self.next_token.as_deref())
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribeByoipCidrsRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeByoipCidrs
    }
}

/// `ProvisionByoipCidr`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionByoipCidrRequest {
    pub cidr: String,
    pub description: Option<String>,
    pub dry_run: bool,
}

impl ProvisionByoipCidrRequest {
    #[must_use]
    pub fn new(cidr: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            ..Self::default()
        }
    }
}

impl ToParams for ProvisionByoipCidrRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("Cidr", &self.cidr)
            .optional("Description", self.description.as_deref())
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for ProvisionByoipCidrRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::ProvisionByoipCidr
    }
}

/// `DeprovisionByoipCidr`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprovisionByoipCidrRequest {
    pub cidr: String,
    pub dry_run: bool,
}

impl ToParams for DeprovisionByoipCidrRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("Cidr", &self.cidr)
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DeprovisionByoipCidrRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DeprovisionByoipCidr
    }
}
