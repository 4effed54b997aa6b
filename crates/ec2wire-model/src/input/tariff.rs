//! Price list queries.

use ec2wire_query::{ParamObject, ToParams};

use crate::input::{Ec2Request, dry_run};
use crate::operations::Ec2Action;

/// `DescribeTariffs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeTariffsRequest {
    pub dry_run: bool,
}

impl ToParams for DescribeTariffsRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new().optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribeTariffsRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeTariffs
    }
}
