//! Request and response entities for an EC2-compatible cloud API.
//!
//! Response entities implement [`DecodingDelegate`](ec2wire_xml::DecodingDelegate)
//! and are decoded with [`ec2wire_xml::decode`]; the root shape for each
//! action is chosen by [`Ec2Response::decode`]. Request types implement
//! [`Ec2Request`] and flatten into a [`ParameterSet`](ec2wire_query::ParameterSet)
//! that includes the `Action` parameter.
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod response;

pub use input::Ec2Request;
pub use operations::Ec2Action;
pub use response::{Ec2Response, GenericResponse};
