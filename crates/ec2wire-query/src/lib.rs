//! Query-parameter encoding for EC2-compatible APIs.
//!
//! Structured request arguments (lists of objects, nested objects and
//! scalar fields) travel as one flat mapping from dotted, indexed names to
//! strings:
//!
//! ```text
//! LaunchSpecification.NetworkInterface.0.PrivateIpAddresses.1.PrivateIpAddress = 10.0.0.11
//! ```
//!
//! # Key components
//!
//! - [`ParamValue`], [`ParamObject`] and [`ParamList`] describe a request
//!   argument as a tree ([`ParamNode`])
//! - [`ToParams`] is implemented by request specifications
//! - [`ListEncoder`] flattens a list of items under an optional prefix after
//!   checking [`Exclusive`] constraints
//! - [`ParameterSet`] is the flat result
//!
//! # Conventions
//!
//! - Booleans: lowercase `true` / `false`
//! - Unset fields emit no key at all
//! - List indices are contiguous from the list's [`IndexBase`]

pub mod encode;
pub mod error;
pub mod node;
pub mod params;

pub use encode::{Exclusive, ListEncoder, ToParams, encode_object};
pub use error::{EncodeError, EncodeResult};
pub use node::{IndexBase, ParamList, ParamNode, ParamObject, ParamValue};
pub use params::ParameterSet;
