//! XML response decoding for EC2-compatible query APIs.
//!
//! EC2-style responses are deeply nested and heterogeneous: every action has
//! its own envelope, lists are spelled as a wrapper element containing
//! repeated `<item>` blocks, and servers routinely add elements a client does
//! not know about yet. This crate turns such a document into a typed object
//! graph by delegation rather than by a fixed schema.
//!
//! # Key components
//!
//! - [`tokenize`] turns a byte buffer into a flat sequence of [`ElementEvent`]s,
//!   rejecting malformed documents before any object is touched
//! - [`DecodingDelegate`] is the contract every decodable entity implements:
//!   `on_open` decides whether the entity owns a child element, `on_close`
//!   interprets the entity's own leaf values
//! - [`decode`] drives the delegates with an explicit frame stack
//! - [`Collector`] and [`ResultSet`] accumulate repeated `<item>` blocks in
//!   document order
//! - [`UnknownFields`] keeps elements an entity does not recognize
//! - the [`value`] module coerces leaf text into booleans, integers and
//!   exact decimals
//!
//! # Wire conventions
//!
//! - Booleans: exactly `true` / `false`
//! - Repetition marker: `item`, always structural and never stored as a field
//! - Namespaces: passed through untouched

pub mod collector;
pub mod config;
pub mod delegate;
pub mod error;
pub mod event;
pub mod value;

pub use collector::{Collector, ITEM_MARKER, ResultSet, StatusResponse, UnknownFields};
pub use config::DecoderConfig;
pub use delegate::{DecodingDelegate, FieldAssign, decode, decode_with, from_xml};
pub use error::{DecodeError, DecodeResult};
pub use event::{Attributes, ElementEvent, tokenize};
