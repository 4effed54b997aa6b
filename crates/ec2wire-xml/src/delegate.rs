//! The decoding delegate contract and the stack driver.
//!
//! Every decodable entity answers two questions:
//!
//! - on an opening tag: "do you own this element's children?" If so the
//!   entity hands back the child delegate, which then receives every event
//!   inside the element, then is detached at the element's closing tag.
//! - on a closing tag: "do you want to interpret this value?" Only unclaimed
//!   leaf elements (no child elements) are offered, to the innermost claimed
//!   delegate. Closing tags of container elements carry no value and are not
//!   offered.
//!
//! No entity ever sees the closing tag of an element it claimed, empty or
//! not, so it cannot react to its own container closing and wrapper names
//! never end up among its unknown fields.
//!
//! The driver keeps an explicit frame stack instead of recursing. A frame
//! records the element name and whether it was claimed; the names of claimed
//! frames are also kept on their own path. The live delegate is reached by
//! walking [`DecodingDelegate::active_child`] from the root along that path,
//! so children stay owned by their parents and each event costs time in the
//! number of claimed ancestors, not in the document depth.

use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};
use crate::event::{Attributes, ElementEvent, tokenize};

/// An object able to interpret element events for itself and, optionally,
/// hand a sub-region of the document to a child delegate.
pub trait DecodingDelegate {
    /// Called when an element opens while this delegate is active.
    ///
    /// Returning a child transfers all events inside the element to that
    /// child. The child must stay reachable through
    /// [`active_child`](Self::active_child) with the same name until the
    /// element closes.
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        let _ = (name, attributes);
        None
    }

    /// Return the child most recently handed out by `on_open` for `name`.
    ///
    /// Must not create or reset anything.
    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        let _ = name;
        None
    }

    /// Called when an unclaimed leaf element closes while this delegate is
    /// the innermost claimed one.
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()>;
}

/// Typed leaf assignment shared by an entity and the entities built on it.
///
/// A specialized entity holds its base by value and offers every closing tag
/// to the base first; it only looks at names the base did not claim.
pub trait FieldAssign {
    /// Store `text` into the field named `name`.
    ///
    /// Returns `Ok(false)` if `name` is not a field of this type.
    fn assign(&mut self, name: &str, text: &str) -> DecodeResult<bool>;
}

#[derive(Debug)]
struct Frame<'a> {
    element: &'a str,
    /// The element was claimed; its name is on the claimed path.
    claimed: bool,
    /// At least one child element opened inside this one.
    nested: bool,
}

/// Decode an XML document into `root` with the default configuration.
///
/// # Errors
///
/// - [`DecodeError::MalformedDocument`] if the document is not well formed;
///   `root` is left untouched.
/// - [`DecodeError::UnexpectedValue`] if a field rejects its text; values
///   decoded before that field remain in `root`.
pub fn decode<D: DecodingDelegate>(xml: &[u8], root: &mut D) -> DecodeResult<()> {
    decode_with(xml, root, &DecoderConfig::default())
}

/// Decode an XML document into `root` with an explicit configuration.
///
/// # Errors
///
/// See [`decode`]; additionally [`DecodeError::DepthExceeded`] when the
/// document nests deeper than `config.max_depth`.
pub fn decode_with<D: DecodingDelegate>(
    xml: &[u8],
    root: &mut D,
    config: &DecoderConfig,
) -> DecodeResult<()> {
    let events = tokenize(xml, config)?;
    debug!(events = events.len(), bytes = xml.len(), "decoding XML response");
    dispatch(&events, root, config)
}

/// Decode an XML document into a freshly created root.
///
/// # Errors
///
/// See [`decode`]. No partially decoded root is returned on failure.
pub fn from_xml<D: DecodingDelegate + Default>(xml: &[u8]) -> DecodeResult<D> {
    let mut root = D::default();
    decode(xml, &mut root)?;
    Ok(root)
}

fn dispatch<D: DecodingDelegate>(
    events: &[ElementEvent],
    root: &mut D,
    config: &DecoderConfig,
) -> DecodeResult<()> {
    let mut frames: Vec<Frame<'_>> = Vec::new();
    // Names of the claimed frames only, outermost first.
    let mut claimed: Vec<&str> = Vec::new();

    for event in events {
        match event {
            ElementEvent::Open { name, attributes } => {
                if let Some(limit) = config.max_depth {
                    if frames.len() >= limit {
                        return Err(DecodeError::DepthExceeded(limit));
                    }
                }
                if let Some(parent) = frames.last_mut() {
                    parent.nested = true;
                }
                let top = active_delegate(root, &claimed)?;
                let is_claimed = top.on_open(name, attributes).is_some();
                if is_claimed {
                    trace!(element = %name, depth = frames.len(), "delegate claimed element");
                    claimed.push(name);
                }
                frames.push(Frame {
                    element: name,
                    claimed: is_claimed,
                    nested: false,
                });
            }
            ElementEvent::Close { name, text } => {
                let Some(frame) = frames.pop() else {
                    return Err(DecodeError::MalformedDocument(format!(
                        "unbalanced closing tag </{name}>"
                    )));
                };
                debug_assert_eq!(frame.element, name.as_str());
                if frame.claimed {
                    claimed.pop();
                    trace!(element = %name, depth = frames.len(), "delegate detached");
                } else if !frame.nested {
                    active_delegate(root, &claimed)?.on_close(name, text)?;
                }
            }
        }
    }

    Ok(())
}

/// Walk from the root to the innermost claimed delegate.
fn active_delegate<'a>(
    root: &'a mut dyn DecodingDelegate,
    claimed: &[&str],
) -> DecodeResult<&'a mut dyn DecodingDelegate> {
    let mut current = root;
    for element in claimed {
        current = current
            .active_child(element)
            .ok_or_else(|| DecodeError::DetachedChild((*element).to_owned()))?;
    }
    Ok(current)
}
