//! Flattening of argument trees into indexed parameter names.

use tracing::{debug, trace};

use crate::error::{EncodeError, EncodeResult};
use crate::node::{IndexBase, ParamNode, ParamObject, ParamValue};
use crate::params::ParameterSet;

/// A request argument that can describe itself as a [`ParamObject`].
pub trait ToParams {
    /// Build the field tree of this argument. Unset fields are left out.
    fn to_params(&self) -> ParamObject;
}

/// A cross-item rule on a boolean flag of a list.
///
/// At most one item may set `flag` to `true`. That item may further be
/// required to be the only item of the list, to sit at a given list position
/// and to carry a given value in another field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusive {
    flag: &'static str,
    sole: bool,
    position: Option<usize>,
    requires: Option<(&'static str, &'static str)>,
}

impl Exclusive {
    /// Allow at most one item to set `flag`.
    #[must_use]
    pub const fn new(flag: &'static str) -> Self {
        Self {
            flag,
            sole: false,
            position: None,
            requires: None,
        }
    }

    /// Require the flagged item to be the only item of the list.
    #[must_use]
    pub const fn sole(mut self) -> Self {
        self.sole = true;
        self
    }

    /// Require the flagged item to be at `position` (zero-based, regardless
    /// of the list's wire numbering).
    #[must_use]
    pub const fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Require the flagged item to encode `field` as exactly `value`.
    #[must_use]
    pub const fn requiring(mut self, field: &'static str, value: &'static str) -> Self {
        self.requires = Some((field, value));
        self
    }

    /// Name of the constrained flag.
    #[must_use]
    pub const fn flag(&self) -> &'static str {
        self.flag
    }

    fn check(&self, list_name: &str, items: &[ParamNode]) -> EncodeResult<()> {
        let flagged: Vec<(usize, &ParamObject)> = items
            .iter()
            .enumerate()
            .filter_map(|(pos, item)| item.as_object().map(|obj| (pos, obj)))
            .filter(|(_, obj)| is_set(obj, self.flag))
            .collect();

        let (position, item) = match flagged.as_slice() {
            [] => return Ok(()),
            [only] => *only,
            _ => {
                return Err(EncodeError::ClientValidation(format!(
                    "only one {list_name} item may set {} ({} do)",
                    self.flag,
                    flagged.len()
                )));
            }
        };

        if self.sole && items.len() > 1 {
            return Err(EncodeError::ClientValidation(format!(
                "{list_name} item setting {} must be the only item ({} given)",
                self.flag,
                items.len()
            )));
        }

        match self.position {
            Some(required) if position != required => {
                return Err(EncodeError::ClientValidation(format!(
                    "{list_name} item setting {} must be at position {required}, found at {position}",
                    self.flag
                )));
            }
            _ => {}
        }

        if let Some((field, expected)) = self.requires {
            let actual = item
                .get(field)
                .and_then(ParamNode::as_value)
                .map(ParamValue::encode);
            if actual.as_deref() != Some(expected) {
                return Err(EncodeError::ClientValidation(format!(
                    "{list_name} item setting {} must have {field} {expected}",
                    self.flag
                )));
            }
        }
        Ok(())
    }
}

fn is_set(object: &ParamObject, flag: &str) -> bool {
    matches!(
        object.get(flag),
        Some(ParamNode::Scalar(ParamValue::Boolean(true)))
    )
}

/// Encodes one named list of uniform items.
///
/// # Examples
///
/// ```
/// use ec2wire_query::{ListEncoder, ParamNode, ParamObject};
///
/// let items = vec![ParamNode::Object(ParamObject::new().value("DeviceIndex", 0))];
/// let params = ListEncoder::new("NetworkInterface")
///     .encode(&items, Some("LaunchSpecification"))
///     .expect("valid list");
///
/// assert_eq!(
///     params.get("LaunchSpecification.NetworkInterface.0.DeviceIndex"),
///     Some("0")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ListEncoder {
    list_name: String,
    base: IndexBase,
    constraints: Vec<Exclusive>,
}

impl ListEncoder {
    /// Create a zero-based encoder for `list_name`.
    #[must_use]
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            base: IndexBase::Zero,
            constraints: Vec::new(),
        }
    }

    /// Use a different numbering for the list's own indices.
    #[must_use]
    pub fn index_base(mut self, base: IndexBase) -> Self {
        self.base = base;
        self
    }

    /// Add a cross-item constraint checked before anything is emitted.
    #[must_use]
    pub fn exclusive(mut self, constraint: Exclusive) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Name of the encoded list.
    #[must_use]
    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    /// Check every constraint against `items`.
    pub fn validate(&self, items: &[ParamNode]) -> EncodeResult<()> {
        self.constraints
            .iter()
            .try_for_each(|constraint| constraint.check(&self.list_name, items))
    }

    /// Flatten `items` into a new parameter set.
    ///
    /// Keys are `<prefix>.<ListName>.<index>.<field path>`. Nothing is
    /// returned if validation or flattening fails.
    pub fn encode(&self, items: &[ParamNode], prefix: Option<&str>) -> EncodeResult<ParameterSet> {
        self.validate(items)?;

        let root = qualify(prefix, &self.list_name);
        let mut params = ParameterSet::new();
        for (position, item) in items.iter().enumerate() {
            let path = format!("{root}.{}", self.base.index(position));
            flatten(&path, item, &mut params)?;
        }

        debug!(
            list = %self.list_name,
            items = items.len(),
            keys = params.len(),
            "encoded parameter list"
        );
        Ok(params)
    }

    /// Flatten typed items.
    pub fn encode_items<T: ToParams>(
        &self,
        items: &[T],
        prefix: Option<&str>,
    ) -> EncodeResult<ParameterSet> {
        let nodes: Vec<ParamNode> = items
            .iter()
            .map(|item| ParamNode::Object(item.to_params()))
            .collect();
        self.encode(&nodes, prefix)
    }

    /// Flatten `items` and merge them into `params`.
    ///
    /// `params` is left untouched on any error.
    pub fn encode_into(
        &self,
        items: &[ParamNode],
        prefix: Option<&str>,
        params: &mut ParameterSet,
    ) -> EncodeResult<()> {
        let encoded = self.encode(items, prefix)?;
        params.merge(encoded)
    }
}

/// Flatten the fields of `object`, each qualified by `prefix`.
pub fn encode_object(object: &ParamObject, prefix: Option<&str>) -> EncodeResult<ParameterSet> {
    let mut params = ParameterSet::new();
    for (name, node) in object.fields() {
        flatten(&qualify(prefix, name), node, &mut params)?;
    }
    debug!(keys = params.len(), "encoded parameter object");
    Ok(params)
}

fn flatten(path: &str, node: &ParamNode, params: &mut ParameterSet) -> EncodeResult<()> {
    match node {
        ParamNode::Scalar(value) => {
            trace!(key = path, "emit parameter");
            params.insert(path.to_owned(), value.encode().into_owned())
        }
        ParamNode::Object(object) => object
            .fields()
            .try_for_each(|(name, child)| flatten(&format!("{path}.{name}"), child, params)),
        ParamNode::List(list) => {
            let base = list.base();
            list.items()
                .iter()
                .enumerate()
                .try_for_each(|(position, item)| {
                    flatten(&format!("{path}.{}", base.index(position)), item, params)
                })
        }
    }
}

/// Join an optional prefix and a name with exactly one `.` between them.
fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix.filter(|p| !p.is_empty()) {
        Some(p) if p.ends_with('.') => format!("{p}{name}"),
        Some(p) => format!("{p}.{name}"),
        None => name.to_owned(),
    }
}
