use crate::vocab::{class, ns};
use oxrdf::NamedNode;

/// How identifiers of cemeteries that are not in the registry are built.
///
/// The identifier of the n-th new cemetery is `prefix + (base + n) + suffix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierPolicy {
    pub prefix: String,
    pub base: u64,
    pub suffix: String,
}

impl IdentifierPolicy {
    pub const DEFAULT_BASE: u64 = 3000;

    pub fn default_prefix() -> String {
        format!("{}c_", ns::CEMETERY_DATA)
    }

    /// Formats the identifier for a counter value.
    pub fn format(&self, counter: u64) -> String {
        format!("{}{counter}{}", self.prefix, self.suffix)
    }
}

impl Default for IdentifierPolicy {
    fn default() -> Self {
        Self {
            prefix: Self::default_prefix(),
            base: Self::DEFAULT_BASE,
            suffix: String::new(),
        }
    }
}

/// Options of a conversion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionOptions {
    pub identifiers: IdentifierPolicy,
    /// The class every mapped cemetery is an instance of.
    pub instance_class: NamedNode,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            identifiers: IdentifierPolicy::default(),
            instance_class: class::CEMETERY.into_owned(),
        }
    }
}

impl ConversionOptions {
    #[must_use]
    pub fn with_identifiers(mut self, identifiers: IdentifierPolicy) -> Self {
        self.identifiers = identifiers;
        self
    }

    #[must_use]
    pub fn with_instance_class(mut self, instance_class: NamedNode) -> Self {
        self.instance_class = instance_class;
        self
    }
}
