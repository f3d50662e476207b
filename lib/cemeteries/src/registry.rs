//! Identity reconciliation against the registry of already published cemeteries.

use crate::config::IdentifierPolicy;
use crate::error::{LoaderError, MappingError};
use oxrdf::NamedNode;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// One line of the registry file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RegistryRecord {
    pub original_narc_name: String,
    pub uri: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// A cemetery that already has an identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    pub uri: NamedNode,
    pub label: String,
}

/// The known cemeteries, keyed by their normalized archival name.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, RegistryEntry>,
}

/// Normalizes an archival name into a registry key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Registry {
    /// The delimiter of the registry export.
    pub const DEFAULT_DELIMITER: u8 = b',';

    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the registry from a delimited file with `original_narc_name` and `uri` columns.
    pub fn from_reader(reader: impl Read, delimiter: u8) -> Result<Self, LoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut registry = Self::new();
        for record in reader.deserialize::<RegistryRecord>() {
            registry.insert_record(record?)?;
        }
        Ok(registry)
    }

    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self, LoaderError> {
        let registry = Self::from_reader(File::open(path)?, delimiter)?;
        info!(
            "Read {} known cemeteries from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Adds a record. Returns `false` if the name is already taken, in which case the first
    /// record is kept.
    pub fn insert_record(&mut self, record: RegistryRecord) -> Result<bool, LoaderError> {
        let uri = NamedNode::new(record.uri.as_str()).map_err(|error| LoaderError::InvalidIri {
            name: record.original_narc_name.clone(),
            iri: record.uri.clone(),
            error,
        })?;
        let key = normalize_name(&record.original_narc_name);
        if key.is_empty() {
            warn!("Registry entry {uri} has no name and is ignored");
            return Ok(false);
        }
        if self.entries.contains_key(&key) {
            warn!(
                "Duplicate registry entry for '{}', keeping the first one",
                record.original_narc_name
            );
            return Ok(false);
        }
        let label = record
            .label
            .filter(|label| !label.is_empty())
            .unwrap_or(record.original_narc_name);
        self.entries.insert(key, RegistryEntry { uri, label });
        Ok(true)
    }

    /// Removes and returns the entry of a normalized archival name.
    pub fn take(&mut self, normalized_name: &str) -> Option<RegistryEntry> {
        self.entries.remove(normalized_name)
    }

    pub fn contains(&self, normalized_name: &str) -> bool {
        self.entries.contains_key(normalized_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The identifiers of all entries.
    pub fn uris(&self) -> HashSet<NamedNode> {
        self.entries.values().map(|entry| entry.uri.clone()).collect()
    }

    /// Iterates the entries ordered by name.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }
}

/// Mints identifiers for cemeteries missing from the registry.
#[derive(Clone, Debug)]
pub struct IdentifierAllocator {
    policy: IdentifierPolicy,
    next: u64,
    reserved: HashSet<NamedNode>,
}

impl IdentifierAllocator {
    pub fn new(policy: IdentifierPolicy) -> Self {
        Self::with_reserved(policy, HashSet::new())
    }

    /// Creates an allocator that never hands out one of the `reserved` identifiers.
    pub fn with_reserved(policy: IdentifierPolicy, reserved: HashSet<NamedNode>) -> Self {
        Self {
            next: policy.base,
            policy,
            reserved,
        }
    }

    /// Returns a new identifier. Every call yields a different one.
    pub fn allocate(&mut self) -> Result<NamedNode, MappingError> {
        loop {
            let iri = self.policy.format(self.next);
            let node = NamedNode::new(iri.as_str())
                .map_err(|error| MappingError::InvalidIri { iri, error })?;
            self.next += 1;
            if self.reserved.contains(&node) {
                warn!("Skipping {node}, it is already taken by the registry");
            } else {
                return Ok(node);
            }
        }
    }
}

/// How the identifier of a row was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// The identifier comes from the registry.
    Reconciled(NamedNode),
    /// The identifier was newly allocated.
    Allocated(NamedNode),
}

impl Identity {
    pub fn node(&self) -> &NamedNode {
        match self {
            Identity::Reconciled(node) | Identity::Allocated(node) => node,
        }
    }

    pub fn into_node(self) -> NamedNode {
        match self {
            Identity::Reconciled(node) | Identity::Allocated(node) => node,
        }
    }
}

/// Assigns identifiers to rows, consuming registry entries as they are matched.
#[derive(Clone, Debug)]
pub struct Reconciler {
    registry: Registry,
    allocator: IdentifierAllocator,
    known: usize,
    reconciled: usize,
    allocated: usize,
}

/// The outcome of reconciling all rows of a run.
#[derive(Clone, Debug, Default)]
pub struct ReconciliationReport {
    /// Size of the registry before the run.
    pub known: usize,
    pub reconciled: usize,
    pub allocated: usize,
    /// Registry entries that no row matched.
    pub orphans: Vec<RegistryEntry>,
}

impl Reconciler {
    pub fn new(registry: Registry, policy: IdentifierPolicy) -> Self {
        Self {
            known: registry.len(),
            allocator: IdentifierAllocator::with_reserved(policy, registry.uris()),
            registry,
            reconciled: 0,
            allocated: 0,
        }
    }

    /// Finds the identifier of a cemetery by its normalized archival name.
    ///
    /// A matched registry entry is consumed, a later row with the same name gets a new identifier.
    pub fn reconcile(&mut self, normalized_name: &str) -> Result<Identity, MappingError> {
        if let Some(entry) = self.registry.take(normalized_name) {
            debug!("Found {} for '{normalized_name}'", entry.uri);
            self.reconciled += 1;
            return Ok(Identity::Reconciled(entry.uri));
        }
        let node = self.allocator.allocate()?;
        debug!("Allocated {node} for '{normalized_name}'");
        self.allocated += 1;
        Ok(Identity::Allocated(node))
    }

    /// Ends the run, handing out the entries that were never matched.
    pub fn finish(self) -> ReconciliationReport {
        ReconciliationReport {
            known: self.known,
            reconciled: self.reconciled,
            allocated: self.allocated,
            orphans: self.registry.entries.into_values().collect(),
        }
    }
}
