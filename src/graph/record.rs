use std::cell::OnceCell;
use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::component::{CommonValue, ComponentKind, ResourceRequestDefinition};

/// Identifies a record inside its `ResolvedTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The source that supplies a resolved input slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// No provider found (yet). Renders as an empty string.
    Unresolved,
    /// Bound directly to a literal common-parameter value.
    Parameter,
    /// Optional input with no provider; the declared default applies.
    DefaultValue,
    /// Supplied by an ancestor (common propagation or a resource request).
    Parent,
    /// Produced by the named earlier sibling.
    Sibling(String),
}

impl Provider {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Provider::Unresolved)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Provider::Unresolved => "",
            Provider::Parameter => "(parameter)",
            Provider::DefaultValue => "(default value)",
            Provider::Parent => "(parent)",
            Provider::Sibling(name) => name,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared shape of a single input slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSlot {
    pub optional: bool,
}

/// One record per test unit (atomic or composite) in the flow tree.
///
/// Declared slots are fixed at construction; only `resolved_providers`,
/// `consumers`, `renames` and `errors` mutate during resolution.
#[derive(Debug, Clone)]
pub struct ComponentRecord {
    pub name: String,
    pub kind: ComponentKind,
    /// Declared inputs, keyed by declared name.
    pub declared_inputs: IndexMap<String, InputSlot>,
    /// Declared outputs, by declared name.
    pub declared_outputs: IndexSet<String>,
    pub resource_requests: Vec<ResourceRequestDefinition>,
    /// Pipe redirections applied so far: declared name -> active name.
    pub renames: IndexMap<String, String>,
    /// Active input name -> provider. Required inputs start `Unresolved`,
    /// optional ones start at `DefaultValue`.
    pub resolved_providers: IndexMap<String, Provider>,
    /// Active output name -> ordered consumer names. Resource names appear
    /// here too: a resource behaves as an always-satisfied output of its
    /// requester.
    pub consumers: IndexMap<String, Vec<String>>,
    /// Diagnostics, own first, descendants aggregated after in pre-order.
    pub errors: Vec<String>,
    /// Ordered children. Order defines left-to-right sibling connectivity.
    pub children: Vec<RecordId>,
    /// Common-parameter mapping carried over from the definition.
    pub common: Vec<(String, CommonValue)>,
    pub(crate) report_cache: OnceCell<String>,
}

impl ComponentRecord {
    pub(crate) fn new(name: String, kind: ComponentKind) -> Self {
        Self {
            name,
            kind,
            declared_inputs: IndexMap::new(),
            declared_outputs: IndexSet::new(),
            resource_requests: Vec::new(),
            renames: IndexMap::new(),
            resolved_providers: IndexMap::new(),
            consumers: IndexMap::new(),
            errors: Vec::new(),
            children: Vec::new(),
            common: Vec::new(),
            report_cache: OnceCell::new(),
        }
    }

    pub fn is_composite(&self) -> bool {
        self.kind.is_composite()
    }

    /// Maps a slot name through this record's renames.
    pub fn active_name(&self, name: &str) -> String {
        self.renames
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// The declared name behind an active slot name (identity if never renamed).
    pub fn declared_name_of<'a>(&'a self, active: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(_, renamed)| renamed.as_str() == active)
            .map(|(declared, _)| declared.as_str())
            .unwrap_or(active)
    }

    /// Redirects the slot currently known as `from_active` to `to`, re-keying
    /// provider/consumer bookkeeping. A second redirection composes with the
    /// first so the declared name keeps pointing at the latest active key.
    pub(crate) fn rename_slot(&mut self, from_active: &str, to: &str) {
        if let Some(active) = self
            .renames
            .values_mut()
            .find(|active| active.as_str() == from_active)
        {
            *active = to.to_string();
        } else {
            self.renames
                .insert(from_active.to_string(), to.to_string());
        }

        if self.resolved_providers.contains_key(from_active) {
            Self::rekey(&mut self.resolved_providers, from_active, to);
        }
        if self.consumers.contains_key(from_active) {
            Self::rekey(&mut self.consumers, from_active, to);
        }
    }

    /// Binds an input if it is still open. Already-bound inputs keep their
    /// provider; an optional slot upgrades from its default.
    pub(crate) fn bind_input(&mut self, active: &str, provider: Provider) -> bool {
        match self.resolved_providers.get_mut(active) {
            Some(slot) if matches!(slot, Provider::Unresolved | Provider::DefaultValue) => {
                *slot = provider;
                true
            }
            _ => false,
        }
    }

    fn rekey<V>(map: &mut IndexMap<String, V>, from: &str, to: &str) {
        let entries = std::mem::take(map);
        *map = entries
            .into_iter()
            .map(|(key, value)| {
                if key == from {
                    (to.to_string(), value)
                } else {
                    (key, value)
                }
            })
            .collect();
    }
}
