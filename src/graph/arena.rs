use std::ops::{Index, IndexMut};

use ahash::AHashMap;

use super::record::{ComponentRecord, RecordId};

/// Flat storage for component records, addressed by stable index.
///
/// Propagation passes write into target records through the arena by id,
/// never by traversing live object references.
#[derive(Debug, Default)]
pub(crate) struct RecordArena {
    records: Vec<ComponentRecord>,
}

impl RecordArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc(&mut self, record: ComponentRecord) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(record);
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

impl Index<RecordId> for RecordArena {
    type Output = ComponentRecord;

    fn index(&self, id: RecordId) -> &ComponentRecord {
        &self.records[id.0]
    }
}

impl IndexMut<RecordId> for RecordArena {
    fn index_mut(&mut self, id: RecordId) -> &mut ComponentRecord {
        &mut self.records[id.0]
    }
}

/// A fully resolved component-record tree for one exploration session.
///
/// Built fresh per exploration request, resolved synchronously, rendered on
/// demand, and discarded when the session ends. Read-only once constructed.
pub struct ResolvedTree {
    arena: RecordArena,
    root: RecordId,
    by_name: AHashMap<String, RecordId>,
}

impl ResolvedTree {
    pub(crate) fn new(arena: RecordArena, root: RecordId) -> Self {
        let mut by_name = AHashMap::with_capacity(arena.len());
        // Records are allocated in pre-order; the first occurrence of a name wins.
        for (index, record) in arena.records.iter().enumerate() {
            by_name
                .entry(record.name.clone())
                .or_insert(RecordId(index));
        }
        Self {
            arena,
            root,
            by_name,
        }
    }

    pub fn root_id(&self) -> RecordId {
        self.root
    }

    pub fn root(&self) -> &ComponentRecord {
        &self.arena[self.root]
    }

    pub fn record(&self, id: RecordId) -> &ComponentRecord {
        &self.arena[id]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// The record's own diagnostics plus aggregated descendant diagnostics,
    /// in pre-order.
    pub fn list_errors(&self, id: RecordId) -> &[String] {
        &self.arena[id].errors
    }

    pub fn find_id(&self, name: &str) -> Option<RecordId> {
        self.by_name.get(name).copied()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ComponentRecord> {
        self.find_id(name).map(|id| &self.arena[id])
    }

    /// Depth-first pre-order walk from the root.
    pub fn iter_pre_order(&self) -> impl Iterator<Item = (RecordId, &ComponentRecord)> + '_ {
        let mut stack = vec![self.root];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let record = &self.arena[id];
            for &child in record.children.iter().rev() {
                stack.push(child);
            }
            Some((id, record))
        })
    }
}
