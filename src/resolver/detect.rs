use crate::graph::arena::RecordArena;
use crate::graph::record::RecordId;

/// Post-pass that flags required inputs left without a provider.
///
/// Must run only after connectivity resolution has completed on the whole
/// tree: a sibling connection made while processing a later sibling can still
/// resolve an input, so this pass is not interleavable with propagation.
pub(super) struct UnconnectedDetector<'a> {
    arena: &'a mut RecordArena,
}

impl<'a> UnconnectedDetector<'a> {
    pub(super) fn new(arena: &'a mut RecordArena) -> Self {
        Self { arena }
    }

    pub(super) fn run(&mut self, root: RecordId) {
        self.mark(root);
        self.aggregate(root);
    }

    fn mark(&mut self, id: RecordId) {
        let record = &mut self.arena[id];
        if !record.is_composite() {
            // Optional inputs start at `DefaultValue`, so anything still
            // `Unresolved` here is a required input with no provider.
            let unconnected: Vec<String> = record
                .resolved_providers
                .iter()
                .filter(|(_, provider)| !provider.is_resolved())
                .map(|(name, _)| name.clone())
                .collect();
            for name in unconnected {
                record.errors.push(format!("Input {name} is not connected!"));
            }
        }

        let child_ids = self.arena[id].children.clone();
        for child in child_ids {
            self.mark(child);
        }
    }

    /// Aggregates (not replaces) descendant errors upward, preserving
    /// pre-order: a record's own errors first, then each child's aggregated
    /// errors in child order.
    fn aggregate(&mut self, id: RecordId) {
        let child_ids = self.arena[id].children.clone();
        let mut inherited = Vec::new();
        for child in child_ids {
            self.aggregate(child);
            inherited.extend(self.arena[child].errors.iter().cloned());
        }
        self.arena[id].errors.extend(inherited);
    }
}
