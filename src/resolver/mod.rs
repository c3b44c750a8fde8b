mod builder;
mod detect;
mod propagate;

use builder::GraphBuilder;
use detect::UnconnectedDetector;
use propagate::ConnectivityResolver;

use crate::component::ComponentDefinition;
use crate::graph::arena::{RecordArena, ResolvedTree};

/// Session-scoped resolution context.
///
/// One `Resolver` serves one exploration request: it owns the record arena
/// while the builder, the propagation passes and the detector run, then hands
/// the arena over to the returned [`ResolvedTree`]. No bookkeeping outlives
/// the session.
pub struct Resolver {
    arena: RecordArena,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            arena: RecordArena::new(),
        }
    }

    /// Builds the record tree for `definition` and resolves it to completion.
    ///
    /// Pass order is part of the contract: common-parameter propagation
    /// completes globally, then resource propagation, then sibling
    /// connection, then the unconnected-input detector.
    pub fn build_and_resolve(mut self, definition: &ComponentDefinition) -> ResolvedTree {
        let root = GraphBuilder::new(&mut self.arena).build(definition);
        ConnectivityResolver::new(&mut self.arena).resolve(root);
        UnconnectedDetector::new(&mut self.arena).run(root);
        ResolvedTree::new(self.arena, root)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
