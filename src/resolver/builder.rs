use crate::component::{CommonValue, ComponentDefinition};
use crate::graph::arena::RecordArena;
use crate::graph::record::{ComponentRecord, InputSlot, Provider, RecordId};

/// Builds the initial, unresolved record tree from a `ComponentDefinition`.
///
/// Atomic definitions populate their declared slots from the schema; flows
/// recurse into children, preserving declaration order. Each atomic record's
/// own common-mapping entries are applied in a single pass immediately after
/// construction (composite records defer unknown-name checks to propagation,
/// since an ancestor's common value may target a distant descendant's slot).
pub(super) struct GraphBuilder<'a> {
    arena: &'a mut RecordArena,
}

impl<'a> GraphBuilder<'a> {
    pub(super) fn new(arena: &'a mut RecordArena) -> Self {
        Self { arena }
    }

    pub(super) fn build(&mut self, definition: &ComponentDefinition) -> RecordId {
        let mut record = ComponentRecord::new(definition.name.clone(), definition.kind);

        if !definition.is_composite() {
            for input in &definition.inputs {
                record
                    .declared_inputs
                    .insert(input.name.clone(), InputSlot { optional: input.optional });
                let initial = if input.optional {
                    Provider::DefaultValue
                } else {
                    Provider::Unresolved
                };
                record.resolved_providers.insert(input.name.clone(), initial);
            }
            for output in &definition.outputs {
                record.declared_outputs.insert(output.clone());
                record.consumers.insert(output.clone(), Vec::new());
            }
        }

        record.resource_requests = definition.resource_requests.clone();
        for request in &definition.resource_requests {
            // A resource behaves as an always-satisfied output of its requester.
            record.consumers.entry(request.name.clone()).or_default();
        }

        record.common = definition.common.clone();
        record.errors.extend(definition.diagnostics.iter().cloned());

        let id = self.arena.alloc(record);

        if definition.is_composite() {
            for child in &definition.children {
                let child_id = self.build(child);
                self.arena[id].children.push(child_id);
            }
        } else {
            self.apply_own_common(id);
        }

        id
    }

    fn apply_own_common(&mut self, id: RecordId) {
        let entries = self.arena[id].common.clone();
        for (name, value) in entries {
            let record = &mut self.arena[id];
            let active = record.active_name(&name);

            if record.resolved_providers.contains_key(&active) {
                match &value {
                    CommonValue::Pipe(target) if target != &active => {
                        record.rename_slot(&active, target);
                    }
                    CommonValue::Pipe(_) => {}
                    CommonValue::Literal(_) => {
                        record.bind_input(&active, Provider::Parameter);
                    }
                }
            } else if record.consumers.contains_key(&active) {
                if let Some(target) = value.redirection_target() {
                    if target != active {
                        record.rename_slot(&active, target);
                    }
                }
            } else {
                record.errors.push(format!("Unknown input {name}"));
            }
        }
    }
}
