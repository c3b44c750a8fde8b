use indexmap::IndexMap;

use crate::component::CommonValue;
use crate::graph::arena::RecordArena;
use crate::graph::record::{Provider, RecordId};

/// What is being delivered to a slot during propagation.
#[derive(Clone, Copy)]
enum Delivery<'a> {
    /// A common-parameter entry: a literal or a pipe redirection.
    Common(&'a CommonValue),
    /// A resource, presence-only. Never produces an unknown-name diagnostic.
    Resource,
    /// An earlier sibling's output, carrying the sibling's name.
    Output(&'a str),
}

/// Fills `resolved_providers` and `consumers` across the whole tree.
///
/// Three strictly ordered global passes: common-parameter propagation, then
/// resource propagation, then sibling connection. Each runs top-down,
/// depth-first; the sibling pass connects a composite's own children
/// left-to-right before recursing into grandchildren.
pub(super) struct ConnectivityResolver<'a> {
    arena: &'a mut RecordArena,
}

impl<'a> ConnectivityResolver<'a> {
    pub(super) fn new(arena: &'a mut RecordArena) -> Self {
        Self { arena }
    }

    pub(super) fn resolve(&mut self, root: RecordId) {
        self.propagate_common(root);
        self.propagate_resources(root);
        self.connect_siblings(root);
    }

    fn propagate_common(&mut self, id: RecordId) {
        let child_ids = self.arena[id].children.clone();

        if self.arena[id].is_composite() {
            let entries = self.arena[id].common.clone();
            for (name, value) in &entries {
                let mut accepted = false;
                for &child in &child_ids {
                    accepted |= self.deliver(child, name, Delivery::Common(value));
                }
                if !accepted {
                    self.arena[id].errors.push(format!("Unknown input {name}"));
                }
            }
        }

        for &child in &child_ids {
            self.propagate_common(child);
        }
    }

    fn propagate_resources(&mut self, id: RecordId) {
        let child_ids = self.arena[id].children.clone();
        let names: Vec<String> = self.arena[id]
            .resource_requests
            .iter()
            .map(|request| request.name.clone())
            .collect();

        for name in &names {
            if self.arena[id].is_composite() {
                for &child in &child_ids {
                    self.deliver(child, name, Delivery::Resource);
                }
            } else {
                // An atomic unit's own resource satisfies its same-named input.
                let active = self.arena[id].active_name(name);
                self.arena[id].bind_input(&active, Provider::Parent);
            }
        }

        for &child in &child_ids {
            self.propagate_resources(child);
        }
    }

    fn connect_siblings(&mut self, id: RecordId) {
        let child_ids = self.arena[id].children.clone();

        for (index, &producer) in child_ids.iter().enumerate() {
            let producer_name = self.arena[producer].name.clone();
            for (output, producing_id) in self.exported_outputs(producer) {
                for &later in &child_ids[index + 1..] {
                    let consumer_name = self.arena[later].name.clone();
                    if self.deliver(later, &output, Delivery::Output(&producer_name)) {
                        if let Some(consumers) = self.arena[producing_id].consumers.get_mut(&output)
                        {
                            consumers.push(consumer_name);
                        }
                    }
                }
            }
        }

        for &child in &child_ids {
            self.connect_siblings(child);
        }
    }

    /// Output names a record offers to its later siblings, paired with the
    /// record that actually produces each one. Atomic records export their
    /// active outputs and resources; composites export the union of their
    /// descendants' exports (leftmost producer wins a name conflict).
    fn exported_outputs(&self, id: RecordId) -> Vec<(String, RecordId)> {
        let record = &self.arena[id];
        let mut exported: IndexMap<String, RecordId> = IndexMap::new();
        for output in record.consumers.keys() {
            exported.entry(output.clone()).or_insert(id);
        }
        for &child in &record.children {
            for (output, producing_id) in self.exported_outputs(child) {
                exported.entry(output).or_insert(producing_id);
            }
        }
        exported.into_iter().collect()
    }

    /// Attempts delivery of a named value to one record.
    ///
    /// The name is mapped through the record's own renames first. Composite
    /// records with no direct match recurse into every child; delivery never
    /// short-circuits, since one entry may feed several descendants.
    ///
    /// The returned flag means "matched a declared slot" for common and
    /// resource deliveries (it drives the composite's unknown-name check) and
    /// "actually bound an input" for sibling-output deliveries (it drives the
    /// consumers list).
    fn deliver(&mut self, id: RecordId, name: &str, delivery: Delivery<'_>) -> bool {
        let active = self.arena[id].active_name(name);
        let is_input = self.arena[id].resolved_providers.contains_key(&active);
        let is_output = !is_input && self.arena[id].consumers.contains_key(&active);

        if is_input {
            let record = &mut self.arena[id];
            match delivery {
                Delivery::Common(CommonValue::Pipe(target)) => {
                    if target != &active {
                        record.rename_slot(&active, target);
                    }
                    true
                }
                Delivery::Common(CommonValue::Literal(_)) => {
                    record.bind_input(&active, Provider::Parameter);
                    true
                }
                Delivery::Resource => {
                    record.bind_input(&active, Provider::Parent);
                    true
                }
                Delivery::Output(sibling) => {
                    record.bind_input(&active, Provider::Sibling(sibling.to_string()))
                }
            }
        } else if is_output {
            let record = &mut self.arena[id];
            match delivery {
                Delivery::Common(CommonValue::Pipe(target)) => {
                    if target != &active {
                        record.rename_slot(&active, target);
                    }
                    true
                }
                // A literal matching a declared output is a known name; no bookkeeping.
                Delivery::Common(CommonValue::Literal(_)) => true,
                Delivery::Resource => true,
                // Outputs never consume other outputs.
                Delivery::Output(_) => false,
            }
        } else if self.arena[id].is_composite() {
            let child_ids = self.arena[id].children.clone();
            let mut accepted = false;
            for child in child_ids {
                accepted |= self.deliver(child, name, delivery);
            }
            accepted
        } else {
            false
        }
    }
}
