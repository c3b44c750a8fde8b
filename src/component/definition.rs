use super::metadata::ComponentMetadata;

/// The closed set of test-component kinds.
///
/// `Case` and `Block` are atomic units that declare their own inputs and
/// outputs. `Flow` is composite and delegates to its ordered children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Case,
    Block,
    Flow,
}

impl ComponentKind {
    pub fn is_composite(&self) -> bool {
        matches!(self, ComponentKind::Flow)
    }
}

/// A value bound to a name in a component's common-parameter mapping.
///
/// A `Pipe` is a redirection marker: instead of binding a literal, it says
/// "use this other slot name". Two pipes compare equal iff their targets are
/// equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonValue {
    /// Redirect the matched slot to a differently-named upstream/downstream slot.
    Pipe(String),
    /// Bind the matched input directly to a literal value.
    Literal(serde_json::Value),
}

impl CommonValue {
    /// The redirection target, or `None` if this is not a redirection marker.
    pub fn redirection_target(&self) -> Option<&str> {
        match self {
            CommonValue::Pipe(target) => Some(target),
            CommonValue::Literal(_) => None,
        }
    }
}

/// A declared input slot of an atomic component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDefinition {
    pub name: String,
    /// Optional inputs have a fallback default and are never flagged as unconnected.
    pub optional: bool,
}

/// A named, typed dependency supplied externally, visible to all descendants
/// of the requesting component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequestDefinition {
    pub name: String,
    pub kind: String,
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// The complete, canonical definition of a test component, ready for
/// resolution. This is the target structure for any custom inventory
/// conversion.
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    pub name: String,
    pub kind: ComponentKind,
    /// Declared inputs. Ignored for composite kinds, which derive their
    /// connectivity from their children.
    pub inputs: Vec<InputDefinition>,
    /// Declared outputs. Ignored for composite kinds.
    pub outputs: Vec<String>,
    pub resource_requests: Vec<ResourceRequestDefinition>,
    /// Common-parameter mapping, in declaration order.
    pub common: Vec<(String, CommonValue)>,
    /// Ordered children. Order defines left-to-right sibling connectivity.
    pub children: Vec<ComponentDefinition>,
    pub metadata: ComponentMetadata,
    /// Boundary diagnostics attached during conversion (e.g. a failed schema
    /// lookup for this component). Copied onto the record verbatim.
    pub diagnostics: Vec<String>,
}

impl ComponentDefinition {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
            resource_requests: Vec::new(),
            common: Vec::new(),
            children: Vec::new(),
            metadata: ComponentMetadata::default(),
            diagnostics: Vec::new(),
        }
    }

    /// A placeholder for a component whose schema could not be read.
    ///
    /// Used at the conversion boundary so that one broken component never
    /// aborts resolution of the rest of the tree.
    pub fn diagnostic_stub(name: impl Into<String>, message: String) -> Self {
        let mut stub = Self::new(name, ComponentKind::Case);
        stub.diagnostics.push(message);
        stub
    }

    pub fn is_composite(&self) -> bool {
        self.kind.is_composite()
    }
}
