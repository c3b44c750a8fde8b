//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the flowscope
//! crate. Import this module to get the core functionality without having to
//! import each type individually.

// Core resolution
pub use crate::resolver::Resolver;

// Canonical component model
pub use crate::component::{
    CommonValue, ComponentDefinition, ComponentKind, ComponentMetadata, InputDefinition,
    IntoComponent, ResourceRequestDefinition,
};

// Resolved records
pub use crate::graph::{ComponentRecord, InputSlot, Provider, RecordId, ResolvedTree};

// Inventory input format
pub use crate::inventory::{InventoryComponent, InventoryInput, InventoryResourceRequest, TestInventory};

// Report rendering
pub use crate::report::{ReportFormatter, SummaryFormatter};

// Error types
pub use crate::error::{InventoryConversionError, InventoryParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
