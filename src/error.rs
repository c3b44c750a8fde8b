use thiserror::Error;

/// Errors that can occur while reading a raw test-inventory dump.
#[derive(Error, Debug, Clone)]
pub enum InventoryParseError {
    #[error("Failed to parse inventory JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom inventory format into a
/// flowscope `ComponentDefinition`.
///
/// These are boundary errors only. Connectivity problems found during
/// resolution (unknown slot names, unconnected inputs) are never raised as
/// errors; they are recorded as diagnostic strings on the owning record.
#[derive(Error, Debug, Clone)]
pub enum InventoryConversionError {
    #[error("Invalid component data: {0}")]
    ValidationError(String),

    #[error("Schema lookup failed for component '{component}': {message}")]
    SchemaLookup { component: String, message: String },
}
