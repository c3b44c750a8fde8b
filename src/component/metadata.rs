/// Display metadata carried alongside a component definition.
///
/// None of this participates in connectivity resolution; it feeds the
/// explorer's description panel (tags, timeout, docstring).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentMetadata {
    pub tags: Vec<String>,
    /// Timeout in seconds. Rendered in minutes by the summary formatter.
    pub timeout_secs: Option<f64>,
    pub doc: Option<String>,
}
