use super::definition::ComponentDefinition;
use crate::error::InventoryConversionError;

/// A trait for custom inventory models that can be converted into a flowscope
/// `ComponentDefinition`.
///
/// This is the primary extension point for making flowscope format-agnostic.
/// The host test framework's class hierarchy stays outside the crate; an
/// adapter reads its schema (declared inputs/outputs, resource requests,
/// common mappings, children) and translates it into the canonical model.
///
/// Schema lookup failures for a *child* component should not abort the whole
/// exploration: substitute [`ComponentDefinition::diagnostic_stub`] for the
/// broken child so the failure surfaces as a diagnostic on that record.
///
/// # Example
///
/// ```rust,no_run
/// use flowscope::component::{
///     ComponentDefinition, ComponentKind, InputDefinition, IntoComponent,
/// };
/// use flowscope::error::InventoryConversionError;
///
/// struct MyTestClass { name: String, inputs: Vec<String> }
///
/// impl IntoComponent for MyTestClass {
///     fn into_component(self) -> Result<ComponentDefinition, InventoryConversionError> {
///         Ok(ComponentDefinition {
///             inputs: self
///                 .inputs
///                 .into_iter()
///                 .map(|name| InputDefinition { name, optional: false })
///                 .collect(),
///             ..ComponentDefinition::new(self.name, ComponentKind::Block)
///         })
///     }
/// }
/// ```
pub trait IntoComponent {
    /// Consumes the object and converts it into a flowscope component definition.
    fn into_component(self) -> Result<ComponentDefinition, InventoryConversionError>;
}
