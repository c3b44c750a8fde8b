//! # flowscope - Static Connectivity Explorer for Test Flows
//!
//! **flowscope** statically analyzes the component tree of a composite test
//! flow and determines, for every declared input of every component, which
//! upstream source supplies it: a literal common parameter, a default value,
//! an ancestor-provided resource, or an earlier sibling's output. Required
//! inputs with no provider are flagged, and every component gets a
//! human-readable provenance report - all before any test actually runs.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a test component. The primary workflow is:
//!
//! 1.  **Load Your Inventory**: Parse your test framework's metadata (e.g.
//!     from a JSON dump) into your own Rust structs, or use the bundled
//!     [`inventory`] types.
//! 2.  **Convert to flowscope's Model**: Implement the `IntoComponent` trait
//!     to translate your structs into a `ComponentDefinition` tree.
//! 3.  **Resolve**: `Resolver::build_and_resolve` builds a record per
//!     component and runs the propagation passes (common parameters, then
//!     resources, then sibling outputs) followed by the unconnected-input
//!     detector.
//! 4.  **Render**: Ask the `ReportFormatter` for a per-component provenance
//!     report, or the `SummaryFormatter` for the metadata panel text.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowscope::prelude::*;
//!
//! // A flow with two children: SetupBlock produces "token",
//! // LoginCase requires it.
//! let flow = ComponentDefinition {
//!     children: vec![
//!         ComponentDefinition {
//!             outputs: vec!["token".to_string()],
//!             ..ComponentDefinition::new("SetupBlock", ComponentKind::Block)
//!         },
//!         ComponentDefinition {
//!             inputs: vec![InputDefinition {
//!                 name: "token".to_string(),
//!                 optional: false,
//!             }],
//!             ..ComponentDefinition::new("LoginCase", ComponentKind::Case)
//!         },
//!     ],
//!     ..ComponentDefinition::new("LoginFlow", ComponentKind::Flow)
//! };
//!
//! let tree = Resolver::new().build_and_resolve(&flow);
//!
//! let case = tree.find_by_name("LoginCase").unwrap();
//! assert_eq!(
//!     case.resolved_providers["token"],
//!     Provider::Sibling("SetupBlock".to_string())
//! );
//! assert!(case.errors.is_empty());
//!
//! println!("{}", ReportFormatter::render_report(case));
//! ```

pub mod component;
pub mod error;
pub mod graph;
pub mod inventory;
pub mod prelude;
pub mod report;
pub mod resolver;
