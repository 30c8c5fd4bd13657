//! Declaration codegen module
//!
//! Turns one sample JSON value into TypeScript declaration text.
//!
//! # Overview
//!
//! - `TypeContext` - text buffer with indentation tracking
//! - `transform` - structural transformer for any JSON value
//! - `generate_declaration` - wraps a transformed sample in named declarations
//! - `interface_name` - derives declaration names from endpoint paths
//!
//! Inference works from a single sample, so element types and optionality
//! are a best-effort guess: arrays are typed by their first element, and a
//! field whose sample is `null` or `""` is marked optional.

mod context;
mod declaration;
mod naming;
mod transformer;

pub use context::TypeContext;
pub use declaration::generate_declaration;
pub use naming::{anonymous_name, capitalize, interface_name, pascal_case};
pub use transformer::{emit, flush_hoisted, transform, HoistedDeclaration, HOIST_THRESHOLD};
