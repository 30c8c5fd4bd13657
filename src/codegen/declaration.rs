//! Top-level declaration assembly

use super::context::TypeContext;
use super::naming::capitalize;
use super::transformer::transform;
use serde_json::Value;

/// Build the full text of a declaration file for one sample value.
///
/// - non-empty array root: `export type <Name>Type = Array<<Name>>;` plus an
///   interface for the first element
/// - empty array root: `export type <Name>Type = Array<any>`
/// - anything else: `export interface <Name>Type` for the value itself
///
/// The text always ends with a newline.
pub fn generate_declaration(value: &Value, name: &str) -> String {
    let name = capitalize(name);
    let mut context = TypeContext::new();

    match value {
        Value::Array(items) => match items.first() {
            Some(first) => {
                context.push(&format!("export type {name}Type = Array<{name}>;\n"));
                context.newline();
                context.push(&format!("export interface {name} "));
                transform(first, &mut context, Some(&name));
            }
            None => context.push(&format!("export type {name}Type = Array<any>")),
        },
        other => {
            context.push(&format!("export interface {name}Type "));
            transform(other, &mut context, Some(&name));
        }
    }

    context.newline();
    context.into_code()
}
