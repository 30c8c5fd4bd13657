//! Structural transformer
//!
//! Walks a JSON value and emits a structural type fragment describing its
//! shape. Arrays become positional tuples, objects become inline shapes, and
//! large objects found as array elements are hoisted into named declarations.

use super::context::TypeContext;
use super::naming::pascal_case;
use serde_json::{Map, Value};

/// Array elements with more own keys than this are hoisted instead of inlined
pub const HOIST_THRESHOLD: usize = 5;

/// A nested object shape promoted to its own named declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoistedDeclaration {
    /// Declaration name, e.g. `UserItem`
    pub name: String,
    /// Declaration body, starting with `{`
    pub body: String,
}

/// Transform `value` into `context` and return the accumulated text.
///
/// Any hoisted declarations discovered in the tree are appended after the
/// main fragment, each preceded by a blank line.
pub fn transform<'a>(value: &Value, context: &'a mut TypeContext, name: Option<&str>) -> &'a str {
    let hoisted = emit(value, context, name);
    flush_hoisted(context, &hoisted);
    context.code()
}

/// Append hoisted declarations, in order, after what is already in `context`
pub fn flush_hoisted(context: &mut TypeContext, hoisted: &[HoistedDeclaration]) {
    for declaration in hoisted {
        context.newline();
        context.newline();
        context.push("export interface ");
        context.push(&declaration.name);
        context.push(" ");
        context.push(&declaration.body);
    }
}

/// Emit the fragment for `value` and return the declarations it hoisted.
///
/// Hoisted declarations are not written into `context`; the caller decides
/// where they go. Nested hoists are flattened in discovery order.
pub fn emit(value: &Value, context: &mut TypeContext, name: Option<&str>) -> Vec<HoistedDeclaration> {
    match value {
        Value::Array(items) => emit_tuple(items, context),
        Value::Object(map) => emit_object(map, context, name),
        Value::Null => {
            context.push("unknown");
            Vec::new()
        }
        Value::Bool(_) => {
            context.push("boolean");
            Vec::new()
        }
        Value::Number(_) => {
            context.push("number");
            Vec::new()
        }
        Value::String(_) => {
            context.push("string");
            Vec::new()
        }
    }
}

fn emit_tuple(items: &[Value], context: &mut TypeContext) -> Vec<HoistedDeclaration> {
    let mut hoisted = Vec::new();
    context.push("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            context.push(", ");
        }
        hoisted.extend(emit(item, context, None));
    }
    context.push("]");
    hoisted
}

fn emit_object(
    map: &Map<String, Value>,
    context: &mut TypeContext,
    name: Option<&str>,
) -> Vec<HoistedDeclaration> {
    if map.is_empty() {
        context.push("{}");
        return Vec::new();
    }

    let mut hoisted = Vec::new();
    context.push("{");
    context.indent();

    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            context.push(",");
            context.newline();
        }

        push_key(context, key);
        if is_optional(value) {
            context.push("?");
        }
        context.push(": ");

        match value {
            Value::Array(items) => match items.first() {
                Some(first) => hoisted.extend(emit_array_field(first, key, context, name)),
                None => context.push("Array<any>"),
            },
            other => hoisted.extend(emit(other, context, name)),
        }
    }

    context.deindent();
    context.push("}");
    hoisted
}

/// Emit `Array<...>` for a field whose sample is a non-empty array.
///
/// Only the first element is inspected.
fn emit_array_field(
    first: &Value,
    key: &str,
    context: &mut TypeContext,
    name: Option<&str>,
) -> Vec<HoistedDeclaration> {
    let item_name = item_name(name, key);

    match first {
        Value::Object(map) if map.len() > HOIST_THRESHOLD => {
            context.push("Array<");
            context.push(&item_name);
            context.push(">");

            let mut child = TypeContext::new();
            let nested = emit(first, &mut child, Some(&item_name));

            let mut hoisted = Vec::with_capacity(nested.len() + 1);
            hoisted.push(HoistedDeclaration {
                name: item_name,
                body: child.into_code(),
            });
            hoisted.extend(nested);
            hoisted
        }
        _ => {
            context.push("Array<");
            let hoisted = emit(first, context, Some(&item_name));
            context.push(">");
            hoisted
        }
    }
}

/// Element name for an array field. With a hint every array field in the
/// object gets the same `<hint>Item`, so sibling hoists collide by name.
fn item_name(name: Option<&str>, key: &str) -> String {
    match name {
        Some(name) => format!("{name}Item"),
        None => format!("{}Item", pascal_case(key)),
    }
}

/// A present-but-null or empty-string sample marks the field optional
fn is_optional(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn push_key(context: &mut TypeContext, key: &str) {
    if is_identifier(key) {
        context.push(key);
    } else {
        context.push(&Value::String(key.to_owned()).to_string());
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
