//! Functions bound into the template context.
//!
//! Two groups:
//!
//! - string helpers (`toUpper`, `toSnake`, ...) are pure and registered on the
//!   environment once, both as functions and as filters;
//! - schema helpers (`getColumns`, `mapColumnType`) capture the run's model
//!   and type mapping and are passed in with the render context.

use super::Bindings;
use crate::naming;
use crate::typemap::TypeMapping;
use crate::types::SchemaModel;
use minijinja::value::Value;
use minijinja::{context, Environment, Error, ErrorKind};
use std::sync::Arc;

/// Name and implementation of every string helper.
pub const STRING_HELPERS: [(&str, fn(&str) -> String); 6] = [
    ("toUpper", naming::to_upper),
    ("toLower", naming::to_lower),
    ("toSnake", naming::to_snake_case),
    ("toKebab", naming::to_kebab_case),
    ("toCamel", naming::to_camel_case),
    ("toLowerCamel", naming::to_lower_camel_case),
];

/// Names bound in every render context.
const CONTEXT_NAMES: [&str; 3] = ["tables", "getColumns", "mapColumnType"];

/// Globals minijinja provides with its builtins, plus the names it binds
/// inside loops, macros and call blocks.
const BUILTIN_GLOBALS: [&str; 8] = [
    "range", "dict", "namespace", "debug", "loop", "caller", "varargs", "kwargs",
];

/// Whether a template may reference `name` without declaring it.
pub(crate) fn is_bound_name(name: &str) -> bool {
    CONTEXT_NAMES.contains(&name)
        || BUILTIN_GLOBALS.contains(&name)
        || STRING_HELPERS.iter().any(|(helper, _)| *helper == name)
}

pub(crate) fn register_string_helpers(env: &mut Environment<'_>) {
    for (name, convert) in STRING_HELPERS {
        env.add_function(name, string_helper(name, convert));
        env.add_filter(name, string_helper(name, convert));
    }
}

fn string_helper(
    name: &'static str,
    convert: fn(&str) -> String,
) -> impl Fn(Value) -> Result<String, Error> + Clone + Send + Sync + 'static {
    move |value: Value| {
        value
            .as_str()
            .map(convert)
            .ok_or_else(|| invalid_argument(name, "a string", &value))
    }
}

/// Root context for one render: the tables plus the schema helpers.
pub(crate) fn schema_context(bindings: &Bindings) -> Value {
    context! {
        tables => Value::from_serialize(bindings.model.tables()),
        getColumns => get_columns(Arc::clone(&bindings.model)),
        mapColumnType => map_column_type(Arc::clone(&bindings.mapping)),
    }
}

/// `getColumns(table)`: columns fetched for a table record or table name.
fn get_columns(model: Arc<SchemaModel>) -> Value {
    Value::from_function(move |table: Value| -> Result<Value, Error> {
        let name = record_field(&table, "name")
            .ok_or_else(|| invalid_argument("getColumns", "a table or table name", &table))?;
        Ok(Value::from_serialize(model.columns(&name)))
    })
}

/// `mapColumnType(column)`: mapped type of a column record or raw SQL type,
/// empty string when unmapped.
fn map_column_type(mapping: Arc<TypeMapping>) -> Value {
    Value::from_function(move |column: Value| -> Result<String, Error> {
        let sql_type = record_field(&column, "sql_type")
            .ok_or_else(|| invalid_argument("mapColumnType", "a column or SQL type", &column))?;
        Ok(mapping.resolve(&sql_type).unwrap_or_default().to_string())
    })
}

/// Reads `field` off a record, or takes the value itself when it is a string.
fn record_field(value: &Value, field: &str) -> Option<String> {
    if let Some(s) = value.as_str() {
        return Some(s.to_owned());
    }
    value.get_attr(field).ok()?.as_str().map(str::to_owned)
}

fn invalid_argument(helper: &str, expected: &str, got: &Value) -> Error {
    Error::new(
        ErrorKind::InvalidOperation,
        format!("{helper} expects {expected}, got {}", got.kind()),
    )
}
