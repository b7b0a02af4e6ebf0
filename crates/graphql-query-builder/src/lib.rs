//! # GraphQL query builder
//!
//! Assembles GraphQL query and mutation text from a small tree of nodes:
//!
//! - [`Query`] is a field with arguments and a selection set,
//! - [`JoinedQuery`] concatenates sibling queries without a header of its own,
//! - [`Selection`] is one entry of a selection set: a [`Leaf`] or a nested node,
//! - [`Value`] is an argument value, where [`EnumValue`] renders as a bare enum literal.
//!
//! ```ignore
//! use graphql_query_builder::{Arguments, Query, enum_value};
//!
//! let query = Query::new("users")
//!     .with_arguments(Arguments::new().with("status", enum_value("ACTIVE")))
//!     .select(["id", "name"]);
//!
//! assert_eq!(query.to_string(), "{ users(status: ACTIVE){id name} }");
//! ```
//!
//! The output is a single line; nothing is validated against a schema.

mod query;
mod selection;
mod value;

#[cfg(test)]
mod tests;

pub use query::{JoinedQuery, Query, QueryFragment};
pub use selection::{Alias, AliasTarget, Leaf, Selection};
pub use value::{Arguments, EnumValue, Value, enum_value};
