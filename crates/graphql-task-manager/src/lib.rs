//! # GraphQL task manager
//!
//! Keeps track of the create, update and remove tasks of a list of records edited by a user,
//! and turns them into a single batched mutation:
//!
//! ```ignore
//! use graphql_query_builder::Query;
//! use graphql_task_manager::{JsonRecord, MutationConfig, TaskManager};
//!
//! # fn example(
//! #     initial: Vec<JsonRecord>,
//! #     current: Vec<JsonRecord>,
//! # ) -> Result<(), graphql_task_manager::MutationError> {
//! let mut tasks = TaskManager::new();
//! tasks.build_diff(&initial, &current);
//!
//! let config = MutationConfig::new(["admin", "users"])
//!     .on_remove(|ids| Some(Query::new("remove").with_arguments([("ids", ids.to_vec())]).without_body()));
//!
//! let mutation = tasks.build_mutation_document(&config)?;
//! assert!(mutation.as_str().starts_with("mutation"));
//! # Ok(())
//! # }
//! ```
//!
//! Only numeric identifiers decide whether a record is updated or removed: a record without
//! an identifier is always created, and a record whose identifier is not a number takes part
//! in neither the update nor the removal queue.

mod config;
mod document;
mod error;
mod manager;
mod path;
mod record;

#[cfg(test)]
mod tests;

pub use config::MutationConfig;
pub use document::MutationDocument;
pub use error::MutationError;
pub use manager::TaskManager;
pub use path::{MutationPath, MutationPathError};
pub use record::{FormRecord, Identifier, JsonRecord, RecordId};
