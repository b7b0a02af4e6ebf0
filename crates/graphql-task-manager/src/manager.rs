use std::collections::HashSet;

use graphql_query_builder::{JoinedQuery, Query, QueryFragment};
use indexmap::{IndexMap, IndexSet};

use crate::{FormRecord, Identifier, MutationConfig, MutationDocument, MutationError, RecordId};

/// Pending create, update and remove tasks of one edited list.
///
/// Every record needs the identifier the server gave it for updates and removals to be
/// detected; records without one are created.
#[derive(Debug, Clone)]
pub struct TaskManager<T> {
    create: IndexMap<usize, T>,
    update: IndexMap<RecordId, T>,
    remove: IndexSet<RecordId>,
}

impl<T> Default for TaskManager<T> {
    fn default() -> Self {
        TaskManager {
            create: IndexMap::new(),
            update: IndexMap::new(),
            remove: IndexSet::new(),
        }
    }
}

impl<T: FormRecord> TaskManager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies the records of `current` against `initial`, replacing the queued tasks.
    ///
    /// - records without an identifier are created, keyed by their position in `current`,
    /// - records sharing a numeric identifier with an initial record and differing from it are updated,
    /// - initial records whose numeric identifier is gone from `current` are removed, which also
    ///   drops their update.
    pub fn build_diff(&mut self, initial: &[T], current: &[T]) {
        self.reset_queues();

        let mut current_ids = HashSet::new();

        for (index, record) in current.iter().enumerate() {
            let id = match record.identifier() {
                Identifier::Absent => {
                    tracing::trace!(index, "record without identifier, creating");
                    self.create.insert(index, record.clone());
                    continue;
                }
                Identifier::Numeric(id) => id,
                Identifier::Invalid => {
                    tracing::trace!(index, "record with a non-numeric identifier, skipping");
                    continue;
                }
            };

            current_ids.insert(id);

            let changed = initial
                .iter()
                .filter(|initial| initial.identifier() == Identifier::Numeric(id))
                .any(|initial| record.differs_from(initial));

            if changed {
                tracing::trace!(id, "record changed, updating");
                self.update.insert(id, record.clone());
            }
        }

        for record in initial {
            let Identifier::Numeric(id) = record.identifier() else {
                continue;
            };

            if !current_ids.contains(&id) {
                tracing::trace!(id, "record gone, removing");
                self.remove.insert(id);
                self.update.shift_remove(&id);
            }
        }

        tracing::debug!(
            created = self.create.len(),
            updated = self.update.len(),
            removed = self.remove.len(),
            "task queues built"
        );
    }

    /// Builds one mutation out of the queued tasks.
    ///
    /// Updates come first, then creations, then a single removal of every removed identifier.
    /// The fragments are joined, nested under the mutation path and the result is parsed as a
    /// GraphQL document. The queues are left untouched.
    pub fn build_mutation_document(&self, config: &MutationConfig<'_, T>) -> Result<MutationDocument, MutationError> {
        let path = config.mutation_path();
        let name = path.innermost().ok_or(MutationError::MissingMutationName)?;

        let updates = self
            .update
            .iter()
            .filter_map(|(id, record)| non_empty((config.update)(record, *id)));

        let creates = self
            .create
            .iter()
            .filter_map(|(index, record)| non_empty((config.create)(record, *index)));

        let remove_ids: Vec<RecordId> = self.remove.iter().copied().collect();
        let removes = (!remove_ids.is_empty())
            .then(|| (config.remove)(&remove_ids))
            .and_then(non_empty);

        let fragments = JoinedQuery::new(updates.chain(creates).chain(removes));

        if fragments.is_empty() {
            tracing::debug!(%path, "nothing to mutate");
            return Ok(MutationDocument::empty());
        }

        let fragment_count = fragments.parts().len();
        let query = path
            .wrappers()
            .fold(Query::new(name).select([fragments]), |query, wrapper| {
                Query::new(wrapper).select([query])
            });

        let document = MutationDocument::parse(format!("mutation {query}"))?;
        tracing::debug!(%path, fragments = fragment_count, mutation = document.as_str(), "mutation built");

        Ok(document)
    }

    /// Drops every queued task.
    pub fn reset_queues(&mut self) {
        self.create.clear();
        self.update.clear();
        self.remove.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.remove.is_empty()
    }

    /// Records to create, by position in the current list.
    pub fn create_queue(&self) -> &IndexMap<usize, T> {
        &self.create
    }

    pub fn update_queue(&self) -> &IndexMap<RecordId, T> {
        &self.update
    }

    pub fn remove_queue(&self) -> &IndexSet<RecordId> {
        &self.remove
    }
}

fn non_empty(fragment: Option<QueryFragment>) -> Option<QueryFragment> {
    fragment.filter(|fragment| !matches!(fragment, QueryFragment::Joined(joined) if joined.is_empty()))
}
