use graphql_query_builder::QueryFragment;

use crate::{MutationPath, RecordId};

type CreateStrategy<'a, T> = Box<dyn Fn(&T, usize) -> Option<QueryFragment> + 'a>;
type UpdateStrategy<'a, T> = Box<dyn Fn(&T, RecordId) -> Option<QueryFragment> + 'a>;
type RemoveStrategy<'a> = Box<dyn Fn(&[RecordId]) -> Option<QueryFragment> + 'a>;

/// Where the generated mutations go and how each of them is built.
///
/// A strategy that is not set, or that returns `None`, contributes nothing to the document.
pub struct MutationConfig<'a, T> {
    pub(crate) mutation_path: MutationPath,
    pub(crate) create: CreateStrategy<'a, T>,
    pub(crate) update: UpdateStrategy<'a, T>,
    pub(crate) remove: RemoveStrategy<'a>,
}

impl<'a, T: 'a> MutationConfig<'a, T> {
    pub fn new(mutation_path: impl Into<MutationPath>) -> Self {
        MutationConfig {
            mutation_path: mutation_path.into(),
            create: Box::new(|_: &T, _: usize| None),
            update: Box::new(|_: &T, _: RecordId| None),
            remove: Box::new(|_: &[RecordId]| None),
        }
    }

    /// Called once per created record with its position in the current list.
    pub fn on_create<F, Q>(mut self, strategy: F) -> Self
    where
        F: Fn(&T, usize) -> Option<Q> + 'a,
        Q: Into<QueryFragment>,
    {
        self.create = Box::new(move |record: &T, index: usize| strategy(record, index).map(Into::into));
        self
    }

    /// Called once per updated record with its identifier.
    pub fn on_update<F, Q>(mut self, strategy: F) -> Self
    where
        F: Fn(&T, RecordId) -> Option<Q> + 'a,
        Q: Into<QueryFragment>,
    {
        self.update = Box::new(move |record: &T, id: RecordId| strategy(record, id).map(Into::into));
        self
    }

    /// Called once with every removed identifier, when there is at least one.
    pub fn on_remove<F, Q>(mut self, strategy: F) -> Self
    where
        F: Fn(&[RecordId]) -> Option<Q> + 'a,
        Q: Into<QueryFragment>,
    {
        self.remove = Box::new(move |ids: &[RecordId]| strategy(ids).map(Into::into));
        self
    }

    pub fn mutation_path(&self) -> &MutationPath {
        &self.mutation_path
    }
}
