#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("Mutation is not valid: {message}")]
    Invalid {
        message: String,
        /// The rejected text.
        document: String,
    },
    #[error("the mutation path does not end with the name of a mutation field")]
    MissingMutationName,
}
