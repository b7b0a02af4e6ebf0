use std::fmt;

use cynic_parser::ExecutableDocument;

use crate::MutationError;

const EMPTY_MUTATION: &str = "mutation { }";

/// A mutation that parsed as an executable GraphQL document.
pub struct MutationDocument {
    text: String,
    document: Option<ExecutableDocument>,
}

impl MutationDocument {
    /// The document of a task manager with nothing to do. It is never parsed.
    pub(crate) fn empty() -> Self {
        MutationDocument {
            text: EMPTY_MUTATION.to_owned(),
            document: None,
        }
    }

    pub(crate) fn parse(text: String) -> Result<Self, MutationError> {
        match cynic_parser::parse_executable_document(&text) {
            Ok(document) => Ok(MutationDocument {
                text,
                document: Some(document),
            }),
            Err(err) => Err(MutationError::Invalid {
                message: err.to_string(),
                document: text,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// The parsed document, `None` for an empty mutation.
    pub fn document(&self) -> Option<&ExecutableDocument> {
        self.document.as_ref()
    }
}

impl fmt::Display for MutationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for MutationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationDocument")
            .field("text", &self.text)
            .field("is_empty", &self.is_empty())
            .finish()
    }
}
