use std::{fmt, str::FromStr};

use serde_with::DeserializeFromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationPathError {
    #[error("the mutation path `{0}` must end with a field name")]
    MissingFieldName(String),
    #[error("`{segment}` in the mutation path `{path}` is not a valid GraphQL name")]
    InvalidName { path: String, segment: String },
}

/// Field names leading from the mutation root to the field the generated mutations live in,
/// written as a dot-path: `admin.users`.
///
/// Empty segments in front of the last one are skipped when nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq, DeserializeFromStr)]
pub struct MutationPath(Vec<String>);

impl MutationPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The field the mutations are selected on, when there is a non-empty one.
    pub fn innermost(&self) -> Option<&str> {
        self.0.last().map(String::as_str).filter(|name| !name.is_empty())
    }

    /// The wrapping fields from the innermost outward, empty segments left out.
    pub fn wrappers(&self) -> impl Iterator<Item = &str> {
        let outer = self.0.len().saturating_sub(1);
        self.0[..outer]
            .iter()
            .rev()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

fn is_name(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl FromStr for MutationPath {
    type Err = MutationPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<String> = path.split('.').map(|segment| segment.trim().to_owned()).collect();

        if !segments.last().is_some_and(|name| !name.is_empty()) {
            return Err(MutationPathError::MissingFieldName(path.to_owned()));
        }

        if let Some(segment) = segments.iter().find(|segment| !segment.is_empty() && !is_name(segment)) {
            return Err(MutationPathError::InvalidName {
                path: path.to_owned(),
                segment: segment.clone(),
            });
        }

        Ok(MutationPath(segments))
    }
}

impl fmt::Display for MutationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl serde::Serialize for MutationPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<S: Into<String>> FromIterator<S> for MutationPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MutationPath(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for MutationPath {
    fn from(segments: Vec<String>) -> Self {
        MutationPath(segments)
    }
}

impl<const N: usize> From<[&str; N]> for MutationPath {
    fn from(segments: [&str; N]) -> Self {
        segments.into_iter().collect()
    }
}
