use std::fmt;

use crate::{Arguments, JoinedQuery, Query, QueryFragment, query::Inline};

/// What an alias points at: a plain field name or a whole nested query.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasTarget {
    Name(String),
    Query(Box<Query>),
}

impl From<&str> for AliasTarget {
    fn from(name: &str) -> Self {
        AliasTarget::Name(name.to_owned())
    }
}

impl From<String> for AliasTarget {
    fn from(name: String) -> Self {
        AliasTarget::Name(name)
    }
}

impl From<Query> for AliasTarget {
    fn from(query: Query) -> Self {
        AliasTarget::Query(Box::new(query))
    }
}

/// `alias: target`, collapsed to `target` when both sides render the same.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    alias: String,
    target: AliasTarget,
}

impl Alias {
    /// # Panics
    ///
    /// When `alias` is empty or `target` is an empty field name.
    pub fn new(alias: impl Into<String>, target: impl Into<AliasTarget>) -> Self {
        let alias = alias.into();
        let target = target.into();

        assert!(!alias.is_empty(), "alias must not be empty");
        assert!(
            !matches!(&target, AliasTarget::Name(name) if name.is_empty()),
            "alias `{alias}` must point at a field"
        );

        Alias { alias, target }
    }

    /// The self alias of a plain field.
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        Alias::new(name.clone(), name)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn target(&self) -> &AliasTarget {
        &self.target
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match &self.target {
            AliasTarget::Name(name) => name.clone(),
            AliasTarget::Query(query) => Inline(&**query).to_string(),
        };

        if value == self.alias {
            f.write_str(&value)
        } else {
            write!(f, "{}: {value}", self.alias)
        }
    }
}

/// A leaf attribute in a selection set, optionally aliased and with its own arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    alias: Alias,
    arguments: Arguments,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Self {
        Leaf {
            alias: Alias::field(name),
            arguments: Arguments::new(),
        }
    }

    pub fn aliased(alias: impl Into<String>, target: impl Into<AliasTarget>) -> Self {
        Leaf {
            alias: Alias::new(alias, target),
            arguments: Arguments::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: impl Into<Arguments>) -> Self {
        self.arguments = arguments.into();
        self
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias)?;
        if !self.arguments.is_empty() {
            write!(f, "({})", self.arguments)?;
        }
        Ok(())
    }
}

/// One entry of a selection set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Leaf(Leaf),
    Nested(QueryFragment),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Leaf(leaf) => write!(f, "{leaf}"),
            Selection::Nested(fragment) => write!(f, "{}", Inline(fragment)),
        }
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Self {
        Selection::Leaf(Leaf::new(name))
    }
}

impl From<String> for Selection {
    fn from(name: String) -> Self {
        Selection::Leaf(Leaf::new(name))
    }
}

impl From<Leaf> for Selection {
    fn from(leaf: Leaf) -> Self {
        Selection::Leaf(leaf)
    }
}

impl From<Query> for Selection {
    fn from(query: Query) -> Self {
        Selection::Nested(QueryFragment::Field(query))
    }
}

impl From<JoinedQuery> for Selection {
    fn from(query: JoinedQuery) -> Self {
        Selection::Nested(QueryFragment::Joined(query))
    }
}

impl From<QueryFragment> for Selection {
    fn from(fragment: QueryFragment) -> Self {
        Selection::Nested(fragment)
    }
}
