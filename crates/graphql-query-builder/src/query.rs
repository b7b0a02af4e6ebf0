use std::fmt;

use crate::{Alias, AliasTarget, Arguments, Selection};

/// A field with arguments and a selection set.
///
/// Renders as `{ header{body} }`, or `{ header }` once [`Query::without_body`] was called.
/// When nested inside another query, the outer `{ ` and ` }` are dropped so the field is
/// inlined into its parent's selection set.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    head: Alias,
    arguments: Arguments,
    body: Vec<Selection>,
    without_body: bool,
}

impl Query {
    pub fn new(name: impl Into<String>) -> Self {
        Query::from_alias(Alias::field(name))
    }

    /// A query rendered as `alias: target`, where the target is a field name or another query.
    pub fn aliased(alias: impl Into<String>, target: impl Into<AliasTarget>) -> Self {
        Query::from_alias(Alias::new(alias, target))
    }

    fn from_alias(head: Alias) -> Self {
        Query {
            head,
            arguments: Arguments::new(),
            body: Vec::new(),
            without_body: false,
        }
    }

    pub fn with_arguments(mut self, arguments: impl Into<Arguments>) -> Self {
        self.arguments = arguments.into();
        self
    }

    /// Appends selections to the body.
    pub fn select<I>(mut self, selections: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Selection>,
    {
        self.body.extend(selections.into_iter().map(Into::into));
        self
    }

    /// Replaces the values of arguments this query already has. Unknown names are ignored.
    pub fn filter(mut self, arguments: impl Into<Arguments>) -> Self {
        self.arguments.update_existing(arguments.into());
        self
    }

    /// Only the header gets rendered, the selection set is left out.
    pub fn without_body(mut self) -> Self {
        self.without_body = true;
        self
    }

    /// Concatenates this query with its siblings under one anonymous container.
    pub fn join<I>(self, others: I) -> JoinedQuery
    where
        I: IntoIterator,
        I::Item: Into<QueryFragment>,
    {
        JoinedQuery::new(std::iter::once(QueryFragment::Field(self)).chain(others.into_iter().map(Into::into)))
    }

    pub fn alias(&self) -> &Alias {
        &self.head
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn selections(&self) -> &[Selection] {
        &self.body
    }

    pub fn has_body(&self) -> bool {
        !self.without_body
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        if !self.arguments.is_empty() {
            write!(f, "({})", self.arguments)?;
        }
        Ok(())
    }
}

/// Sibling queries rendered next to each other, without a header of their own.
///
/// There is no way to add selections to a joined query or to drop its body: it only exists to
/// concatenate operations, e.g. several mutation fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinedQuery {
    parts: Vec<QueryFragment>,
}

impl JoinedQuery {
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QueryFragment>,
    {
        JoinedQuery {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// A new container holding this one followed by `others`.
    pub fn join<I>(self, others: I) -> JoinedQuery
    where
        I: IntoIterator,
        I::Item: Into<QueryFragment>,
    {
        JoinedQuery::new(std::iter::once(QueryFragment::Joined(self)).chain(others.into_iter().map(Into::into)))
    }

    pub fn parts(&self) -> &[QueryFragment] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Either kind of query node.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFragment {
    Field(Query),
    Joined(JoinedQuery),
}

impl From<Query> for QueryFragment {
    fn from(query: Query) -> Self {
        QueryFragment::Field(query)
    }
}

impl From<JoinedQuery> for QueryFragment {
    fn from(query: JoinedQuery) -> Self {
        QueryFragment::Joined(query)
    }
}

/// Rendering of a node without its outer `{ ` and ` }`.
pub(crate) trait WriteInline {
    fn write_inline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

pub(crate) struct Inline<'a, T: ?Sized>(pub(crate) &'a T);

impl<T: WriteInline + ?Sized> fmt::Display for Inline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_inline(f)
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index != 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl WriteInline for Query {
    fn write_inline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        if self.without_body {
            return Ok(());
        }
        f.write_str("{")?;
        write_separated(f, &self.body)?;
        f.write_str("}")
    }
}

impl WriteInline for JoinedQuery {
    fn write_inline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, part) in self.parts.iter().enumerate() {
            if index != 0 {
                f.write_str(" ")?;
            }
            part.write_inline(f)?;
        }
        Ok(())
    }
}

impl WriteInline for QueryFragment {
    fn write_inline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryFragment::Field(query) => query.write_inline(f),
            QueryFragment::Joined(query) => query.write_inline(f),
        }
    }
}

macro_rules! impl_display_wrapped {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{{ {} }}", Inline(self))
                }
            }
        )*
    };
}

impl_display_wrapped!(Query, JoinedQuery, QueryFragment);
