use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use crate::model;

use super::schema::get_store;

/// A person contributing prompts to the deck.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// All dares written by this author, in creation order.
    async fn dares(&self, ctx: &Context<'_>) -> Vec<Dare> {
        get_store(ctx)
            .dares
            .by_author(&self.id)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// All truths written by this author, in creation order.
    async fn truths(&self, ctx: &Context<'_>) -> Vec<Truth> {
        get_store(ctx)
            .truths
            .by_author(&self.id)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
        }
    }
}

/// A truth question.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Truth {
    pub id: ID,
    pub truth: String,
    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Truth {
    /// The author of this truth, or null when the author was removed.
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        get_store(ctx).authors.get(&self.author_id).map(Into::into)
    }
}

impl From<model::Truth> for Truth {
    fn from(t: model::Truth) -> Self {
        Self {
            id: ID(t.id),
            truth: t.truth,
            author_id: t.author_id,
        }
    }
}

/// A dare challenge.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Dare {
    pub id: ID,
    pub dare: String,
    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Dare {
    /// The author of this dare, or null when the author was removed.
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        get_store(ctx).authors.get(&self.author_id).map(Into::into)
    }
}

impl From<model::Dare> for Dare {
    fn from(d: model::Dare) -> Self {
        Self {
            id: ID(d.id),
            dare: d.dare,
            author_id: d.author_id,
        }
    }
}
