use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::model;
use crate::store::Store;

use super::types::*;

pub type TordSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> TordSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn get_store<'a>(ctx: &Context<'a>) -> &'a Arc<Store> {
    ctx.data_unchecked::<Arc<Store>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Option<Author> {
        get_store(ctx).authors.get(&id).map(Into::into)
    }

    /// Get a single truth by ID
    async fn truth(&self, ctx: &Context<'_>, id: ID) -> Option<Truth> {
        get_store(ctx).truths.get(&id).map(Into::into)
    }

    /// Get a single dare by ID
    async fn dare(&self, ctx: &Context<'_>, id: ID) -> Option<Dare> {
        get_store(ctx).dares.get(&id).map(Into::into)
    }

    /// List all authors in creation order
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        get_store(ctx)
            .authors
            .list()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// List all truths in creation order
    async fn truths(&self, ctx: &Context<'_>) -> Vec<Truth> {
        get_store(ctx)
            .truths
            .list()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// List all dares in creation order
    async fn dares(&self, ctx: &Context<'_>) -> Vec<Dare> {
        get_store(ctx)
            .dares
            .list()
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a new author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Author {
        get_store(ctx)
            .authors
            .insert(model::Author::new(name))
            .into()
    }

    /// Add a new truth. The author id is not checked; a dangling reference
    /// resolves to a null author.
    async fn add_truth(&self, ctx: &Context<'_>, truth: String, author_id: ID) -> Truth {
        get_store(ctx)
            .truths
            .insert(model::Truth::new(truth, author_id.0))
            .into()
    }

    /// Add a new dare. The author id is not checked; a dangling reference
    /// resolves to a null author.
    async fn add_dare(&self, ctx: &Context<'_>, dare: String, author_id: ID) -> Dare {
        get_store(ctx)
            .dares
            .insert(model::Dare::new(dare, author_id.0))
            .into()
    }

    /// Rename an author; errors when the id does not exist
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
    ) -> async_graphql::Result<Author> {
        let author = get_store(ctx).authors.update(&id, |a| a.name = name)?;
        Ok(author.into())
    }

    /// Rewrite a truth's question; errors when the id does not exist
    async fn update_truth(
        &self,
        ctx: &Context<'_>,
        id: ID,
        truth: String,
    ) -> async_graphql::Result<Truth> {
        let updated = get_store(ctx).truths.update(&id, |t| t.truth = truth)?;
        Ok(updated.into())
    }

    /// Rewrite a dare's challenge; errors when the id does not exist
    async fn update_dare(
        &self,
        ctx: &Context<'_>,
        id: ID,
        dare: String,
    ) -> async_graphql::Result<Dare> {
        let updated = get_store(ctx).dares.update(&id, |d| d.dare = dare)?;
        Ok(updated.into())
    }

    /// Remove an author, returning it, or null when nothing matched.
    /// Their truths and dares stay in the deck with a dangling author.
    async fn remove_author(&self, ctx: &Context<'_>, id: ID) -> Option<Author> {
        get_store(ctx).authors.remove(&id).map(Into::into)
    }

    /// Remove a truth, returning it, or null when nothing matched
    async fn remove_truth(&self, ctx: &Context<'_>, id: ID) -> Option<Truth> {
        get_store(ctx).truths.remove(&id).map(Into::into)
    }

    /// Remove a dare, returning it, or null when nothing matched
    async fn remove_dare(&self, ctx: &Context<'_>, id: ID) -> Option<Dare> {
        get_store(ctx).dares.remove(&id).map(Into::into)
    }
}
