// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_trait::async_trait;

use crate::{ServiceError, Statement};

/// One page of a statement query.
///
/// The remote service omits the results collection altogether once a query has nothing more to
/// return, and that omission is how callers learn a query is exhausted. Whether the omission
/// shows up as a missing key or a missing attribute in the raw response, the transport maps it
/// to [`EntityPage::Exhausted`].
#[derive(Debug, Clone, PartialEq)]
pub enum EntityPage<E> {
    Results(Vec<E>),
    Exhausted,
}

impl<E> EntityPage<E> {
    pub fn into_results(self) -> Option<Vec<E>> {
        match self {
            EntityPage::Results(results) => Some(results),
            EntityPage::Exhausted => None,
        }
    }
}

impl<E> From<Option<Vec<E>>> for EntityPage<E> {
    fn from(results: Option<Vec<E>>) -> Self {
        match results {
            Some(results) => EntityPage::Results(results),
            None => EntityPage::Exhausted,
        }
    }
}

/// An entity that carries a server-assigned identifier
pub trait Identified {
    fn id(&self) -> i64;

    /// The display name, when the record has one (used only for diagnostics)
    fn name(&self) -> Option<&str> {
        None
    }
}

/// The remote "get-by-statement" operation for one entity type
#[async_trait]
pub trait QueryService: Send + Sync {
    type Entity: Send;

    async fn get_by_statement(
        &self,
        statement: &Statement,
    ) -> Result<EntityPage<Self::Entity>, ServiceError>;
}

/// The remote bulk "create" operation for one entity type.
///
/// Implementations submit all configs in one call. The call is all-or-nothing and not
/// idempotent: submitting the same configs twice creates two sets of entities. An empty or
/// absent response is an empty `Vec`.
#[async_trait]
pub trait MutationService: Send + Sync {
    type Config: Send + Sync;
    type Entity: Identified + Send;

    async fn create(&self, configs: &[Self::Config]) -> Result<Vec<Self::Entity>, ServiceError>;
}
