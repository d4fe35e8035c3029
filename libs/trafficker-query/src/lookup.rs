// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::{debug, info};

use crate::{FilterStatement, Identified, QueryService, ServiceError, StatementBuilder, Value};

/// A conjunction of `field = value` conditions
#[derive(Debug, Clone, Default)]
pub struct EqualityFilter {
    conditions: Vec<(String, Value)>,
}

impl EqualityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, field: impl Into<String>, value: Value) -> Self {
        self.conditions.push((field.into(), value));
        self
    }

    pub fn into_statement(self) -> FilterStatement {
        self.conditions
            .into_iter()
            .fold(StatementBuilder::new(), |builder, (field, value)| {
                builder.equals(&field, value)
            })
            .build()
    }
}

/// Find the entity matching `filter`, if any.
///
/// Fetches a single page, since the match is expected to be unique. A page without results, a
/// page with an empty result list, and a response of unexpected shape all mean "not found".
/// Transport and remote failures are still returned as errors.
pub async fn lookup<S>(
    service: &S,
    filter: EqualityFilter,
) -> Result<Option<S::Entity>, ServiceError>
where
    S: QueryService + ?Sized,
    S::Entity: Identified,
{
    let statement = filter.into_statement();

    let page = match service.get_by_statement(&statement.to_statement()).await {
        Ok(page) => page,
        Err(e) if e.is_unexpected_shape() => {
            debug!("Treating unexpected response as no match: {e}");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let found = page
        .into_results()
        .and_then(|results| results.into_iter().next());

    match &found {
        Some(entity) => info!(
            id = entity.id(),
            name = entity.name().unwrap_or_default(),
            "Found a match"
        ),
        None => debug!(
            query = statement.where_clause(),
            "No entity matched"
        ),
    }

    Ok(found)
}
