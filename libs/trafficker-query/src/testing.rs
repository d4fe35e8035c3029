// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! In-memory stand-ins for the remote service, for tests.

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;

use crate::{EntityPage, Identified, MutationService, QueryService, ServiceError, Statement};

/// A minimal entity with just an id and an optional name
#[derive(Debug, Clone, PartialEq)]
pub struct TestEntity {
    pub id: i64,
    pub name: Option<String>,
}

impl TestEntity {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }

    pub fn named(id: i64, name: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
        }
    }
}

impl Identified for TestEntity {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Serves queued pages in order, then reports the query as exhausted. Every statement received
/// is recorded.
pub struct StubQueryService<E> {
    pages: Mutex<VecDeque<Result<EntityPage<E>, ServiceError>>>,
    statements: Mutex<Vec<Statement>>,
}

impl<E> StubQueryService<E> {
    pub fn new(pages: Vec<Result<EntityPage<E>, ServiceError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            statements: Mutex::new(vec![]),
        }
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl<E: Send> QueryService for StubQueryService<E> {
    type Entity = E;

    async fn get_by_statement(
        &self,
        statement: &Statement,
    ) -> Result<EntityPage<E>, ServiceError> {
        self.statements.lock().unwrap().push(statement.clone());

        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(EntityPage::Exhausted))
    }
}

/// Answers queued responses in order, then empty responses. Every batch of configs received is
/// recorded.
pub struct StubMutationService<C, E> {
    responses: Mutex<VecDeque<Result<Vec<E>, ServiceError>>>,
    calls: Mutex<Vec<Vec<C>>>,
}

impl<C, E> StubMutationService<C, E> {
    pub fn new(response: Result<Vec<E>, ServiceError>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([response])),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<Vec<C>>
    where
        C: Clone,
    {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<C, E> MutationService for StubMutationService<C, E>
where
    C: Clone + Send + Sync,
    E: Identified + Send,
{
    type Config = C;
    type Entity = E;

    async fn create(&self, configs: &[C]) -> Result<Vec<E>, ServiceError> {
        self.calls.lock().unwrap().push(configs.to_vec());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(vec![]))
    }
}
