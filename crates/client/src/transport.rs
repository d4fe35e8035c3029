// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use trafficker_model::{Creatable, RemoteEntity};
use trafficker_query::{
    EntityPage, MutationService, QueryService, ServiceError, Statement, WithContext,
};
use url::Url;

use crate::TraffickerClient;

pub const NETWORK_CODE_HEADER: &str = "networkCode";

/// The remote service for one entity type.
///
/// Every operation is a `POST {endpoint}/{version}/{Service}/{operation}` with a JSON body. The
/// response wraps the operation's return value in an `rval` envelope.
pub struct EntityService<E> {
    client: TraffickerClient,
    // fn() -> E: the service produces `E`s but doesn't own any
    _entity: PhantomData<fn() -> E>,
}

impl<E: RemoteEntity> EntityService<E> {
    pub(crate) fn new(client: TraffickerClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub fn operation_url(&self, operation: &str) -> Url {
        let config = &self.client.config;
        let mut url = config.endpoint.clone();
        // Can't fail: the config only accepts endpoints that can be a base
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([config.api_version.as_str(), E::SERVICE, operation]);
        }
        url
    }

    async fn call(&self, operation: &str, body: Map<String, Value>) -> Result<Value, ServiceError> {
        let config = &self.client.config;
        let url = self.operation_url(operation);

        debug!(%url, "Calling remote operation");

        let response = self
            .client
            .http
            .post(url)
            .bearer_auth(&config.access_token)
            .header(NETWORK_CODE_HEADER, &config.network_code)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(Box::new(e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(Box::new(e)))?;

        if !status.is_success() {
            return Err(ServiceError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::UnexpectedShape(format!("response is not JSON: {e}")))
    }
}

#[async_trait]
impl<E: RemoteEntity> QueryService for EntityService<E> {
    type Entity = E;

    async fn get_by_statement(&self, statement: &Statement) -> Result<EntityPage<E>, ServiceError> {
        let operation = E::query_operation();

        let mut body = Map::new();
        body.insert("filterStatement".into(), serde_json::to_value(statement)?);

        let response = self
            .call(&operation, body)
            .await
            .with_context(operation.clone())?;

        parse_page(response).with_context(operation)
    }
}

#[async_trait]
impl<E: Creatable> MutationService for EntityService<E> {
    type Config = E::Config;
    type Entity = E;

    async fn create(&self, configs: &[E::Config]) -> Result<Vec<E>, ServiceError> {
        let operation = E::create_operation();

        let mut body = Map::new();
        body.insert(E::create_parameter(), serde_json::to_value(configs)?);

        let response = self
            .call(&operation, body)
            .await
            .with_context(operation.clone())?;

        parse_created(response).with_context(operation)
    }
}

/// Decode the response of a get-by-statement operation.
///
/// A page whose `rval` has no `results` (or a null one) is [`EntityPage::Exhausted`]. Anything
/// other than an object `rval` is an [`ServiceError::UnexpectedShape`].
pub fn parse_page<E: DeserializeOwned>(response: Value) -> Result<EntityPage<E>, ServiceError> {
    let mut rval = match take_rval(response)? {
        Some(Value::Object(rval)) => rval,
        Some(other) => {
            return Err(ServiceError::UnexpectedShape(format!(
                "expected rval to be an object, found {}",
                json_kind(&other)
            )));
        }
        None => return Err(ServiceError::UnexpectedShape("missing rval".into())),
    };

    match rval.remove("results") {
        None | Some(Value::Null) => Ok(EntityPage::Exhausted),
        Some(results) => serde_json::from_value(results)
            .map(EntityPage::Results)
            .map_err(|e| ServiceError::UnexpectedShape(format!("undecodable results: {e}"))),
    }
}

/// Decode the response of a create operation. An empty response, or one without `rval`, means
/// nothing was created.
pub fn parse_created<E: DeserializeOwned>(response: Value) -> Result<Vec<E>, ServiceError> {
    if response.is_null() {
        return Ok(vec![]);
    }

    match take_rval(response)? {
        None => Ok(vec![]),
        Some(Value::Array(created)) => serde_json::from_value(Value::Array(created))
            .map_err(|e| ServiceError::UnexpectedShape(format!("undecodable entities: {e}"))),
        Some(other) => Err(ServiceError::UnexpectedShape(format!(
            "expected rval to be an array, found {}",
            json_kind(&other)
        ))),
    }
}

/// The `rval` of the envelope; a null `rval` counts as absent
fn take_rval(response: Value) -> Result<Option<Value>, ServiceError> {
    match response {
        Value::Object(mut envelope) => Ok(envelope.remove("rval").filter(|rval| !rval.is_null())),
        other => Err(ServiceError::UnexpectedShape(format!(
            "expected an object response, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
