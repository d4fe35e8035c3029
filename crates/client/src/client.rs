// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use trafficker_env::Environment;
use trafficker_model::RemoteEntity;

use crate::{ClientConfig, ConfigError, EntityService};

/// An authenticated handle on the remote API. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct TraffickerClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Arc<ClientConfig>,
}

impl TraffickerClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.application_name.clone());

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The remote service for entity type `E`
    pub fn service<E: RemoteEntity>(&self) -> EntityService<E> {
        EntityService::new(self.clone())
    }
}

/// Build a client from `TRAFFICKER_*` environment variables
pub fn get_client(env: &dyn Environment) -> Result<TraffickerClient, ConfigError> {
    TraffickerClient::new(ClientConfig::from_env(env)?)
}
