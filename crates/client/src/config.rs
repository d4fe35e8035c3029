// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use common::env_const::{
    TRAFFICKER_API_ENDPOINT, get_access_token, get_api_endpoint, get_api_version,
    get_application_name, get_network_code, get_request_timeout,
};
use thiserror::Error;
use trafficker_env::{EnvError, Environment};
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("Invalid API endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Everything needed to reach and authenticate against one ad network
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub api_version: String,
    pub network_code: String,
    pub access_token: String,
    pub application_name: String,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn from_env(env: &dyn Environment) -> Result<Self, ConfigError> {
        let endpoint_str = get_api_endpoint(env);
        let endpoint = Url::parse(&endpoint_str).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint_str.clone(),
            message: e.to_string(),
        })?;

        // Operation paths are appended as segments, which needs a hierarchical URL
        if endpoint.cannot_be_a_base() {
            return Err(ConfigError::InvalidEndpoint {
                url: endpoint_str,
                message: format!("{TRAFFICKER_API_ENDPOINT} must be an http(s) URL"),
            });
        }

        Ok(Self {
            endpoint,
            api_version: get_api_version(env),
            network_code: get_network_code(env)?,
            access_token: get_access_token(env)?,
            application_name: get_application_name(env),
            request_timeout: get_request_timeout(env)?,
        })
    }
}
