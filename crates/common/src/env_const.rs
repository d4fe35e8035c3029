// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use trafficker_env::{EnvError, Environment, get_parsed};

pub const TRAFFICKER_NETWORK_CODE: &str = "TRAFFICKER_NETWORK_CODE";
pub const TRAFFICKER_ACCESS_TOKEN: &str = "TRAFFICKER_ACCESS_TOKEN";

pub const TRAFFICKER_API_ENDPOINT: &str = "TRAFFICKER_API_ENDPOINT";
pub const TRAFFICKER_API_VERSION: &str = "TRAFFICKER_API_VERSION";
pub const TRAFFICKER_APPLICATION_NAME: &str = "TRAFFICKER_APPLICATION_NAME";
pub const TRAFFICKER_REQUEST_TIMEOUT_SECS: &str = "TRAFFICKER_REQUEST_TIMEOUT_SECS";

pub const TRAFFICKER_LOG: &str = "TRAFFICKER_LOG";

const DEFAULT_API_ENDPOINT: &str = "https://ads.google.com/apis/ads/publisher";
const DEFAULT_API_VERSION: &str = "v201802";
const DEFAULT_APPLICATION_NAME: &str = "trafficker";

pub fn get_network_code(env: &dyn Environment) -> Result<String, EnvError> {
    env.require(TRAFFICKER_NETWORK_CODE)
}

pub fn get_access_token(env: &dyn Environment) -> Result<String, EnvError> {
    env.require(TRAFFICKER_ACCESS_TOKEN)
}

pub fn get_api_endpoint(env: &dyn Environment) -> String {
    env.get_or_else(TRAFFICKER_API_ENDPOINT, DEFAULT_API_ENDPOINT)
}

pub fn get_api_version(env: &dyn Environment) -> String {
    env.get_or_else(TRAFFICKER_API_VERSION, DEFAULT_API_VERSION)
}

pub fn get_application_name(env: &dyn Environment) -> String {
    env.get_or_else(TRAFFICKER_APPLICATION_NAME, DEFAULT_APPLICATION_NAME)
}

/// The HTTP request timeout, if one is configured. Without one, requests wait as long as the
/// remote service takes.
pub fn get_request_timeout(env: &dyn Environment) -> Result<Option<Duration>, EnvError> {
    Ok(get_parsed::<u64>(env, TRAFFICKER_REQUEST_TIMEOUT_SECS)?.map(Duration::from_secs))
}
