// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Access to configuration values supplied through environment variables.
//!
//! Code that needs configuration takes a `&dyn Environment` rather than calling `std::env`
//! directly, so tests can supply a [`MapEnvironment`] with exactly the values they need.

mod map;

use std::str::FromStr;

pub use map::MapEnvironment;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or_else(&self, key: &str, default_value: &str) -> String {
        self.get(key).unwrap_or(default_value.to_string())
    }

    /// Get a value that must be present and non-blank
    fn require(&self, key: &str) -> Result<String, EnvError> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(EnvError::Missing {
                key: key.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Missing required environment variable {key}")]
    Missing { key: String },

    #[error("Invalid value {value} for {key}: {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Get an optional value parsed into `T`. An unset variable is `Ok(None)`, but a set variable
/// that doesn't parse is an error (a typo must not silently fall back to a default).
pub fn get_parsed<T>(env: &dyn Environment, key: &str) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env.get(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|e| EnvError::InvalidValue {
                key: key.to_string(),
                value: value.clone(),
                message: e.to_string(),
            })
        })
        .transpose()
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
