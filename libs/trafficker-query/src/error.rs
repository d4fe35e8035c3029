// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request never produced a response (connection, TLS, timeout, ...)
    #[error("Transport: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The remote service answered, but rejected the request
    #[error("Remote service responded with status {status}: {body}")]
    Remote { status: u16, body: String },

    /// The response didn't have the shape expected for the operation
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}: {1}")]
    WithContext(String, #[source] Box<ServiceError>),
}

impl ServiceError {
    pub fn with_context(self, context: String) -> ServiceError {
        ServiceError::WithContext(context, Box::new(self))
    }

    /// Is this (possibly after unwrapping any context) a response shape mismatch?
    pub fn is_unexpected_shape(&self) -> bool {
        match self {
            ServiceError::UnexpectedShape(_) => true,
            ServiceError::WithContext(_, inner) => inner.is_unexpected_shape(),
            _ => false,
        }
    }
}

pub trait WithContext {
    fn with_context(self, context: String) -> Self;
}

impl<T> WithContext for Result<T, ServiceError> {
    fn with_context(self, context: String) -> Result<T, ServiceError> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_are_recognized_through_context() {
        let err = ServiceError::UnexpectedShape("no rval".into())
            .with_context("getCreativesByStatement".into())
            .with_context("lookup".into());
        assert!(err.is_unexpected_shape());

        let err = ServiceError::Remote {
            status: 500,
            body: "boom".into(),
        }
        .with_context("getCreativesByStatement".into());
        assert!(!err.is_unexpected_shape());
        assert_eq!(
            err.to_string(),
            "getCreativesByStatement: Remote service responded with status 500: boom"
        );
    }
}
