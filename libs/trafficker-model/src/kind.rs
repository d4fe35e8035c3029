// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use heck::ToLowerCamelCase;
use serde::{Serialize, de::DeserializeOwned};
use trafficker_query::Identified;

/// Where an entity type lives on the remote side.
///
/// Every entity type is served by its own remote service, and the operation names follow from
/// the plural entity name: `get<Plural>ByStatement` and `create<Plural>`.
pub trait RemoteEntity: DeserializeOwned + Identified + Send + Sync + 'static {
    /// e.g. `LineItemService`
    const SERVICE: &'static str;
    /// e.g. `LineItems`
    const PLURAL: &'static str;

    fn query_operation() -> String {
        format!("get{}ByStatement", Self::PLURAL)
    }
}

/// An entity type that can be created in bulk
pub trait Creatable: RemoteEntity {
    type Config: Serialize + Send + Sync + 'static;

    fn create_operation() -> String {
        format!("create{}", Self::PLURAL)
    }

    /// Name of the request field carrying the configs, e.g. `lineItems`
    fn create_parameter() -> String {
        Self::PLURAL.to_lower_camel_case()
    }
}
