// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::{info, warn};

use crate::{Identified, MutationService, ServiceError};

/// Create one entity per config in a single remote call and return their identifiers.
///
/// The i-th identifier belongs to the entity created from the i-th config. Only the identifier
/// of each returned entity is read. An empty `configs` still goes to the remote service.
pub async fn create_entities<S>(service: &S, configs: &[S::Config]) -> Result<Vec<i64>, ServiceError>
where
    S: MutationService + ?Sized,
{
    let created = service.create(configs).await?;

    if created.len() != configs.len() {
        warn!(
            submitted = configs.len(),
            returned = created.len(),
            "Remote service returned a different number of entities than submitted"
        );
    }

    let ids: Vec<i64> = created.iter().map(Identified::id).collect();
    info!(count = ids.len(), ?ids, "Created entities");

    Ok(ids)
}
