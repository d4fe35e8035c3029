// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trafficker_query::Identified;

use crate::{Creatable, RemoteEntity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub name: Option<String>,
    pub advertiser_id: Option<i64>,
    pub trafficker_id: Option<i64>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Identified for Order {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl RemoteEntity for Order {
    const SERVICE: &'static str = "OrderService";
    const PLURAL: &'static str = "Orders";
}

impl Creatable for Order {
    type Config = OrderConfig;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    pub name: String,
    pub advertiser_id: i64,
    pub trafficker_id: i64,
}

pub fn create_order_config(name: &str, advertiser_id: i64, trafficker_id: i64) -> OrderConfig {
    OrderConfig {
        name: name.to_string(),
        advertiser_id,
        trafficker_id,
    }
}
