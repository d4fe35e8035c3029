// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Client for the remote ad management API.
//!
//! [`get_client`] builds a [`TraffickerClient`] from the environment. Its per-entity
//! [`EntityService`]s speak JSON over HTTP and implement the query and mutation traits of
//! `trafficker_query`, so the paginator, lookup and bulk creation work against them directly.
//! The functions in [`operations`] cover the everyday queries for each entity type.

mod client;
mod config;
pub mod operations;
mod transport;

pub use client::{TraffickerClient, get_client};
pub use config::{ClientConfig, ConfigError};
pub use transport::{EntityService, NETWORK_CODE_HEADER, parse_created, parse_page};
