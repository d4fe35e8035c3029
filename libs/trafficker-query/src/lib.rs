// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The query-and-bulk-mutation engine shared by every entity type.
//!
//! Reading goes through a [`FilterStatement`]: a WHERE clause with `:name` placeholders, the
//! typed [`BoundParameter`]s that fill them, and a LIMIT/OFFSET paging cursor. A
//! [`StatementBuilder`] assembles one, after which either the [`Paginator`] walks every page of
//! results, or [`lookup`] fetches a single page and returns its first entity.
//!
//! Writing goes through [`create_entities`], which submits all configs in a single remote call
//! and returns the server-assigned identifiers in submission order.
//!
//! The remote side is abstracted as [`QueryService`] and [`MutationService`]; this crate never
//! talks to the network itself.

mod error;
mod lookup;
mod mutator;
mod paginator;
mod service;
mod statement;
mod value;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{ServiceError, WithContext};
pub use lookup::{EqualityFilter, lookup};
pub use mutator::create_entities;
pub use paginator::Paginator;
pub use service::{EntityPage, Identified, MutationService, QueryService};
pub use statement::{
    BoundParameter, FilterStatement, SUGGESTED_PAGE_LIMIT, Statement, StatementBuilder,
};
pub use value::{DateValue, Value};
