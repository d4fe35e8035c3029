// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Records for the remote advertising entities, and the configs used to create them.
//!
//! Entity records are only ever produced by deserializing remote responses. Each keeps the
//! fields this workspace reads as typed members and everything else in `other`, so a response
//! element carrying fields we don't model still decodes.
//!
//! Configs are produced by the `create_*_config` functions, which fill in every field the remote
//! create call needs from a handful of caller inputs plus fixed defaults.

mod advertiser;
mod common;
mod creative;
mod kind;
mod line_item;
mod order;
mod placement;

pub use advertiser::{ADVERTISER_COMPANY_TYPE, Advertiser};
pub use common::{CURRENCY_CODE, Money, PIXEL_SIZE, Size};
pub use creative::{
    Creative, CreativeConfig, THIRD_PARTY_CREATIVE_TYPE, create_creative_config,
};
pub use kind::{Creatable, RemoteEntity};
pub use line_item::{
    CostType, CreativePlaceholder, CreativeRotationType, DEFAULT_COST_TYPE,
    DEFAULT_CREATIVE_ROTATION_TYPE, DEFAULT_GOAL_TYPE, DEFAULT_LINE_ITEM_TYPE,
    DEFAULT_START_DATE_TIME_TYPE, Goal, GoalType, InventoryTargeting, LineItem, LineItemConfig,
    LineItemType, StartDateTimeType, Targeting, create_line_item_config,
};
pub use order::{Order, OrderConfig, create_order_config};
pub use placement::Placement;
