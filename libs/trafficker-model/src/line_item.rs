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

use crate::{Creatable, Money, PIXEL_SIZE, RemoteEntity, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: i64,
    pub name: Option<String>,
    pub order_id: Option<i64>,
    pub order_name: Option<String>,
    pub line_item_type: Option<LineItemType>,
    pub cost_per_unit: Option<Money>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Identified for LineItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl RemoteEntity for LineItem {
    const SERVICE: &'static str = "LineItemService";
    const PLURAL: &'static str = "LineItems";
}

impl Creatable for LineItem {
    type Config = LineItemConfig;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartDateTimeType {
    Immediately,
    OneHourFromNow,
    UseStartDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostType {
    Cpa,
    Cpc,
    Cpd,
    Cpm,
    Vcpm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreativeRotationType {
    Even,
    Optimized,
    Manual,
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemType {
    Sponsorship,
    Standard,
    Network,
    Bulk,
    PricePriority,
    House,
    AdExchange,
    Preferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    None,
    Lifetime,
    Daily,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub goal_type: GoalType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTargeting {
    pub targeted_placement_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targeting {
    pub inventory_targeting: InventoryTargeting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativePlaceholder {
    pub size: Size,
}

/// Everything the remote service needs to create a line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemConfig {
    pub name: String,
    pub order_id: i64,
    pub targeting: Targeting,
    pub start_date_time_type: StartDateTimeType,
    pub unlimited_end_date_time: bool,
    pub cost_type: CostType,
    pub cost_per_unit: Money,
    pub creative_rotation_type: CreativeRotationType,
    pub line_item_type: LineItemType,
    pub primary_goal: Goal,
    pub creative_placeholders: Vec<CreativePlaceholder>,
}

pub const DEFAULT_START_DATE_TIME_TYPE: StartDateTimeType = StartDateTimeType::Immediately;
pub const DEFAULT_COST_TYPE: CostType = CostType::Cpm;
pub const DEFAULT_CREATIVE_ROTATION_TYPE: CreativeRotationType = CreativeRotationType::Even;
pub const DEFAULT_LINE_ITEM_TYPE: LineItemType = LineItemType::PricePriority;
pub const DEFAULT_GOAL_TYPE: GoalType = GoalType::None;

/// Build the config for a price-priority line item that starts now, never ends, bids a fixed
/// CPM of `cpm_micro_amount` US micro-dollars, and targets exactly `placement_ids`.
///
/// Its single creative placeholder is 1×1, the size prebid creatives are trafficked at.
pub fn create_line_item_config(
    name: &str,
    order_id: i64,
    placement_ids: &[String],
    cpm_micro_amount: i64,
) -> LineItemConfig {
    LineItemConfig {
        name: name.to_string(),
        order_id,
        targeting: Targeting {
            inventory_targeting: InventoryTargeting {
                targeted_placement_ids: placement_ids.to_vec(),
            },
        },
        start_date_time_type: DEFAULT_START_DATE_TIME_TYPE,
        unlimited_end_date_time: true,
        cost_type: DEFAULT_COST_TYPE,
        cost_per_unit: Money::usd_micros(cpm_micro_amount),
        creative_rotation_type: DEFAULT_CREATIVE_ROTATION_TYPE,
        line_item_type: DEFAULT_LINE_ITEM_TYPE,
        primary_goal: Goal {
            goal_type: DEFAULT_GOAL_TYPE,
        },
        creative_placeholders: vec![CreativePlaceholder { size: PIXEL_SIZE }],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn placement_ids() -> Vec<String> {
        vec!["p1".to_string(), "p2".to_string()]
    }

    #[test]
    fn line_item_config() {
        let config = create_line_item_config("A Fake Line Item", 1234567, &placement_ids(), 24000000);

        assert_eq!(
            config,
            LineItemConfig {
                name: "A Fake Line Item".to_string(),
                order_id: 1234567,
                targeting: Targeting {
                    inventory_targeting: InventoryTargeting {
                        targeted_placement_ids: placement_ids(),
                    },
                },
                start_date_time_type: StartDateTimeType::Immediately,
                unlimited_end_date_time: true,
                cost_type: CostType::Cpm,
                cost_per_unit: Money {
                    currency_code: "USD".to_string(),
                    micro_amount: 24000000,
                },
                creative_rotation_type: CreativeRotationType::Even,
                line_item_type: LineItemType::PricePriority,
                primary_goal: Goal {
                    goal_type: GoalType::None,
                },
                creative_placeholders: vec![CreativePlaceholder {
                    size: Size {
                        width: 1,
                        height: 1,
                        is_aspect_ratio: None,
                    },
                }],
            }
        );
    }

    #[test]
    fn line_item_config_payload() {
        let config = create_line_item_config("A Fake Line Item", 1234567, &placement_ids(), 24000000);

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "name": "A Fake Line Item",
                "orderId": 1234567,
                "targeting": {
                    "inventoryTargeting": {
                        "targetedPlacementIds": ["p1", "p2"]
                    }
                },
                "startDateTimeType": "IMMEDIATELY",
                "unlimitedEndDateTime": true,
                "costType": "CPM",
                "costPerUnit": {"currencyCode": "USD", "microAmount": 24000000},
                "creativeRotationType": "EVEN",
                "lineItemType": "PRICE_PRIORITY",
                "primaryGoal": {"goalType": "NONE"},
                "creativePlaceholders": [
                    {"size": {"width": 1, "height": 1}}
                ]
            })
        );
    }

    #[test]
    fn line_item_config_is_deterministic() {
        assert_eq!(
            create_line_item_config("HB $0.10", 1, &[], 100000),
            create_line_item_config("HB $0.10", 1, &[], 100000)
        );
    }

    #[test]
    fn line_item_response_keeps_unmodeled_fields() {
        let line_item: LineItem = serde_json::from_value(json!({
            "orderId": 8675309,
            "id": 16273849,
            "name": "Some Advertiser HB $2.50",
            "orderName": "My Example Test Order",
            "lineItemType": "PRICE_PRIORITY",
            "priority": 12,
            "costPerUnit": {"currencyCode": "USD", "microAmount": 2500000},
            "creativePlaceholders": [
                {
                    "size": {"width": 1, "height": 1, "isAspectRatio": false},
                    "expectedCreativeCount": 1,
                    "creativeSizeType": "PIXEL"
                }
            ],
            "webPropertyCode": null,
            "status": "DRAFT"
        }))
        .unwrap();

        assert_eq!(line_item.id, 16273849);
        assert_eq!(line_item.order_id, Some(8675309));
        assert_eq!(line_item.line_item_type, Some(LineItemType::PricePriority));
        assert_eq!(line_item.cost_per_unit, Some(Money::usd_micros(2500000)));
        assert_eq!(line_item.other["priority"], json!(12));
        assert!(line_item.other.contains_key("creativePlaceholders"));
    }

    #[test]
    fn bare_id_response_decodes() {
        let line_item: LineItem = serde_json::from_value(json!({"id": 444555666})).unwrap();

        assert_eq!(line_item.id(), 444555666);
        assert_eq!(line_item.name(), None);
    }
}
