// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Queries used when setting up a campaign.
//!
//! Each function takes the query service for its entity type, so it runs the same against an
//! [`crate::EntityService`] and against an in-memory stand-in.

use trafficker_model::{ADVERTISER_COMPANY_TYPE, Advertiser, Creative, LineItem, Order, Placement};
use trafficker_query::{
    EqualityFilter, Paginator, QueryService, ServiceError, StatementBuilder, Value, lookup,
};

pub async fn get_order_by_name<S>(service: &S, name: &str) -> Result<Option<Order>, ServiceError>
where
    S: QueryService<Entity = Order> + ?Sized,
{
    lookup(service, EqualityFilter::new().and("name", Value::text(name))).await
}

/// Companies of other types (agencies, house advertisers, ...) are not matched
pub async fn get_advertiser_by_name<S>(
    service: &S,
    name: &str,
) -> Result<Option<Advertiser>, ServiceError>
where
    S: QueryService<Entity = Advertiser> + ?Sized,
{
    lookup(
        service,
        EqualityFilter::new()
            .and("name", Value::text(name))
            .and("type", Value::text(ADVERTISER_COMPANY_TYPE)),
    )
    .await
}

pub async fn get_creative_by_advertiser_id_and_name<S>(
    service: &S,
    advertiser_id: i64,
    name: &str,
) -> Result<Option<Creative>, ServiceError>
where
    S: QueryService<Entity = Creative> + ?Sized,
{
    lookup(
        service,
        EqualityFilter::new()
            .and("name", Value::text(name))
            .and("advertiserId", Value::number(advertiser_id)),
    )
    .await
}

/// All creatives of an advertiser. `on_page` sees each page as it arrives.
pub async fn get_creatives_by_advertiser_id<S>(
    service: &S,
    advertiser_id: i64,
    on_page: impl FnMut(&[Creative]),
) -> Result<Vec<Creative>, ServiceError>
where
    S: QueryService<Entity = Creative> + ?Sized,
{
    let mut statement = StatementBuilder::new()
        .equals("advertiserId", Value::number(advertiser_id))
        .build();

    Paginator::new(service)
        .fetch_all_inspect(&mut statement, on_page)
        .await
}

pub async fn get_line_items_by_order_id<S>(
    service: &S,
    order_id: i64,
) -> Result<Vec<LineItem>, ServiceError>
where
    S: QueryService<Entity = LineItem> + ?Sized,
{
    let mut statement = StatementBuilder::new()
        .equals("orderId", Value::number(order_id))
        .build();

    Paginator::new(service).fetch_all(&mut statement).await
}

/// The placements with the given names, in server order. Names without a placement are simply
/// absent from the result.
pub async fn get_placements_by_names<S>(
    service: &S,
    names: &[String],
) -> Result<Vec<Placement>, ServiceError>
where
    S: QueryService<Entity = Placement> + ?Sized,
{
    if names.is_empty() {
        return Ok(vec![]);
    }

    let mut statement = StatementBuilder::new()
        .is_in("name", names.iter().map(Value::text))
        .build();

    Paginator::new(service).fetch_all(&mut statement).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trafficker_query::{
        BoundParameter, EntityPage,
        testing::{StubMutationService, StubQueryService},
    };

    use super::*;

    fn creative(id: i64, name: &str) -> Creative {
        serde_json::from_value(json!({"id": id, "name": name, "advertiserId": 8675309})).unwrap()
    }

    fn placement(id: i64, name: &str) -> Placement {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    #[tokio::test]
    async fn creative_lookup_binds_name_and_advertiser() {
        let service = StubQueryService::new(vec![Ok(EntityPage::Results(vec![creative(
            1,
            "Prebid creative",
        )]))]);

        let found = get_creative_by_advertiser_id_and_name(&service, 8675309, "Prebid creative")
            .await
            .unwrap();

        assert_eq!(found.map(|c| c.id), Some(1));
        let statement = &service.statements()[0];
        assert_eq!(
            statement.query,
            "WHERE name = :name AND advertiserId = :advertiser_id LIMIT 500 OFFSET 0"
        );
        assert_eq!(
            statement.values,
            vec![
                BoundParameter::new("name", Value::text("Prebid creative")),
                BoundParameter::new("advertiser_id", Value::number(8675309)),
            ]
        );
    }

    #[tokio::test]
    async fn creative_lookup_not_found() {
        let service = StubQueryService::<Creative>::new(vec![Ok(EntityPage::Exhausted)]);

        let found = get_creative_by_advertiser_id_and_name(&service, 8675309, "Nope")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn advertiser_lookup_restricts_company_type() {
        let service = StubQueryService::<Advertiser>::new(vec![Ok(EntityPage::Exhausted)]);

        get_advertiser_by_name(&service, "Prebid").await.unwrap();

        assert_eq!(
            service.statements()[0].query,
            "WHERE name = :name AND type = :type LIMIT 500 OFFSET 0"
        );
    }

    #[tokio::test]
    async fn order_lookup() {
        let order: Order =
            serde_json::from_value(json!({"id": 8675309, "name": "My Example Test Order"}))
                .unwrap();
        let service = StubQueryService::new(vec![Ok(EntityPage::Results(vec![order.clone()]))]);

        assert_eq!(
            get_order_by_name(&service, "My Example Test Order")
                .await
                .unwrap(),
            Some(order)
        );
    }

    #[tokio::test]
    async fn creatives_of_advertiser_are_paged() {
        let service = StubQueryService::new(vec![
            Ok(EntityPage::Results(vec![
                creative(1, "a"),
                creative(2, "b"),
            ])),
            Ok(EntityPage::Results(vec![creative(3, "c")])),
        ]);

        let mut printed = vec![];
        let creatives = get_creatives_by_advertiser_id(&service, 8675309, |page| {
            printed.extend(page.iter().map(|c| c.id))
        })
        .await
        .unwrap();

        assert_eq!(creatives.len(), 3);
        assert_eq!(printed, vec![1, 2, 3]);
        // Two pages of results, then the stub reports the query exhausted
        assert_eq!(
            service
                .statements()
                .iter()
                .map(|s| s.query.as_str().to_owned())
                .collect::<Vec<_>>(),
            vec![
                "WHERE advertiserId = :advertiser_id LIMIT 500 OFFSET 0",
                "WHERE advertiserId = :advertiser_id LIMIT 500 OFFSET 500",
                "WHERE advertiserId = :advertiser_id LIMIT 500 OFFSET 1000",
            ]
        );
    }

    #[tokio::test]
    async fn line_items_of_order() {
        let line_item: LineItem =
            serde_json::from_value(json!({"id": 16273849, "orderId": 8675309})).unwrap();
        let service = StubQueryService::new(vec![Ok(EntityPage::Results(vec![line_item]))]);

        let line_items = get_line_items_by_order_id(&service, 8675309).await.unwrap();

        assert_eq!(line_items.len(), 1);
        assert_eq!(
            service.statements()[0].values,
            vec![BoundParameter::new("order_id", Value::number(8675309))]
        );
    }

    #[tokio::test]
    async fn placements_by_names() {
        let service = StubQueryService::new(vec![Ok(EntityPage::Results(vec![
            placement(11, "Leaderboard"),
            placement(12, "Sidebar"),
        ]))]);

        let names = vec!["Leaderboard".to_string(), "Sidebar".to_string()];
        let placements = get_placements_by_names(&service, &names).await.unwrap();

        assert_eq!(
            placements.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![11, 12]
        );
        assert_eq!(
            service.statements()[0].query,
            "WHERE name IN (:name_0, :name_1) LIMIT 500 OFFSET 0"
        );
    }

    #[tokio::test]
    async fn no_placement_names_means_no_query() {
        let service = StubQueryService::<Placement>::new(vec![]);

        assert!(get_placements_by_names(&service, &[]).await.unwrap().is_empty());
        assert!(service.statements().is_empty());
    }

    #[tokio::test]
    async fn bulk_line_item_creation_returns_ids_in_order() {
        use trafficker_model::{LineItemConfig, create_line_item_config};
        use trafficker_query::create_entities;

        let created: Vec<LineItem> = serde_json::from_value(json!([
            {"id": 16273849, "orderId": 8675309, "name": "Some Advertiser HB $2.50",
             "costPerUnit": {"currencyCode": "USD", "microAmount": 2500000}},
            {"id": 444555666},
            {"id": 999888777}
        ]))
        .unwrap();
        let service = StubMutationService::<LineItemConfig, _>::new(Ok(created));

        let placement_ids = vec!["one-placement".to_string()];
        let configs: Vec<LineItemConfig> = ["HB $2.50", "HB $2.60", "HB $2.70"]
            .iter()
            .map(|name| create_line_item_config(name, 8675309, &placement_ids, 2500000))
            .collect();

        let ids = create_entities(&service, &configs).await.unwrap();

        assert_eq!(ids, vec![16273849, 444555666, 999888777]);
        assert_eq!(service.calls(), vec![configs]);
    }
}
