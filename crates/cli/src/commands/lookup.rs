// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Single-entity lookups by name.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::{ArgMatches, Command};
use colored::Colorize;
use trafficker_client::operations::{get_advertiser_by_name, get_order_by_name};
use trafficker_env::Environment;
use trafficker_model::{Advertiser, Order};
use trafficker_query::Identified;

use super::command::{CommandDefinition, client, get_required, name_arg};

pub(crate) struct OrderCommandDefinition {}

#[async_trait]
impl CommandDefinition for OrderCommandDefinition {
    fn command(&self) -> Command {
        Command::new("order")
            .about("Look up an order by name")
            .arg(name_arg("The name of the order"))
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let name: String = get_required(matches, "name")?;

        let client = client(env.as_ref())?;
        let order = get_order_by_name(&client.service::<Order>(), &name).await?;

        println!("{}", report("order", &name, order.as_ref()));
        Ok(())
    }
}

pub(crate) struct AdvertiserCommandDefinition {}

#[async_trait]
impl CommandDefinition for AdvertiserCommandDefinition {
    fn command(&self) -> Command {
        Command::new("advertiser")
            .about("Look up an advertiser by name")
            .arg(name_arg("The name of the advertiser"))
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let name: String = get_required(matches, "name")?;

        let client = client(env.as_ref())?;
        let advertiser = get_advertiser_by_name(&client.service::<Advertiser>(), &name).await?;

        println!("{}", report("advertiser", &name, advertiser.as_ref()));
        Ok(())
    }
}

fn report(kind: &str, name: &str, entity: Option<&impl Identified>) -> String {
    match entity {
        Some(entity) => format!(
            "Found an {kind} with ID \"{}\" and name \"{}\".",
            entity.id(),
            entity.name().unwrap_or(name)
        ),
        None => format!("No {kind} named \"{name}\" was found.")
            .yellow()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reports_found_entity() {
        let order: Order = serde_json::from_value(json!({ "id": 12, "name": "Spring" })).unwrap();

        assert_eq!(
            report("order", "Spring", Some(&order)),
            "Found an order with ID \"12\" and name \"Spring\"."
        );
    }

    #[test]
    fn reports_missing_entity() {
        colored::control::set_override(false);

        assert_eq!(
            report("advertiser", "Acme", None::<&Advertiser>),
            "No advertiser named \"Acme\" was found."
        );
    }

    #[test]
    fn name_is_required() {
        let result = OrderCommandDefinition {}
            .command()
            .try_get_matches_from(["order"]);

        assert!(result.is_err());
    }
}
