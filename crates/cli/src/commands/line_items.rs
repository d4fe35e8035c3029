// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use trafficker_client::operations::get_line_items_by_order_id;
use trafficker_env::Environment;
use trafficker_model::{LineItem, LineItemConfig, create_line_item_config};
use trafficker_query::create_entities;
use tracing::info;

use super::command::{
    CommandDefinition, SubcommandDefinition, client, get_many, get_required, order_id_arg,
};

pub(crate) fn command_definition() -> SubcommandDefinition {
    SubcommandDefinition::new(
        "line-items",
        "Create or list line items",
        vec![
            Box::new(CreateCommandDefinition {}),
            Box::new(ListCommandDefinition {}),
        ],
    )
}

struct CreateCommandDefinition {}

#[async_trait]
impl CommandDefinition for CreateCommandDefinition {
    fn command(&self) -> Command {
        Command::new("create")
            .about("Create one line item per name in a single request")
            .arg(order_id_arg())
            .arg(
                Arg::new("placement-id")
                    .help("A placement to target (may be repeated)")
                    .long("placement-id")
                    .action(clap::ArgAction::Append)
                    .required(true)
                    .num_args(1),
            )
            .arg(
                Arg::new("cpm-micros")
                    .help("Cost per thousand impressions, in micro units of USD")
                    .long("cpm-micros")
                    .required(true)
                    .value_parser(clap::value_parser!(i64))
                    .num_args(1),
            )
            .arg(
                Arg::new("names")
                    .help("The line item names")
                    .required(true)
                    .num_args(1..),
            )
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let configs = line_item_configs(matches)?;

        let client = client(env.as_ref())?;
        let ids = create_entities(&client.service::<LineItem>(), &configs).await?;
        info!(count = ids.len(), "Created line items");

        for (config, id) in configs.iter().zip(&ids) {
            println!(
                "Line item with ID \"{}\" and name \"{}\" was created.",
                id.to_string().green(),
                config.name
            );
        }

        Ok(())
    }
}

fn line_item_configs(matches: &ArgMatches) -> Result<Vec<LineItemConfig>> {
    let order_id: i64 = get_required(matches, "order-id")?;
    let placement_ids: Vec<String> = get_many(matches, "placement-id");
    let cpm_micros: i64 = get_required(matches, "cpm-micros")?;
    let names: Vec<String> = get_many(matches, "names");

    if cpm_micros < 0 {
        bail!("The CPM must not be negative, got {cpm_micros}");
    }

    Ok(names
        .iter()
        .map(|name| create_line_item_config(name, order_id, &placement_ids, cpm_micros))
        .collect())
}

struct ListCommandDefinition {}

#[async_trait]
impl CommandDefinition for ListCommandDefinition {
    fn command(&self) -> Command {
        Command::new("list")
            .about("List every line item of an order")
            .arg(order_id_arg())
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let order_id: i64 = get_required(matches, "order-id")?;

        let client = client(env.as_ref())?;
        let line_items = get_line_items_by_order_id(&client.service::<LineItem>(), order_id).await?;

        for line_item in &line_items {
            println!(
                "Line item with ID \"{}\" and name \"{}\" was found.",
                line_item.id,
                line_item.name.as_deref().unwrap_or("")
            );
        }

        println!(
            "{}",
            format!("Number of results found: {}", line_items.len()).green()
        );

        Ok(())
    }
}
