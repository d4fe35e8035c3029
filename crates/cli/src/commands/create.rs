// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Single-entity creation for the entities a campaign is built around.

use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use trafficker_client::EntityService;
use trafficker_env::Environment;
use trafficker_model::{
    Creatable, Creative, CreativeConfig, Order, OrderConfig, create_creative_config,
    create_order_config,
};
use trafficker_query::create_entities;

use super::command::{CommandDefinition, SubcommandDefinition, client, get_required, name_arg};

pub(crate) fn command_definition() -> SubcommandDefinition {
    SubcommandDefinition::new(
        "create",
        "Create an order or a creative",
        vec![
            Box::new(OrderCreateCommandDefinition {}),
            Box::new(CreativeCreateCommandDefinition {}),
        ],
    )
}

fn id_option(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .long(id)
        .required(true)
        .value_parser(clap::value_parser!(i64))
        .num_args(1)
}

struct OrderCreateCommandDefinition {}

#[async_trait]
impl CommandDefinition for OrderCreateCommandDefinition {
    fn command(&self) -> Command {
        Command::new("order")
            .about("Create an order")
            .arg(name_arg("The name of the order"))
            .arg(id_option("advertiser-id", "The advertiser the order is for"))
            .arg(id_option("trafficker-id", "The user trafficking the order"))
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let config = order_config(matches)?;

        let client = client(env.as_ref())?;
        let id = create_one(&client.service::<Order>(), config).await?;

        println!("Created an order with ID \"{}\".", id.to_string().green());
        Ok(())
    }
}

fn order_config(matches: &ArgMatches) -> Result<OrderConfig> {
    Ok(create_order_config(
        &get_required::<String>(matches, "name")?,
        get_required(matches, "advertiser-id")?,
        get_required(matches, "trafficker-id")?,
    ))
}

struct CreativeCreateCommandDefinition {}

#[async_trait]
impl CommandDefinition for CreativeCreateCommandDefinition {
    fn command(&self) -> Command {
        Command::new("creative")
            .about("Create a 1x1 third-party creative serving the given snippet")
            .arg(name_arg("The name of the creative"))
            .arg(id_option("advertiser-id", "The advertiser owning the creative"))
            .arg(
                Arg::new("snippet")
                    .help("The markup the creative serves")
                    .long("snippet")
                    .required(true)
                    .num_args(1),
            )
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let config = creative_config(matches)?;

        let client = client(env.as_ref())?;
        let id = create_one(&client.service::<Creative>(), config).await?;

        println!("Created a creative with ID \"{}\".", id.to_string().green());
        Ok(())
    }
}

fn creative_config(matches: &ArgMatches) -> Result<CreativeConfig> {
    Ok(create_creative_config(
        &get_required::<String>(matches, "name")?,
        get_required(matches, "advertiser-id")?,
        &get_required::<String>(matches, "snippet")?,
    ))
}

async fn create_one<E: Creatable>(
    service: &EntityService<E>,
    config: E::Config,
) -> Result<i64> {
    match create_entities(service, &[config]).await?.as_slice() {
        [id] => Ok(*id),
        ids => bail!("Expected one created entity, got {}", ids.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_order_config() {
        let matches = OrderCreateCommandDefinition {}
            .command()
            .try_get_matches_from([
                "order",
                "Spring Campaign",
                "--advertiser-id",
                "8675309",
                "--trafficker-id",
                "42",
            ])
            .unwrap();

        assert_eq!(
            order_config(&matches).unwrap(),
            create_order_config("Spring Campaign", 8675309, 42)
        );
    }

    #[test]
    fn builds_creative_config() {
        let matches = CreativeCreateCommandDefinition {}
            .command()
            .try_get_matches_from([
                "creative",
                "Prebid creative",
                "--advertiser-id",
                "8675309",
                "--snippet",
                "<script></script>",
            ])
            .unwrap();

        assert_eq!(
            creative_config(&matches).unwrap(),
            create_creative_config("Prebid creative", 8675309, "<script></script>")
        );
    }

    #[test]
    fn snippet_is_required() {
        let result = CreativeCreateCommandDefinition {}
            .command()
            .try_get_matches_from(["creative", "Prebid creative", "--advertiser-id", "1"]);

        assert!(result.is_err());
    }

    #[test]
    fn dispatches_by_entity() {
        let matches = command_definition()
            .command()
            .try_get_matches_from([
                "create",
                "order",
                "Spring Campaign",
                "--advertiser-id",
                "1",
                "--trafficker-id",
                "2",
            ])
            .unwrap();

        assert_eq!(matches.subcommand_name(), Some("order"));
    }
}
