// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use anyhow::Result;
use common::logging_tracing;
use trafficker_env::{Environment, SystemEnvironment};

use commands::{
    command::{CommandDefinition, SubcommandDefinition},
    create,
    creatives::CreativesCommandDefinition,
    line_items,
    lookup::{AdvertiserCommandDefinition, OrderCommandDefinition},
    placements::PlacementsCommandDefinition,
};

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    logging_tracing::init()?;

    let subcommand_definition = SubcommandDefinition::new(
        "trafficker",
        "Script ad trafficking: look up, list and create orders, line items and creatives",
        vec![
            Box::new(CreativesCommandDefinition {}),
            Box::new(OrderCommandDefinition {}),
            Box::new(AdvertiserCommandDefinition {}),
            Box::new(PlacementsCommandDefinition {}),
            Box::new(line_items::command_definition()),
            Box::new(create::command_definition()),
        ],
    );

    let command = subcommand_definition
        .command()
        .version(env!("CARGO_PKG_VERSION"));

    let matches = command.get_matches();

    let env: Arc<dyn Environment> = Arc::new(SystemEnvironment);

    subcommand_definition.execute(&matches, env).await
}
