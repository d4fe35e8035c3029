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
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use trafficker_client::operations::{
    get_creative_by_advertiser_id_and_name, get_creatives_by_advertiser_id,
};
use trafficker_env::Environment;
use trafficker_model::Creative;

use super::command::{CommandDefinition, advertiser_id_arg, client, get, get_required};

pub(crate) struct CreativesCommandDefinition {}

#[async_trait]
impl CommandDefinition for CreativesCommandDefinition {
    fn command(&self) -> Command {
        Command::new("creatives")
            .about("List the creatives of an advertiser, or look one up by name")
            .arg(advertiser_id_arg())
            .arg(
                Arg::new("name")
                    .help("Only look up the creative with this name")
                    .long("name")
                    .num_args(1),
            )
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let advertiser_id: i64 = get_required(matches, "advertiser-id")?;
        let name: Option<String> = get(matches, "name");

        let client = client(env.as_ref())?;
        let service = client.service::<Creative>();

        match name {
            Some(name) => {
                match get_creative_by_advertiser_id_and_name(&service, advertiser_id, &name).await?
                {
                    Some(creative) => println!(
                        "Found a creative with ID \"{}\" and name \"{}\".",
                        creative.id,
                        creative.name.as_deref().unwrap_or(&name)
                    ),
                    None => println!(
                        "{}",
                        format!("No creative named \"{name}\" for advertiser {advertiser_id}.")
                            .yellow()
                    ),
                }
            }
            None => {
                let creatives = get_creatives_by_advertiser_id(&service, advertiser_id, |page| {
                    for creative in page {
                        println!("{}", describe(creative));
                    }
                })
                .await?;

                println!(
                    "{}",
                    format!("Number of results found: {}", creatives.len()).green()
                );
            }
        }

        Ok(())
    }
}

fn describe(creative: &Creative) -> String {
    let name = creative.name.as_deref().unwrap_or("");

    match &creative.size {
        Some(size) => format!(
            "A creative with ID \"{}\", name \"{}\", and size {}x{} was found.",
            creative.id, name, size.width, size.height
        ),
        None => format!(
            "A creative with ID \"{}\" and name \"{}\" was found.",
            creative.id, name
        ),
    }
}
