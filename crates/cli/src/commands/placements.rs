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
use trafficker_client::operations::get_placements_by_names;
use trafficker_env::Environment;
use trafficker_model::Placement;

use super::command::{CommandDefinition, client, get_many};

pub(crate) struct PlacementsCommandDefinition {}

#[async_trait]
impl CommandDefinition for PlacementsCommandDefinition {
    fn command(&self) -> Command {
        Command::new("placements")
            .about("Resolve placement names to their ids")
            .arg(
                Arg::new("names")
                    .help("The placement names")
                    .required(true)
                    .num_args(1..),
            )
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let names: Vec<String> = get_many(matches, "names");

        let client = client(env.as_ref())?;
        let placements = get_placements_by_names(&client.service::<Placement>(), &names).await?;

        for placement in &placements {
            println!(
                "Placement with ID \"{}\" and name \"{}\" was found.",
                placement.id,
                placement.name.as_deref().unwrap_or("")
            );
        }

        for name in unresolved(&names, &placements) {
            println!("{}", format!("No placement named \"{name}\".").yellow());
        }

        Ok(())
    }
}

/// Requested names without a matching placement
fn unresolved<'a>(names: &'a [String], placements: &[Placement]) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| {
            !placements
                .iter()
                .any(|placement| placement.name.as_deref() == Some(name.as_str()))
        })
        .map(String::as_str)
        .collect()
}
