use std::process::Command;

use rexpect::{error::Error, session::spawn_command};

const CONFIG_VARS: [&str; 3] = [
    "TRAFFICKER_NETWORK_CODE",
    "TRAFFICKER_ACCESS_TOKEN",
    "TRAFFICKER_API_ENDPOINT",
];

fn trafficker<I>(args: I) -> Command
where
    I: IntoIterator<Item = &'static str>,
{
    let bin = env!("CARGO_BIN_EXE_trafficker");

    let mut cmd = Command::new(bin);
    // The pty makes clap and colored emit ANSI escapes otherwise
    cmd.args(args).env("NO_COLOR", "1").env("CLICOLOR", "0");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_subcommands() -> Result<(), Error> {
    let mut p = spawn_command(trafficker(["--help"]), Some(5000))?;
    let output = p.exp_eof()?;

    for subcommand in ["creatives", "order", "advertiser", "placements", "line-items", "create"] {
        assert!(
            output.contains(subcommand),
            "`{subcommand}` missing from help output:\n{output}"
        );
    }

    Ok(())
}

#[test]
fn missing_network_code_is_reported() -> Result<(), Error> {
    let mut p = spawn_command(trafficker(["order", "Spring"]), Some(5000))?;
    p.exp_string("Missing required environment variable TRAFFICKER_NETWORK_CODE")?;
    p.exp_eof()?;

    Ok(())
}

#[test]
fn invalid_cpm_is_rejected_before_any_request() -> Result<(), Error> {
    let cmd = trafficker([
        "line-items",
        "create",
        "--order-id",
        "2201",
        "--placement-id",
        "11",
        "--cpm-micros",
        "lots",
        "Line A",
    ]);
    let mut p = spawn_command(cmd, Some(5000))?;
    p.exp_string("invalid value 'lots'")?;
    p.exp_eof()?;

    Ok(())
}
