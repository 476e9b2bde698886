//! Command line parsing.
//!
//! Flags are declared as ordinary clap long options. Go-style single-dash
//! spellings (`-port 8080`, `-target=http://host`) are rewritten to their
//! double-dash form before clap sees them, so both conventions work.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::config::schema::{ForwarderConfig, DEFAULT_PORT, DEFAULT_TARGET};

#[derive(Debug, Parser)]
#[command(name = "http-forwarder", version)]
#[command(about = "Forward every HTTP request to a fixed target origin", long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Target URL requests are forwarded to
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage message on error.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_go_flags(std::env::args_os()))
    }
}

impl From<Cli> for ForwarderConfig {
    fn from(cli: Cli) -> Self {
        ForwarderConfig::new(cli.port, cli.target)
    }
}

/// Rewrite `-name` and `-name=value` to `--name` / `--name=value` for every
/// long flag the parser declares. Anything else passes through untouched.
pub fn normalize_go_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut command = Cli::command();
    command.build();
    let longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .collect();

    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(s) if is_single_dash_long(s, &longs) => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_long(arg: &str, longs: &[&str]) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    longs.contains(&name)
}
