//! Provides parsing and validation of command line arguments into
//! the comparison evaluated by the core

use crate::{
    compare::Comparison,
    parser::{parse_operator, parse_version},
};

use anyhow::{anyhow, Result};
use clap::{Arg, Command};

pub struct Cli {
    matches: clap::ArgMatches,
}

impl Cli {
    pub fn init() -> Result<Cli> {
        let args = normalize_flags(std::env::args());
        let matches = get_cli_definition().get_matches_from(args);
        let cli = Cli { matches };

        Ok(cli)
    }

    #[cfg(test)]
    pub fn init_from<I>(args: I) -> Result<Cli>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let args = normalize_flags(args.into_iter().map(Into::into));
        let matches = get_cli_definition()
            .try_get_matches_from(args)
            .map_err(|e| anyhow!(e.to_string()))?;

        Ok(Cli { matches })
    }

    /// Collect the three raw strings, validate each independently, and
    /// only then hand a well-formed comparison to the core.
    pub fn get_comparison(&self) -> Result<Comparison> {
        let left = self.get_required_flag("v1")?;
        let right = self.get_required_flag("v2")?;
        let op = self.get_required_flag("op")?;

        Ok(Comparison {
            left: parse_version(left)?,
            right: parse_version(right)?,
            op: parse_operator(op)?,
        })
    }

    fn get_required_flag(&self, name: &str) -> Result<&str> {
        match self.matches.get_one::<String>(name) {
            Some(value) => Ok(value),
            None => Err(anyhow!(
                "Missing required flag --{}\n{}",
                name,
                get_cli_definition().render_usage()
            )),
        }
    }
}

/// Single-dash spellings (-v1, -v2, -op) are accepted alongside the
/// GNU-style long options, Go flag package style.
fn normalize_flags(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.split('=').next() {
            Some("-v1") | Some("-v2") | Some("-op") => format!("-{}", arg),
            _ => arg,
        })
        .collect()
}

fn get_cli_definition() -> Command {
    Command::new("compver")
        .version("0.1.0")
        .about("Compares two semantic versions, reporting the result via exit code")
        .arg(
            Arg::new("v1")
                .help("Version as left operand")
                .long("v1")
                .value_name("VERSION")
                .num_args(1),
        )
        .arg(
            Arg::new("v2")
                .help("Version as right operand")
                .long("v2")
                .value_name("VERSION")
                .num_args(1),
        )
        .arg(
            Arg::new("op")
                .help("Comparison operator.\nAvailable values: == != > < >= <=")
                .long("op")
                .value_name("OPERATOR")
                .num_args(1),
        )
}
