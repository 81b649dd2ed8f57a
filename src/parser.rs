//! Validation of the raw operand and operator strings. Anything that
//! gets past here is well-formed, so the comparator never sees bad input.

use tracing::{event, Level};

use anyhow::{Context, Result};

use crate::models::{Operator, Version};

pub fn parse_version(input: &str) -> Result<Version> {
    let version = Version::parse(input)
        .with_context(|| format!("Failed to parse version '{}'", input))?;
    event!(Level::DEBUG, "Parsed version: {:?}", version);

    Ok(version)
}

pub fn parse_operator(input: &str) -> Result<Operator> {
    let operator = input.parse::<Operator>()?;
    event!(Level::DEBUG, "Parsed operator: {:?}", operator);

    Ok(operator)
}
