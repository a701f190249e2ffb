use anyhow::{Context, Result};
use std::env;
use std::fs;
use tracing::debug;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] if a value is successfully retrieved from either environment variable;
/// returns [Result::Err()] otherwise. Values are trimmed.
pub fn get_env_var(name: &str) -> Result<String> {
    let value = match env::var(name) {
        Ok(s) => s,
        Err(e) => get_from_file(name).with_context(|| {
            format!(
                "Could not find a value for {} nor for {}_FILE. Original Error: {:?}",
                name, name, e
            )
        })?,
    };
    Ok(value.trim().to_string())
}

/// Like [get_env_var], but treats a missing or blank value as [None].
pub fn get_optional_env_var(name: &str) -> Option<String> {
    match get_env_var(name) {
        Ok(s) if !s.is_empty() => Some(s),
        Ok(_) => None,
        Err(e) => {
            debug!(variable = name, "Variable not set: {:#}", e);
            None
        }
    }
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    Ok(fs::read_to_string(path)?)
}

pub mod variables {
    pub use crate::environment_variables::*;
}
