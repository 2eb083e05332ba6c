use anyhow::Result;
use serde::Serialize;

use crate::types::OutputFormat;

/// Print one view model: pretty JSON or the given plain rendering.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    view: &T,
    plain: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Plain => print!("{}", plain(view)),
    }
    Ok(())
}
