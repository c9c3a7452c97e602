//! Configuration command handler.
//!
//! Prints every resolved setting with its source as pretty JSON:
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "after_terminal": { "value": "continue", "source": "default" },
//!   "max_moves": { "value": 10000, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails and
/// `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "after_terminal": {
            "value": config.after_terminal,
            "source": sources.after_terminal,
        },
        "max_moves": {
            "value": config.max_moves,
            "source": sources.max_moves,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
