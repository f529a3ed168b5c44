//! Handler for the `config` command group.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};

/// Execute `config validate`.
///
/// Loading already validated `config`; this reports what was accepted.
pub fn execute_validate(config: &Config, source: Option<&std::path::Path>) -> Result<()> {
    let source = source.map_or_else(
        || DEFAULT_CONFIG_PATH.to_string(),
        |p| p.display().to_string(),
    );

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "path": source,
        }));
        return Ok(());
    }

    let params = config.params();
    output::success(&format!("Configuration is valid: {source}"));
    output::section("Optimizer defaults");
    output::field("Funds in bank", params.funds_in_bank);
    output::field("Free transfers", params.free_transfers);
    output::field("Margin", params.transfer_margin);
    output::field("Fillers", params.filler_count);
    output::section("Solver");
    output::field("Time limit", format!("{}s", config.solver.time_limit_secs));
    Ok(())
}
