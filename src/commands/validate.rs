//! Validate command - check the form fields without rendering

use std::path::Path;

use anyhow::Result;

use termo::state::LastTerm;
use termo::validate::validate_term;
use termo::Config;

use crate::cli::TermFields;
use crate::commands::form::resolve_term;
use crate::ui;

pub fn cmd_validate(
    fields: &TermFields,
    fresh: bool,
    config: &Config,
    state_dir: &Path,
    json: bool,
) -> Result<()> {
    let last = if fresh {
        LastTerm::default()
    } else {
        LastTerm::load(state_dir)
    };
    let term = resolve_term(fields, last.term.as_ref(), config)?;
    let report = validate_term(&term, config.min_days);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "validate",
                "status": if report.is_valid() { "valid" } else { "invalid" },
                "errors": report.errors,
            })
        );
    } else if report.is_valid() {
        ui::print_success("Formulário completo.");
    } else {
        for error in &report.errors {
            ui::print_error(error);
        }
    }

    if !report.is_valid() {
        anyhow::bail!("term has {} validation error(s)", report.errors.len());
    }
    Ok(())
}
