//! Generate command - validate the form and render the printable term

use std::path::Path;

use anyhow::Result;

use termo::deadline::{format_document, format_iso};
use termo::render::write_document;
use termo::state::LastTerm;
use termo::validate::validate_term;
use termo::Config;

use crate::cli::TermFields;
use crate::commands::form::resolve_term;
use crate::ui;

pub fn cmd_generate(
    fields: &TermFields,
    fresh: bool,
    out: &Path,
    config: &Config,
    state_dir: &Path,
    json: bool,
) -> Result<()> {
    let mut last = if fresh {
        LastTerm::default()
    } else {
        LastTerm::load(state_dir)
    };
    let term = resolve_term(fields, last.term.as_ref(), config)?;

    let report = validate_term(&term, config.min_days);
    if !report.is_valid() {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "generate",
                    "status": "invalid",
                    "errors": report.errors,
                })
            );
        } else {
            for error in &report.errors {
                ui::print_error(error);
            }
        }
        anyhow::bail!("term has {} validation error(s)", report.errors.len());
    }

    let store = config.store(&term.store)?;
    let path = write_document(out, &term, store)?;
    last.remember(term.clone(), state_dir);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "generate",
                "status": "success",
                "path": path.display().to_string(),
                "delivery": format_iso(term.delivery),
            })
        );
    } else {
        ui::print_success(&format!("Termo gerado: {}", path.display()));
        ui::print_field("Entrega", &format_document(term.delivery));
    }
    Ok(())
}
