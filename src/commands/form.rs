//! Field resolution shared by `generate` and `validate`
//!
//! CLI flags win; anything omitted falls back to the persisted last term,
//! then to defaults (today's date, the configured deadline, the first store).
//! The delivery date is always recomputed, never taken from the fallback.

use anyhow::Result;
use chrono::Local;

use termo::deadline::parse_date;
use termo::models::DeliveryTerm;
use termo::Config;

use crate::cli::TermFields;

pub fn resolve_term(
    fields: &TermFields,
    last: Option<&DeliveryTerm>,
    config: &Config,
) -> Result<DeliveryTerm> {
    let store = fields
        .store
        .clone()
        .or_else(|| last.map(|t| t.store.clone()))
        .unwrap_or_else(|| "carrao".to_string());
    // Reject unknown store keys before doing any work.
    config.store(&store)?;

    let signature = match &fields.signature {
        Some(raw) => parse_date("signature", raw)?,
        None => last
            .map(|t| t.signature)
            .unwrap_or_else(|| Local::now().date_naive()),
    };

    let deadline_days = fields
        .days
        .or_else(|| last.map(|t| t.deadline_days))
        .unwrap_or(config.default_days);

    let mut term = DeliveryTerm {
        store,
        name: pick(&fields.name, last.map(|t| t.name.as_str())),
        contract: pick(&fields.contract, last.map(|t| t.contract.as_str())),
        rg: pick(&fields.rg, last.map(|t| t.rg.as_str())),
        cpf: pick(&fields.cpf, last.map(|t| t.cpf.as_str())),
        signature,
        deadline_days,
        delivery: signature,
        hydraulic_plan: fields
            .hydraulic
            .or_else(|| last.map(|t| t.hydraulic_plan))
            .unwrap_or(false),
        electric_plan: fields
            .electric
            .or_else(|| last.map(|t| t.electric_plan))
            .unwrap_or(false),
    };
    term.recompute_delivery(&config.holidays)?;
    Ok(term)
}

fn pick(flag: &Option<String>, last: Option<&str>) -> String {
    flag.clone()
        .or_else(|| last.map(str::to_string))
        .unwrap_or_default()
}
