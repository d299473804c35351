//! Interactive form - default mode when no subcommand is given
//!
//! Walks the operator through the same fields as the paper form, pre-filled
//! from the persisted last term. The delivery date is recomputed and shown
//! whenever the signature date or the deadline changes.

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;

use termo::deadline::{compute_deadline, format_document, parse_date, DeadlineRequest};
use termo::models::DeliveryTerm;
use termo::render::write_document;
use termo::state::LastTerm;
use termo::validate::validate_term;
use termo::Config;

use crate::ui;

pub fn cmd_interactive(config: &Config, state_dir: &Path, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "interactive",
                "hint": "interactive mode has no JSON form; use `termo generate`",
            })
        );
        return Ok(());
    }

    if !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `termo generate --help` or `termo --help`");
        return Ok(());
    }

    println!("Termo v{}", env!("CARGO_PKG_VERSION"));
    println!("Termo de Entrega de Projeto Executivo\n");

    let mut last = LastTerm::load(state_dir);
    let previous = last.term.clone();

    let store = prompt_store(config, previous.as_ref())?;
    let name = prompt_text("Nome completo", previous.as_ref().map(|t| t.name.clone()))?;
    let contract = prompt_text(
        "Nº do contrato",
        previous.as_ref().map(|t| t.contract.clone()),
    )?;
    let rg = prompt_text("RG", previous.as_ref().map(|t| t.rg.clone()))?;
    let cpf = prompt_text("CPF", previous.as_ref().map(|t| t.cpf.clone()))?;

    let mut signature = previous
        .as_ref()
        .map(|t| t.signature)
        .unwrap_or_else(|| Local::now().date_naive());
    signature = prompt_date("Data de assinatura", signature)?;

    let mut days = previous
        .as_ref()
        .map(|t| t.deadline_days)
        .unwrap_or(config.default_days);
    days = prompt_days("Prazo (dias úteis)", days)?;

    // Show the computed delivery date; let the operator adjust the inputs
    // that affect it until it looks right.
    loop {
        let delivery = compute_deadline(
            DeadlineRequest {
                start: signature,
                business_days: days,
            },
            &config.holidays,
        )?;
        println!();
        ui::print_field("Entrega", &format_document(delivery));

        let items = vec![
            "Continuar",
            "Ajustar data de assinatura",
            "Ajustar prazo",
            "Cancelar",
        ];
        let selection = Select::new()
            .with_prompt("Próximo passo")
            .items(&items)
            .default(0)
            .interact()?;
        match selection {
            0 => break,
            1 => signature = prompt_date("Data de assinatura", signature)?,
            2 => days = prompt_days("Prazo (dias úteis)", days)?,
            _ => return Ok(()),
        }
    }

    let hydraulic_plan = Confirm::new()
        .with_prompt("Planta hidráulica entregue?")
        .default(previous.as_ref().map(|t| t.hydraulic_plan).unwrap_or(false))
        .interact()?;
    let electric_plan = Confirm::new()
        .with_prompt("Planta elétrica entregue?")
        .default(previous.as_ref().map(|t| t.electric_plan).unwrap_or(false))
        .interact()?;

    let mut term = DeliveryTerm {
        store,
        name,
        contract,
        rg,
        cpf,
        signature,
        deadline_days: days,
        delivery: signature,
        hydraulic_plan,
        electric_plan,
    };
    term.recompute_delivery(&config.holidays)?;

    let report = validate_term(&term, config.min_days);
    if !report.is_valid() {
        println!();
        for error in &report.errors {
            ui::print_error(error);
        }
        anyhow::bail!("term has {} validation error(s)", report.errors.len());
    }

    let store_info = config.store(&term.store)?;
    let path = write_document(Path::new("."), &term, store_info)?;
    last.remember(term, state_dir);

    println!();
    ui::print_success(&format!("Termo gerado: {}", path.display()));
    Ok(())
}

fn prompt_store(config: &Config, previous: Option<&DeliveryTerm>) -> Result<String> {
    let keys: Vec<&String> = config.stores.keys().collect();
    let labels: Vec<&str> = config.stores.values().map(|s| s.name.as_str()).collect();
    let default = previous
        .and_then(|t| keys.iter().position(|k| **k == t.store))
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Loja")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(keys[selection].clone())
}

fn prompt_text(prompt: &str, previous: Option<String>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(value) = previous {
        if !value.is_empty() {
            input = input.default(value);
        }
    }
    Ok(input.interact_text()?)
}

fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .default(format_document(default))
        .validate_with(|value: &String| {
            parse_date("date", value).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse_date("date", &raw)?)
}

fn prompt_days(prompt: &str, default: i64) -> Result<i64> {
    let days: i64 = Input::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|value: &i64| {
            if *value < 0 {
                Err("o prazo não pode ser negativo")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(days)
}
