//! Deadline command - compute a delivery date without touching the form

use anyhow::Result;
use chrono::Local;

use termo::deadline::{compute_deadline, format_document, format_iso, parse_date, DeadlineRequest};
use termo::Config;

use crate::ui;

pub fn cmd_deadline(
    start: Option<&str>,
    days: Option<i64>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let start = match start {
        Some(raw) => parse_date("start", raw)?,
        None => Local::now().date_naive(),
    };
    let days = days.unwrap_or(config.default_days);

    let delivery = compute_deadline(
        DeadlineRequest {
            start,
            business_days: days,
        },
        &config.holidays,
    )?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "deadline",
                "start": format_iso(start),
                "business_days": days,
                "delivery": format_iso(delivery),
            })
        );
    } else {
        ui::print_field("Assinatura", &format_document(start));
        ui::print_field("Prazo", &format!("{} dias úteis", days));
        ui::print_field("Entrega", &format_document(delivery));
    }
    Ok(())
}
