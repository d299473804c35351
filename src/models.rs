//! Core data models for Termo
//!
//! Defines the data collected by the form:
//! - `Store`: the issuing store (name, CNPJ, address)
//! - `DeliveryTerm`: one filled-in delivery term, as persisted and rendered

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::deadline::{compute_deadline, DeadlineRequest, HolidaySet};
use crate::error::TermoResult;

/// Contractual default for the delivery deadline, in business days
pub const DEFAULT_DEADLINE: i64 = 45;

/// Smallest deadline the contract allows
pub const MIN_DEADLINE: i64 = 30;

/// A store that can issue delivery terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub cnpj: String,
    pub address: String,
}

/// The two company stores, keyed the way the form refers to them.
///
/// `termo.toml` may add or override entries; see `config`.
pub fn builtin_stores() -> BTreeMap<String, Store> {
    let mut stores = BTreeMap::new();
    stores.insert(
        "carrao".to_string(),
        Store {
            name: "CARRÃO".to_string(),
            cnpj: "32.263.298/0001-19".to_string(),
            address: "Avenida Conselheiro Carrão, 1736 - Vila Carrão - São Paulo - SP".to_string(),
        },
    );
    stores.insert(
        "perdizes".to_string(),
        Store {
            name: "PERDIZES".to_string(),
            cnpj: "32.263.298/0001-19".to_string(),
            address: "Av. Francisco Matarazzo, 969 - Água Branca - São Paulo - SP".to_string(),
        },
    );
    stores
}

/// One filled-in delivery term.
///
/// Persisted between runs as a single JSON blob so the next form starts
/// pre-filled. `delivery` is always derived from `signature` and
/// `deadline_days`; `recompute_delivery` keeps it consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTerm {
    /// Store key (see `builtin_stores` and the config store table)
    pub store: String,

    /// Customer full name
    pub name: String,

    /// Contract number
    pub contract: String,

    /// RG (identity card number)
    pub rg: String,

    /// CPF (taxpayer id)
    pub cpf: String,

    /// Date the term was signed
    pub signature: NaiveDate,

    /// Deadline in business days (the form's "prazo")
    pub deadline_days: i64,

    /// Computed delivery date
    pub delivery: NaiveDate,

    /// Hydraulic plan handed over at signature time
    #[serde(default)]
    pub hydraulic_plan: bool,

    /// Electric plan handed over at signature time
    #[serde(default)]
    pub electric_plan: bool,
}

impl DeliveryTerm {
    /// Recompute `delivery` from `signature` and `deadline_days`.
    pub fn recompute_delivery(&mut self, holidays: &HolidaySet) -> TermoResult<()> {
        self.delivery = compute_deadline(
            DeadlineRequest {
                start: self.signature,
                business_days: self.deadline_days,
            },
            holidays,
        )?;
        Ok(())
    }
}
