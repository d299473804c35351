//! Required-field validation for the delivery term
//!
//! Flat presence checks, reported all at once so the operator can fix the
//! whole form in one pass. Messages are the Portuguese strings shown on the
//! printed form's error dialog.

use crate::models::DeliveryTerm;

/// Outcome of validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check the required fields of a term.
///
/// `min_days` is the configured contractual minimum for the deadline
/// (default 30); a shorter deadline is reported, not clamped.
pub fn validate_term(term: &DeliveryTerm, min_days: i64) -> ValidationReport {
    let mut errors = Vec::new();

    if term.name.trim().is_empty() {
        errors.push("Você precisa fornecer o nome completo.".to_string());
    }
    if term.rg.trim().is_empty() {
        errors.push("Você precisa fornecer o RG.".to_string());
    }
    if term.cpf.trim().is_empty() {
        errors.push("Você precisa fornecer o CPF.".to_string());
    }
    if term.contract.trim().is_empty() {
        errors.push("Você precisa fornecer o Nº do contrato.".to_string());
    }
    if term.deadline_days < min_days {
        errors.push(format!(
            "Prazo informado ({}) menor do que o mínimo permitido ({})",
            term.deadline_days, min_days
        ));
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn term() -> DeliveryTerm {
        DeliveryTerm {
            store: "carrao".to_string(),
            name: "Maria da Silva".to_string(),
            contract: "123".to_string(),
            rg: "1.234.567-8".to_string(),
            cpf: "123.456.789-00".to_string(),
            signature: NaiveDate::from_ymd_opt(2024, 1, 24).unwrap(),
            deadline_days: 45,
            delivery: NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
            hydraulic_plan: false,
            electric_plan: false,
        }
    }

    #[test]
    fn test_complete_term_is_valid() {
        let report = validate_term(&term(), 30);
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let mut t = term();
        t.name = String::new();
        t.rg = "  ".to_string();
        t.cpf = String::new();
        t.contract = String::new();
        let report = validate_term(&t, 30);
        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[0].contains("nome completo"));
        assert!(report.errors[1].contains("RG"));
        assert!(report.errors[2].contains("CPF"));
        assert!(report.errors[3].contains("contrato"));
    }

    #[test]
    fn test_short_deadline_reported() {
        let mut t = term();
        t.deadline_days = 20;
        let report = validate_term(&t, 30);
        assert_eq!(
            report.errors,
            vec!["Prazo informado (20) menor do que o mínimo permitido (30)".to_string()]
        );
    }

    #[test]
    fn test_deadline_at_minimum_is_valid() {
        let mut t = term();
        t.deadline_days = 30;
        assert!(validate_term(&t, 30).is_valid());
    }
}
