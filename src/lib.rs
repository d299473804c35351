//! Termo - delivery-term form tool
//!
//! Termo collects the fields of a "Termo de Entrega de Projeto Executivo",
//! computes the contractual delivery deadline in business days (skipping
//! weekends and recurring holidays), validates the required fields, keeps the
//! last-entered form for the next run, and renders the printable legal
//! document.

pub mod config;
pub mod deadline;
pub mod error;
pub mod models;
pub mod render;
pub mod state;
pub mod validate;

// Re-exports for convenience
pub use config::Config;
pub use deadline::{compute_deadline, is_business_day, DeadlineRequest, HolidaySet};
pub use error::{TermoError, TermoResult};
pub use models::{builtin_stores, DeliveryTerm, Store, DEFAULT_DEADLINE, MIN_DEADLINE};
pub use render::{render_term, write_document};
pub use state::LastTerm;
pub use validate::{validate_term, ValidationReport};
