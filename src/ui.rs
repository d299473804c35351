//! Terminal output helpers
//!
//! Status lines are styled only when attached to a terminal so piped output
//! stays clean.

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

pub fn print_success(msg: &str) {
    if std::io::stdout().is_terminal() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

pub fn print_field(label: &str, value: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}: {}", label.bold(), value);
    } else {
        println!("{}: {}", label, value);
    }
}
