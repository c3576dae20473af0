//! Summary and export CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::format_budget_line;
use crate::error::{EasyBudgetError, EasyBudgetResult};
use crate::export::{export_expenses_csv, export_file_name};
use crate::services::LedgerService;
use crate::storage::PersistenceBackend;

/// Handle `summary`
pub fn handle_summary_command<B: PersistenceBackend>(
    service: &LedgerService<'_, B>,
    settings: &Settings,
    json: bool,
) -> EasyBudgetResult<()> {
    let summary = service.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let period = service.session().period();
    if service.state().is_blank() {
        println!("Nothing recorded for {}.", period);
        return Ok(());
    }

    println!("Summary for {}", period);
    println!("{}", "=".repeat(40));
    println!(
        "{}",
        format_budget_line(service.state().budget(), &settings.currency_symbol)
    );
    print!("{}", summary.format_terminal(&settings.currency_symbol));

    Ok(())
}

/// Handle `export`. `-` writes to stdout; no path uses the default file name.
pub fn handle_export_command<B: PersistenceBackend>(
    service: &LedgerService<'_, B>,
    output: Option<PathBuf>,
) -> EasyBudgetResult<()> {
    let expenses = service.state().expenses();
    if expenses.is_empty() {
        return Err(EasyBudgetError::Export("No expenses to export".into()));
    }

    let session = service.session();
    let path = output
        .unwrap_or_else(|| PathBuf::from(export_file_name(session.namespace(), session.period())));

    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        export_expenses_csv(expenses, stdout.lock())?;
        return Ok(());
    }

    let file = File::create(&path).map_err(|e| {
        EasyBudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_expenses_csv(expenses, &mut writer)?;
    writer.flush()?;

    println!("Exported {} expenses to {}", expenses.len(), path.display());
    Ok(())
}
