//! Period-level CLI commands

use crate::error::EasyBudgetResult;
use crate::models::Confirmation;
use crate::services::LedgerService;
use crate::storage::PersistenceBackend;

/// Handle `reset`: clear budget and expenses of the active period
pub fn handle_reset_command<B: PersistenceBackend>(
    service: &mut LedgerService<'_, B>,
    force: bool,
) -> EasyBudgetResult<()> {
    let period = service.session().period();

    if service.reset_period(Confirmation::from(force))? {
        println!("Cleared budget and all expenses for {}", period);
    } else {
        println!(
            "This will clear the budget and all {} expenses for {}.",
            service.state().len(),
            period
        );
        println!("To proceed, run again with --force flag:");
        println!("  easybudget reset --force");
    }

    Ok(())
}
