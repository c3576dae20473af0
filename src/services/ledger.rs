//! Ledger service
//!
//! Binds a session, its live ledger and the store. Every operation runs
//! validate → mutate → persist before returning. Mutations are applied to a
//! copy that only replaces the live ledger once the save succeeded, so a
//! rejected or failed operation leaves both memory and storage untouched.

use tracing::{info, warn};

use crate::error::EasyBudgetResult;
use crate::models::{Confirmation, Expense, LedgerState, Money, PeriodKey};
use crate::reports::Summary;
use crate::session::SessionContext;
use crate::storage::{LedgerStore, PersistenceBackend};

/// Service for the active session's ledger
pub struct LedgerService<'a, B> {
    store: &'a LedgerStore<B>,
    session: SessionContext,
    state: LedgerState,
}

impl<'a, B: PersistenceBackend> LedgerService<'a, B> {
    /// Open the session's partition, loading whatever is stored for it
    pub fn open(store: &'a LedgerStore<B>, session: SessionContext) -> EasyBudgetResult<Self> {
        let state = store.load(&session.partition_key())?;
        info!(
            user = session.user_id(),
            period = %session.period(),
            "opened ledger"
        );
        Ok(Self {
            store,
            session,
            state,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Fresh summary of the live ledger
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.state)
    }

    /// Make another period active. Nothing is written to either partition.
    pub fn switch_period(&mut self, period: PeriodKey) -> EasyBudgetResult<()> {
        let mut session = self.session.clone();
        session.switch_period(period);
        let state = self.store.load(&session.partition_key())?;

        info!(from = %self.session.period(), to = %period, "switched period");
        self.session = session;
        self.state = state;
        Ok(())
    }

    /// Set the monthly budget
    pub fn set_budget(&mut self, amount: Money) -> EasyBudgetResult<()> {
        self.apply("set_budget", |state| state.set_budget(amount))
    }

    /// Change an existing budget
    pub fn edit_budget(&mut self, amount: Money) -> EasyBudgetResult<()> {
        self.apply("edit_budget", |state| state.edit_budget(amount))
    }

    /// Clear the budget. `Ok(false)` means the confirmation was declined.
    pub fn delete_budget(&mut self, confirmation: Confirmation) -> EasyBudgetResult<bool> {
        self.apply_confirmed("delete_budget", |state| state.delete_budget(confirmation))
    }

    /// Append an expense
    pub fn add_expense(&mut self, expense: Expense) -> EasyBudgetResult<()> {
        self.apply("add_expense", |state| state.add_expense(expense))
    }

    /// Replace the expense at `index`
    pub fn edit_expense(&mut self, index: usize, expense: Expense) -> EasyBudgetResult<()> {
        self.apply("edit_expense", |state| state.edit_expense(index, expense))
    }

    /// Remove the expense at `index` and return it
    pub fn delete_expense(&mut self, index: usize) -> EasyBudgetResult<Expense> {
        self.apply("delete_expense", |state| state.delete_expense(index))
    }

    /// Clear budget and expenses of the active period only.
    /// `Ok(false)` means the confirmation was declined.
    pub fn reset_period(&mut self, confirmation: Confirmation) -> EasyBudgetResult<bool> {
        self.apply_confirmed("reset_period", |state| state.reset(confirmation))
    }

    fn apply<T>(
        &mut self,
        operation: &'static str,
        mutate: impl FnOnce(&mut LedgerState) -> EasyBudgetResult<T>,
    ) -> EasyBudgetResult<T> {
        let mut next = self.state.clone();
        let output = mutate(&mut next).inspect_err(|e| {
            warn!(operation, error = %e, "rejected");
        })?;

        self.store.save(&self.session.partition_key(), &next)?;
        self.state = next;
        info!(operation, key = %self.session.partition_key(), "applied");
        Ok(output)
    }

    fn apply_confirmed(
        &mut self,
        operation: &'static str,
        mutate: impl FnOnce(&mut LedgerState) -> EasyBudgetResult<bool>,
    ) -> EasyBudgetResult<bool> {
        let mut next = self.state.clone();
        let applied = mutate(&mut next).inspect_err(|e| {
            warn!(operation, error = %e, "rejected");
        })?;

        if !applied {
            info!(operation, "declined");
            return Ok(false);
        }

        self.store.save(&self.session.partition_key(), &next)?;
        self.state = next;
        info!(operation, key = %self.session.partition_key(), "applied");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EasyBudgetError;
    use crate::storage::MemoryBackend;
    use chrono::NaiveDate;

    fn may() -> PeriodKey {
        PeriodKey::new(2024, 5).unwrap()
    }

    fn expense(name: &str, units: i64) -> Expense {
        Expense::new(
            name,
            Money::from_units(units),
            "Food",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    /// Backend whose writes always fail
    struct BrokenBackend;

    impl PersistenceBackend for BrokenBackend {
        fn get(&self, _key: &str) -> EasyBudgetResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> EasyBudgetResult<()> {
            Err(EasyBudgetError::Storage("disk full".into()))
        }
    }

    #[test]
    fn test_mutations_are_written_through() {
        let store = LedgerStore::new(MemoryBackend::new());
        let session = SessionContext::start_at("alice", may());
        let key = session.partition_key();
        let mut service = LedgerService::open(&store, session).unwrap();

        service.set_budget(Money::from_units(5000)).unwrap();
        assert_eq!(store.load(&key).unwrap().budget(), Some(Money::from_units(5000)));

        service.add_expense(expense("Lunch", 1200)).unwrap();
        assert_eq!(store.load(&key).unwrap(), *service.state());
    }

    #[test]
    fn test_rejected_operation_does_not_save() {
        let store = LedgerStore::new(MemoryBackend::new());
        let mut service =
            LedgerService::open(&store, SessionContext::start_at("alice", may())).unwrap();

        assert!(service.set_budget(Money::zero()).is_err());
        assert!(service.delete_expense(0).is_err());
        assert!(store.backend().is_empty().unwrap());
    }

    #[test]
    fn test_declined_confirmation_does_not_save() {
        let store = LedgerStore::new(MemoryBackend::new());
        let session = SessionContext::start_at("alice", may());
        let key = session.partition_key();
        let mut service = LedgerService::open(&store, session).unwrap();
        service.set_budget(Money::from_units(100)).unwrap();

        assert!(!service.reset_period(Confirmation::Declined).unwrap());
        assert!(!service.delete_budget(Confirmation::Declined).unwrap());
        assert_eq!(store.load(&key).unwrap().budget(), Some(Money::from_units(100)));
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let store = LedgerStore::new(BrokenBackend);
        let mut service =
            LedgerService::open(&store, SessionContext::start_at("alice", may())).unwrap();

        let err = service.set_budget(Money::from_units(100)).unwrap_err();
        assert!(matches!(err, EasyBudgetError::Storage(_)));
        assert_eq!(service.state().budget(), None);
    }

    #[test]
    fn test_switch_period_isolates_partitions() {
        let store = LedgerStore::new(MemoryBackend::new());
        let mut service =
            LedgerService::open(&store, SessionContext::start_at("alice", may())).unwrap();
        service.set_budget(Money::from_units(5000)).unwrap();

        service.switch_period(may().next().unwrap()).unwrap();
        assert!(service.state().is_blank());
        assert_eq!(service.session().period(), may().next().unwrap());

        service.set_budget(Money::from_units(10)).unwrap();
        service.switch_period(may()).unwrap();
        assert_eq!(service.state().budget(), Some(Money::from_units(5000)));
    }

    #[test]
    fn test_summary_tracks_mutations() {
        let store = LedgerStore::new(MemoryBackend::new());
        let mut service =
            LedgerService::open(&store, SessionContext::start_at("alice", may())).unwrap();

        service.add_expense(expense("Lunch", 1200)).unwrap();
        assert_eq!(service.summary().total_spent, Money::from_units(1200));

        service.delete_expense(0).unwrap();
        assert_eq!(service.summary().total_spent, Money::zero());
    }
}
