//! Active session: who is using the ledger and which month they are viewing
//!
//! The session is the only source of the partition key. Keys have the form
//! `<namespace>_<user>_<YYYY-MM>`. The period suffix is always seven characters,
//! so two different `(user, period)` pairs can never produce the same key, even
//! when a user id contains `_`.

use crate::models::PeriodKey;

/// Namespace prefix used when none is configured
pub const DEFAULT_NAMESPACE: &str = "EasyBudget";

/// Identifies the active user and period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    namespace: String,
    user_id: String,
    period: PeriodKey,
}

impl SessionContext {
    /// Start a session for `user_id` in the current calendar month
    pub fn start(user_id: impl AsRef<str>) -> Self {
        Self::start_at(user_id, PeriodKey::current())
    }

    /// Start a session for `user_id` in an explicit period
    pub fn start_at(user_id: impl AsRef<str>, period: PeriodKey) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            user_id: user_id.as_ref().trim().to_string(),
            period,
        }
    }

    /// Use a different key namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn period(&self) -> PeriodKey {
        self.period
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Change the active period
    pub fn switch_period(&mut self, period: PeriodKey) {
        self.period = period;
    }

    /// Storage key of the active partition
    pub fn partition_key(&self) -> String {
        format!("{}_{}_{}", self.namespace, self.user_id, self.period)
    }
}
