use thiserror::Error;

use crate::subjects::SubscriptionKey;

/// Error an `Observer` may return from its `update` method.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// The observer understood the notification but could not react to it.
    #[error("{observer} failed to react: {reason}")]
    Reaction { observer: String, reason: String },

    /// Any other failure raised while reacting.
    #[error("observer failed: {0}")]
    Source(#[from] Box<dyn std::error::Error>),
}

impl ObserverError {
    pub fn reaction(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Reaction {
            observer: observer.into(),
            reason: reason.into(),
        }
    }
}

/// Returned by a notification pass in which one or more observers failed.
///
/// Every attached observer is still notified; failures are collected in
/// notification order together with the subscription they came from.
#[derive(Debug, Error)]
#[error("{}", describe(.failures))]
pub struct NotifyError {
    failures: Vec<(SubscriptionKey, ObserverError)>,
}

impl NotifyError {
    pub(crate) fn new(failures: Vec<(SubscriptionKey, ObserverError)>) -> Self {
        NotifyError { failures }
    }

    /// Failed subscriptions and their errors, in notification order.
    pub fn failures(&self) -> &[(SubscriptionKey, ObserverError)] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<(SubscriptionKey, ObserverError)> {
        self.failures
    }
}

fn describe(failures: &[(SubscriptionKey, ObserverError)]) -> String {
    match failures {
        [(key, e)] => format!("observer {} failed during notification: {}", key, e),
        failures => format!("{} observers failed during notification", failures.len()),
    }
}
