use crate::{ObserverError, Subject};

/// The `Observer` trait declares the `update` method, used by subjects to notify
/// their observers about a change of state.
///
/// `update` receives the `Subject` that triggered it and may read any of its public
/// state. Deciding whether to react at all, for instance by filtering on the state,
/// is up to the observer.
///
/// Closures of the form `Fn(&Subject) -> Result<(), ObserverError>` are observers too.
pub trait Observer {
    fn update(&self, subject: &Subject) -> Result<(), ObserverError>;

    /// Name used when reporting this observer in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Observer for F
where
    F: Fn(&Subject) -> Result<(), ObserverError>,
{
    fn update(&self, subject: &Subject) -> Result<(), ObserverError> {
        self(subject)
    }
}
