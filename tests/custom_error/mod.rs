use std::error::Error;

use obsr::{Observer, ObserverError, Subject};

#[derive(Debug)]
pub struct CustomError;

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Custom error occurred")
    }
}

impl Error for CustomError {}

/// Observer which fails on every update.
pub struct FailingObserver;

impl Observer for FailingObserver {
    fn update(&self, _: &Subject) -> Result<(), ObserverError> {
        Err(ObserverError::from(Box::new(CustomError) as Box<dyn Error>))
    }

    fn name(&self) -> &str {
        "FailingObserver"
    }
}
