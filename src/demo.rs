//! The demonstration scenario run by the `obsr` binary.

use std::rc::Rc;

use tracing::info;

use crate::{observer::Observer, NotifyError, Subject};

/// Attaches `first` and `second`, runs the business logic twice, detaches `second`
/// and runs the business logic once more.
///
/// Stops at the first notification pass in which an observer failed.
pub fn run_scenario(
    subject: &mut Subject,
    first: Rc<dyn Observer>,
    second: Rc<dyn Observer>,
) -> Result<(), NotifyError> {
    info!(initial_state = subject.state(), "starting observer scenario");

    subject.attach(Rc::clone(&first));
    subject.attach(Rc::clone(&second));

    subject.some_business_logic()?;
    subject.some_business_logic()?;

    subject.detach(&second);

    subject.some_business_logic()
}
