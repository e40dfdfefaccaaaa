//! Concrete observers reacting to the updates issued by the `Subject` they had been
//! attached to.
//!
//! Both observers filter on the subject's state: [`ConcreteObserverA`] reacts to
//! states below [`THRESHOLD`], [`ConcreteObserverB`] to all others. Reacting means
//! logging the event and calling the reaction registered with `on_react`, if any.

use tracing::info;

use crate::{observer::Observer, ObserverError, Subject};

/// State at which reactions switch from `ConcreteObserverA` to `ConcreteObserverB`.
pub const THRESHOLD: i32 = 3;

type ReactFn = Box<dyn Fn(&Subject)>;

// What an observer does once its filter lets an event through.
#[derive(Default)]
struct Reaction {
    react_fn: Option<ReactFn>,
}

impl Reaction {
    fn new(react_fn: impl Fn(&Subject) + 'static) -> Self {
        Reaction {
            react_fn: Some(Box::new(react_fn)),
        }
    }

    fn react(&self, observer: &str, subject: &Subject) {
        info!("{}: Reacted to the event.", observer);
        if let Some(react_fn) = &self.react_fn {
            react_fn(subject);
        }
    }
}

/// Reacts to states strictly below [`THRESHOLD`].
#[derive(Default)]
pub struct ConcreteObserverA {
    reaction: Reaction,
}

impl ConcreteObserverA {
    pub fn new() -> Self {
        ConcreteObserverA::default()
    }

    /// Create a new `ConcreteObserverA` which also calls `react_fn` whenever it
    /// reacts to an event.
    pub fn on_react(react_fn: impl Fn(&Subject) + 'static) -> Self {
        ConcreteObserverA {
            reaction: Reaction::new(react_fn),
        }
    }
}

impl Observer for ConcreteObserverA {
    fn update(&self, subject: &Subject) -> Result<(), ObserverError> {
        if subject.state() < THRESHOLD {
            self.reaction.react(self.name(), subject);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "ConcreteObserverA"
    }
}

/// Reacts to states greater than or equal to [`THRESHOLD`].
#[derive(Default)]
pub struct ConcreteObserverB {
    reaction: Reaction,
}

impl ConcreteObserverB {
    pub fn new() -> Self {
        ConcreteObserverB::default()
    }

    /// Create a new `ConcreteObserverB` which also calls `react_fn` whenever it
    /// reacts to an event.
    pub fn on_react(react_fn: impl Fn(&Subject) + 'static) -> Self {
        ConcreteObserverB {
            reaction: Reaction::new(react_fn),
        }
    }
}

impl Observer for ConcreteObserverB {
    fn update(&self, subject: &Subject) -> Result<(), ObserverError> {
        if subject.state() >= THRESHOLD {
            self.reaction.react(self.name(), subject);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "ConcreteObserverB"
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn observers_split_at_threshold() {
        let a_count = Rc::new(Cell::new(0));
        let b_count = Rc::new(Cell::new(0));
        let a_count_c = Rc::clone(&a_count);
        let b_count_c = Rc::clone(&b_count);

        let a = ConcreteObserverA::on_react(move |_| a_count_c.set(a_count_c.get() + 1));
        let b = ConcreteObserverB::on_react(move |_| b_count_c.set(b_count_c.get() + 1));

        let mut subject = Subject::from_seed(0);
        for state in 0..10 {
            // Drive the state without any attached observers.
            subject.set_state(state).unwrap();
            a.update(&subject).unwrap();
            b.update(&subject).unwrap();
        }

        assert_eq!(a_count.get(), 3);
        assert_eq!(b_count.get(), 7);
    }

    #[test]
    fn observers_without_reaction_still_succeed() {
        let mut subject = Subject::from_seed(0);
        subject.set_state(THRESHOLD - 1).unwrap();

        assert!(ConcreteObserverA::new().update(&subject).is_ok());
        assert!(ConcreteObserverB::new().update(&subject).is_ok());
        assert_eq!(ConcreteObserverA::new().name(), "ConcreteObserverA");
    }
}
