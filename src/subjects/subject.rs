use std::{ops::Range, rc::Rc};

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::{debug, info, warn};

use super::{gen_key, SubscriptionKey};
use crate::{observer::Observer, NotifyError};

/// Range new states are drawn from by `some_business_logic`.
pub const STATE_RANGE: Range<i32> = 0..10;

/// A `Subject` owns some important state and notifies its observers whenever that
/// state changes.
///
/// Observers are attached as `Rc<dyn Observer>` and notified synchronously in the
/// order they were attached. The same observer may be attached more than once, in
/// which case it is notified once per subscription.
///
/// The random source used to produce new states is injected on construction, which
/// keeps a `Subject` fully deterministic under a fixed seed.
///
/// Observers receive `&Subject` while being notified, so they can read the state but
/// can neither change it nor attach or detach anything during a notification pass.
///
/// # Examples
///
///```
/// use std::rc::Rc;
///
/// use obsr::observers::{ConcreteObserverA, ConcreteObserverB};
/// use obsr::{Observer, Subject};
///
/// let mut subject = Subject::from_seed(7);
///
/// let observer_a: Rc<dyn Observer> = Rc::new(ConcreteObserverA::new());
/// let observer_b: Rc<dyn Observer> = Rc::new(ConcreteObserverB::new());
///
/// subject.attach(Rc::clone(&observer_a));
/// subject.attach(Rc::clone(&observer_b));
/// assert_eq!(subject.len(), 2);
///
/// // Picks a new state and notifies both observers.
/// subject.some_business_logic().unwrap();
///
/// // Only `observer_a` is notified from now on.
/// subject.detach(&observer_b);
/// subject.some_business_logic().unwrap();
/// assert_eq!(subject.len(), 1);
///```
///
/// The state can only be changed by the subject itself:
///
///```compile_fail
/// let mut subject = obsr::Subject::from_seed(7);
/// subject.set_state(-42).unwrap();
///```
pub struct Subject {
    state: i32,
    observers: Vec<(SubscriptionKey, Rc<dyn Observer>)>,
    next_key: u64,
    rng: Box<dyn RngCore>,
}

impl Subject {
    /// Creates a new `Subject` which draws its states from `rng`.
    ///
    /// The initial state is the first draw.
    pub fn new(rng: impl RngCore + 'static) -> Self {
        let mut rng: Box<dyn RngCore> = Box::new(rng);
        let state = rng.random_range(STATE_RANGE);

        Subject {
            state,
            observers: Vec::with_capacity(16),
            next_key: 0,
            rng,
        }
    }

    /// Creates a new `Subject` whose states are reproducible for a given `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Subject::new(StdRng::seed_from_u64(seed))
    }

    /// Returns the current state.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Returns the number of attached observers, duplicates included.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if no observers are attached, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Subscription keys in notification order.
    pub fn keys(&self) -> impl Iterator<Item = SubscriptionKey> + '_ {
        self.observers.iter().map(|(key, _)| *key)
    }

    /// Returns `true` if `observer` is attached at least once.
    pub fn contains(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers.iter().any(|(_, o)| same_observer(o, observer))
    }

    /// Appends `observer` to the end of the subscriber list.
    ///
    /// Attaching never fails. Attaching an observer that is already attached adds a
    /// second subscription for it.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) -> SubscriptionKey {
        let key = gen_key(&mut self.next_key);
        self.observers.push((key, observer));
        info!(%key, "Subject: Attached an observer.");
        key
    }

    /// Removes the first subscription holding this very `observer`.
    ///
    /// Observers are compared by identity, not by value. Returns `false` and leaves
    /// the subscriber list untouched if `observer` is not attached.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool {
        let position = self
            .observers
            .iter()
            .position(|(_, o)| same_observer(o, observer));

        match position {
            Some(idx) => {
                let (key, _) = self.observers.remove(idx);
                info!(%key, "Subject: Detached an observer.");
                true
            }
            None => false,
        }
    }

    /// Removes the subscription identified by `key`, if it is still attached.
    pub fn detach_key(&mut self, key: SubscriptionKey) -> bool {
        match self.observers.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                self.observers.remove(idx);
                info!(%key, "Subject: Detached an observer.");
                true
            }
            None => false,
        }
    }

    /// Triggers an update in each subscriber.
    ///
    /// Every attached observer is called exactly once, in attachment order, whatever
    /// the current state is. A failing observer does not stop the pass; all failures
    /// are reported together once every observer has been called.
    pub fn notify(&self) -> Result<(), NotifyError> {
        debug!(observers = self.observers.len(), "Subject: Notifying observers...");

        let mut failures = Vec::new();
        for (key, observer) in &self.observers {
            if let Err(e) = observer.update(self) {
                warn!(%key, observer = observer.name(), error = %e, "observer failed to react");
                failures.push((*key, e));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError::new(failures))
        }
    }

    /// Picks a new state from the random source and notifies the observers.
    ///
    /// The new state is kept even if some observers fail to react to it.
    pub fn some_business_logic(&mut self) -> Result<(), NotifyError> {
        info!("Subject: I'm doing something important.");
        let state = self.rng.random_range(STATE_RANGE);
        self.set_state(state)
    }

    /// Sets the state to `state` and notifies the observers.
    pub(crate) fn set_state(&mut self, state: i32) -> Result<(), NotifyError> {
        self.state = state;
        info!(state, "Subject: My state has just changed to: {}", state);
        self.notify()
    }
}

impl Default for Subject {
    /// A `Subject` seeded from operating system entropy.
    fn default() -> Self {
        Subject::new(StdRng::from_os_rng())
    }
}

fn same_observer(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    // Compare data pointers only, vtable pointers of the same type may differ.
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
