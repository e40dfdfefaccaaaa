//! `obsr` is a small implementation of the Observer pattern.
//!
//! A [`Subject`] owns a piece of state together with an ordered list of observers.
//! Whenever the state changes, the subject synchronously calls [`Observer::update`] on
//! every attached observer, in the order they were attached.
//!
//! Observers are attached as `Rc<dyn Observer>` and detached either by identity or by
//! the [`SubscriptionKey`] returned from `attach`. Any type implementing [`Observer`]
//! can be attached, including plain closures:
//!
//!```
//! use std::rc::Rc;
//!
//! use obsr::{Observer, ObserverError, Subject};
//!
//! let mut subject = Subject::from_seed(42);
//!
//! let printer: Rc<dyn Observer> = Rc::new(|s: &Subject| -> Result<(), ObserverError> {
//!     println!("state is now {}", s.state());
//!     Ok(())
//! });
//!
//! let key = subject.attach(printer);
//! subject.some_business_logic().unwrap(); // Prints the new state.
//!
//! subject.detach_key(key);
//! subject.some_business_logic().unwrap(); // Nobody is notified.
//!```
//!
//! The [`observers`] module contains two threshold based observers and the [`demo`]
//! module the scenario run by the `obsr` binary.

mod errors;
pub mod demo;
pub mod logging;
pub mod observer;
pub mod observers;
pub mod subjects;

pub use errors::*;
pub use observer::Observer;
pub use subjects::{Subject, SubscriptionKey};
