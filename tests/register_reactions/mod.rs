use std::{cell::RefCell, rc::Rc};

use obsr::{Observer, ObserverError, Subject};

pub type Reactions = Rc<RefCell<Vec<(usize, i32)>>>;

/// Makes `count` observers which record `(observer id, state seen)` on every update.
pub fn register_reactions_observers(count: usize) -> (Vec<Rc<dyn Observer>>, Reactions) {
    let reactions: Reactions = Rc::new(RefCell::new(Vec::with_capacity(16)));

    let observers = (0..count)
        .map(|id| {
            let reactions_c = Rc::clone(&reactions);
            Rc::new(move |s: &Subject| -> Result<(), ObserverError> {
                // Track update() calls.
                reactions_c.borrow_mut().push((id, s.state()));
                Ok(())
            }) as Rc<dyn Observer>
        })
        .collect();

    (observers, reactions)
}
