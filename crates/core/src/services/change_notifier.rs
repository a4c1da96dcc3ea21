use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{error, warn};

use crate::errors::CoreError;

type Observer = Rc<dyn Fn() -> Result<(), CoreError>>;

/// Fans a "basket changed" signal out to every subscribed view.
///
/// Observers receive no arguments; they re-query the store themselves.
/// Each notification round calls every observer exactly once, in
/// subscription order. An observer that errors or panics is logged and
/// skipped; the rest of the round still runs.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: RefCell<Vec<Observer>>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers added while a round is running are
    /// called from the next round on.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn() -> Result<(), CoreError> + 'static,
    {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Run one notification round. Returns how many observers failed.
    pub fn notify(&self) -> usize {
        // Snapshot so observers may subscribe (or mutate the store) re-entrantly.
        let round: Vec<Observer> = self.observers.borrow().clone();
        let mut failed = 0;

        for (index, observer) in round.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| (**observer)())) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failed += 1;
                    warn!(observer = index, error = %e, "basket observer failed");
                }
                Err(payload) => {
                    failed += 1;
                    error!(
                        observer = index,
                        panic = panic_message(payload.as_ref()),
                        "basket observer panicked"
                    );
                }
            }
        }

        failed
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
