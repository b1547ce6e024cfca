use crate::timer::sleep;
use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Owns at most one pending timed navigation for a page.
///
/// Scheduling again replaces the pending one. Pages cancel it from
/// `use_drop`, so a redirect never fires after the view is gone.
#[derive(Clone, Default)]
pub struct RedirectTimer {
    generation: Rc<Cell<u64>>,
    pending: Rc<Cell<Option<Task>>>,
}

impl RedirectTimer {
    pub fn schedule(&self, after: Duration, on_fire: impl FnOnce() + 'static) {
        let task = spawn(self.rearm(after, on_fire));
        self.pending.set(Some(task));
    }

    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Drop whatever is pending and return the wait for a new redirect.
    ///
    /// The returned future calls `on_fire` only if no `cancel` or later
    /// `rearm` happened while it slept.
    fn rearm(
        &self,
        after: Duration,
        on_fire: impl FnOnce() + 'static,
    ) -> impl Future<Output = ()> + 'static {
        self.cancel();
        let generation = self.generation.clone();
        let armed_at = generation.get();
        async move {
            sleep(after).await;
            if generation.get() == armed_at {
                on_fire();
            }
        }
    }
}

/// A [`RedirectTimer`] tied to the calling component's lifetime.
pub fn use_redirect_timer() -> RedirectTimer {
    let timer = use_hook(RedirectTimer::default);
    use_drop({
        let timer = timer.clone();
        move || timer.cancel()
    });
    timer
}
