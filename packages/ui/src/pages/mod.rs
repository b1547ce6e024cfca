use crate::flow::{Outcome, PageStatus};
use crate::redirect::use_redirect_timer;
use crate::session::clear_pending_verification_email;
use crate::toast::use_toasts;
use dioxus::prelude::*;
use std::future::Future;

mod delete_account;
mod verify_email;

pub use delete_account::DeleteAccountPage;
pub use verify_email::VerifyEmailPage;

/// Run a page flow once after mount and apply its outcome.
///
/// The flow runs in a task owned by the component, and the redirect goes
/// through a [`RedirectTimer`](crate::RedirectTimer) cancelled on unmount, so
/// nothing touches the page after it is gone.
pub(crate) fn use_page_flow<F, Fut>(mut flow: F) -> Signal<PageStatus>
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Outcome> + 'static,
{
    let mut status = use_signal(|| PageStatus::Loading);
    let mut started = use_signal(|| false);
    let toasts = use_toasts();
    let timer = use_redirect_timer();
    let navigator = use_navigator();

    use_effect(move || {
        if *started.peek() {
            return;
        }
        started.set(true);

        let pending = flow();
        let timer = timer.clone();
        spawn(async move {
            let outcome = pending.await;
            if outcome.clear_pending_email {
                clear_pending_verification_email().await;
            }
            status.set(outcome.status);
            toasts.notify(&outcome.notice);
            if let Some(redirect) = outcome.redirect {
                timer.schedule(redirect.after, move || {
                    let _ = navigator.push(redirect.to);
                });
            }
        });
    });

    status
}
