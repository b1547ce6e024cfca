//! Pages and page logic for the email-verification and account-deletion links.

pub mod flow;

mod layout;
pub use layout::{Footer, Navbar, PageFrame, Spinner};

mod pages;
pub use pages::{DeleteAccountPage, VerifyEmailPage};

mod redirect;
pub use redirect::{use_redirect_timer, RedirectTimer};

mod remote;
pub use remote::RemoteVerificationApi;

mod session;
pub use session::{clear_pending_verification_email, PENDING_VERIFICATION_EMAIL};

mod timer;

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};
