mod delete_account;
pub use delete_account::DeleteAccount;

mod login;
pub use login::Login;

mod verify_email;
pub use verify_email::VerifyEmail;
