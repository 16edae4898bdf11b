pub mod login;
pub mod register;
pub mod resend_verification;
pub mod reset_password;
pub mod reset_password_request;
pub mod verify_email;

pub use login::login_handler;
pub use register::register_handler;
pub use resend_verification::resend_verification_handler;
pub use reset_password::reset_password_handler;
pub use reset_password_request::reset_password_request_handler;
pub use verify_email::verify_email_handler;
