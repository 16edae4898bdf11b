pub mod complete_password_reset;
pub mod login_user;
pub mod register_user;
pub mod request_password_reset;
pub mod resend_verification;
pub mod verify_email;
