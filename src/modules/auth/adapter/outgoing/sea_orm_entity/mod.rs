pub mod users;
pub mod verifications;
