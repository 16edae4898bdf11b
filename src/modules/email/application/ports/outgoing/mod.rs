pub mod auth_notifier;
pub mod email_sender;

pub use auth_notifier::{AuthEmailNotifier, NotificationError};
pub use email_sender::EmailSender;
