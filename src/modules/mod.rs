pub mod auth;
pub mod email;
pub mod project;
pub mod task;
pub mod workspace;
