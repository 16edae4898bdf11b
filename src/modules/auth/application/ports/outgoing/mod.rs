pub mod admission_control;
pub mod user_query;
pub mod user_repository;
pub mod verification_ledger;

pub use admission_control::{AdmissionControl, AdmissionDecision, AdmissionError, RequestContext};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError};
pub use verification_ledger::{VerificationLedger, VerificationLedgerError};
