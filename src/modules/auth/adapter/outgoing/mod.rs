pub mod admission_http;
pub mod sea_orm_entity;
pub mod user_query_postgres;
pub mod user_repository_postgres;
pub mod verification_ledger_postgres;
