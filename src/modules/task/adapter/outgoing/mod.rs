pub mod sea_orm_entity;
pub mod task_repository_postgres;
