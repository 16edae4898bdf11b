pub mod sea_orm_entity;
pub mod workspace_repository_postgres;
