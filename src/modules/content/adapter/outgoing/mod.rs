mod content_rows;
mod content_store_postgres;
pub mod sea_orm_entity;

pub use content_store_postgres::{ContentStorePostgres, ContentTxPostgres};
