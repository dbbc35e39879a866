//! Database-backed word store using SeaORM.

pub mod entities;
mod seaorm_store;

pub use seaorm_store::SeaOrmWordStore;
