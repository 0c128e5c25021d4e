//! Database repository layer.
//!
//! Repositories hold a borrowed connection, use SeaORM entity models internally and
//! return domain or row models to the service layer. All queries are read-only.

pub mod category;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;
