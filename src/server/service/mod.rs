//! Service layer between controllers and repositories.
//!
//! Services work with domain models and `AppError`. They hold a borrowed connection and
//! are created per request.

pub mod category;
pub mod server;
pub mod user;
