//! Request-scoped helpers for session access and authentication.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
