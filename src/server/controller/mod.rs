pub mod auth;
pub mod category;
pub mod server;

#[cfg(test)]
mod test;
