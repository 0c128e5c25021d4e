mod category;
mod server;
mod user;
