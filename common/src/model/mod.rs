pub mod chat;
pub mod disease;
pub mod soil;
pub mod user;
pub mod weather;
