pub mod clients;
pub mod stats;
pub mod users;
