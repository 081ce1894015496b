pub mod connection;
pub mod journal;
pub mod mood;
pub mod schema;

pub use connection::Database;
