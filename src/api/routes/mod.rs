pub mod health;
pub mod chat;
pub mod journal;
pub mod mood;
pub mod resources;
