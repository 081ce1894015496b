//! Crisis-aware emotional support service: a chat pipeline that flags
//! self-harm risk before calling a language model, plus mood and journal
//! storage behind a small JSON API.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod llm;
pub mod models;
pub mod responder;
