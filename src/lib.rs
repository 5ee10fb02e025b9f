//! Responder: a question and answer HTTP API persisted as one JSON document.

pub mod api;
pub mod config;
pub mod models;
pub mod store;
