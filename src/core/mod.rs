//! Core types shared by both clients

pub mod config;
pub mod endpoint;
pub mod errors;
pub mod language;
pub mod transport;
