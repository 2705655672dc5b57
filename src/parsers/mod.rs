//! Decoders for the two response formats

pub mod dictionary;
pub mod translation;
