//! Wordhash - Trigram Word Hashing for Knowledge Graph Entities
//!
//! Turns entity records (name, description, connections, relations, types)
//! into fixed-length count vectors suitable as model input.

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod models;
