//! # IO Module
//!
//! Adapter layer between callers and the domain. Maps the public DTOs from
//! the `shared` crate to domain commands and renders domain results back
//! into DTOs.

pub mod mappers;
