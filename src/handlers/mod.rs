// src/handlers/mod.rs

pub mod mocks;
pub mod records;
pub mod sectionals;
pub mod stats;
