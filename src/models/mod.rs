// src/models/mod.rs

pub mod mock_test;
pub mod record;
pub mod section;
pub mod stats;
pub mod table;
