// src/engine/mod.rs

//! Score aggregation. Pure functions over the stored records: no I/O, no
//! hidden state, same input gives the same output.

pub mod charts;
pub mod dashboard;
pub mod percentile;
pub mod sections;
pub mod trend;

pub use charts::{improvement_text, section_series, total_series};
pub use dashboard::dashboard;
pub use percentile::{PERCENTILE_TABLE, predicted_percentile};
pub use sections::{overall_stats, section_pool, section_stats};
pub use trend::{average, round1, trend};
