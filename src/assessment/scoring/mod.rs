//! Pure scoring rules: category aggregation, risk banding, recommendations
//! and the deterministic fallback narratives. No I/O, no shared state;
//! everything here is safe to call concurrently.

pub mod categories;
pub mod narrative;
pub mod recommend;
pub mod risk;
