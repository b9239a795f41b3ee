//! Dashboard analysis
//!
//! Pure functions over the loaded tables:
//!
//! - **aggregate**: distinct-count group-bys over the join table
//! - **states**: state code to name lookup
//! - **selection**: top/bottom windows, per-state fallback tier, highlights

pub mod aggregate;
pub mod selection;
pub mod states;

pub use aggregate::{category_counts, payment_counts, Summary};
pub use selection::{
    bottom_n, fallback_tier, highlight_mask, rows_for_state, state_options, top_n, Extreme,
    WINDOW_SIZE,
};
pub use states::{enrich_locations, state_name, BRAZILIAN_STATES};
