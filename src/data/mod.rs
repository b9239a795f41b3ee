//! Dashboard Data Layer
//!
//! - **types**: Row structs for the CSV extracts and derived aggregates
//! - **loader**: File resolution and all-or-nothing table loading
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use ecommerce_dashboard::data::{DataSources, Dataset};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(&DataSources::from_dir("./main_data"))?;
//!     println!("Loaded {} rows", dataset.total_rows());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DataError, DataResult};
pub use loader::{parse_table, read_table, DataSources, Dataset};
pub use types::{
    CategoryCount, CityOrderCount, CustomerLocation, OrderItem, PaymentCount,
    StateCategoryCount, UNKNOWN_STATE,
};
