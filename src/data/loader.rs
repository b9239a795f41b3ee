//! Data Loader
//!
//! Reads the four CSV extracts into typed, immutable tables. Loading is
//! all-or-nothing: the first missing file or unparsable row aborts the load.

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::error::{DataError, DataResult};
use super::types::{CityOrderCount, CustomerLocation, OrderItem, StateCategoryCount};
use crate::analysis::states::enrich_locations;

pub const ORDER_ITEMS_FILE: &str = "items_orders_products_data.csv";
pub const CUSTOMER_LOCATIONS_FILE: &str = "state_mark_customer_count_data.csv";
pub const CITY_ORDERS_FILE: &str = "order_city_count_data.csv";
pub const STATE_CATEGORIES_FILE: &str = "product_in_state_data.csv";

/// Resolved paths of the four input files
#[derive(Debug, Clone, PartialEq)]
pub struct DataSources {
    pub order_items: PathBuf,
    pub customer_locations: PathBuf,
    pub city_orders: PathBuf,
    pub state_categories: PathBuf,
}

impl DataSources {
    /// Standard file names inside one directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            order_items: dir.join(ORDER_ITEMS_FILE),
            customer_locations: dir.join(CUSTOMER_LOCATIONS_FILE),
            city_orders: dir.join(CITY_ORDERS_FILE),
            state_categories: dir.join(STATE_CATEGORIES_FILE),
        }
    }
}

/// All tables the dashboard reads, loaded once and never mutated afterwards
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub order_items: Vec<OrderItem>,
    pub customer_locations: Vec<CustomerLocation>,
    /// Pre-sorted by order count, descending
    pub city_orders: Vec<CityOrderCount>,
    /// Sorted by product count, descending
    pub state_categories: Vec<StateCategoryCount>,
}

impl Dataset {
    /// Load every table from disk
    pub fn load(sources: &DataSources) -> DataResult<Self> {
        let order_items = read_table(&sources.order_items)?;
        let customer_locations = read_table(&sources.customer_locations)?;
        let city_orders = read_table(&sources.city_orders)?;
        let state_categories = read_table(&sources.state_categories)?;

        let dataset = Self::from_parts(
            order_items,
            customer_locations,
            city_orders,
            state_categories,
        );

        tracing::info!(
            order_items = dataset.order_items.len(),
            customer_locations = dataset.customer_locations.len(),
            city_orders = dataset.city_orders.len(),
            state_categories = dataset.state_categories.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Build a dataset from in-memory rows, applying the same post-load steps as `load`
    pub fn from_parts(
        order_items: Vec<OrderItem>,
        mut customer_locations: Vec<CustomerLocation>,
        city_orders: Vec<CityOrderCount>,
        mut state_categories: Vec<StateCategoryCount>,
    ) -> Self {
        enrich_locations(&mut customer_locations);
        // sort_by is stable: equal counts keep file order
        state_categories.sort_by(|a, b| b.products.cmp(&a.products));

        Self {
            order_items,
            customer_locations,
            city_orders,
            state_categories,
        }
    }

    /// Total number of rows across all tables
    pub fn total_rows(&self) -> usize {
        self.order_items.len()
            + self.customer_locations.len()
            + self.city_orders.len()
            + self.state_categories.len()
    }
}

/// Read one CSV file into typed rows
pub fn read_table<T: DeserializeOwned>(path: &Path) -> DataResult<Vec<T>> {
    if !path.exists() {
        return Err(DataError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    let rows = parse_table(file, path)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Read table");
    Ok(rows)
}

/// Parse CSV rows from any reader; `origin` names the source in errors
pub fn parse_table<T: DeserializeOwned, R: Read>(reader: R, origin: &Path) -> DataResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize()
        .map(|row| row.map_err(|e| DataError::csv(origin, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_fixture_files(dir: &Path) {
        fs::write(
            dir.join(ORDER_ITEMS_FILE),
            "order_id,product_id,product_category_name_english,payment_type
o1,p1,toys,credit_card
o2,p2,electronics,boleto
",
        )
        .unwrap();
        fs::write(
            dir.join(CUSTOMER_LOCATIONS_FILE),
            "customer_state,geolocation_lat,geolocation_lng,customer_id
SP,-23.55,-46.63,41746
ZZ,0.0,0.0,1
",
        )
        .unwrap();
        fs::write(
            dir.join(CITY_ORDERS_FILE),
            "customer_city,order_id
sao paulo,15540
rio de janeiro,6882
",
        )
        .unwrap();
        fs::write(
            dir.join(STATE_CATEGORIES_FILE),
            "state_name,product_category_name_english,product_id
Bahia,toys,12
São Paulo,toys,10
São Paulo,electronics,50
",
        )
        .unwrap();
    }

    #[test]
    fn test_load_all_tables() {
        let dir = tempdir().unwrap();
        write_fixture_files(dir.path());

        let dataset = Dataset::load(&DataSources::from_dir(dir.path())).unwrap();

        assert_eq!(dataset.order_items.len(), 2);
        assert_eq!(dataset.city_orders[0].city, "sao paulo");
        assert_eq!(dataset.total_rows(), 9);

        // Enriched after load
        assert_eq!(
            dataset.customer_locations[0].state_name.as_deref(),
            Some("São Paulo")
        );
        assert_eq!(dataset.customer_locations[1].display_state(), "Unknown");

        // Sorted descending by count
        let counts: Vec<u64> = dataset.state_categories.iter().map(|r| r.products).collect();
        assert_eq!(counts, vec![50, 12, 10]);
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let dir = tempdir().unwrap();
        write_fixture_files(dir.path());
        fs::remove_file(dir.path().join(CITY_ORDERS_FILE)).unwrap();

        let err = Dataset::load(&DataSources::from_dir(dir.path())).unwrap_err();
        match err {
            DataError::MissingFile { path } => assert!(path.ends_with(CITY_ORDERS_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparsable_count_names_the_file() {
        let dir = tempdir().unwrap();
        write_fixture_files(dir.path());
        fs::write(
            dir.path().join(CITY_ORDERS_FILE),
            "customer_city,order_id\nsao paulo,many\n",
        )
        .unwrap();

        let err = Dataset::load(&DataSources::from_dir(dir.path())).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
        assert!(err.to_string().contains(CITY_ORDERS_FILE));
    }

    #[test]
    fn test_parse_table_ignores_extra_columns() {
        let csv_data = "Unnamed: 0,customer_city,order_id\n0,curitiba,1521\n";
        let rows: Vec<CityOrderCount> =
            parse_table(csv_data.as_bytes(), Path::new("inline.csv")).unwrap();

        assert_eq!(rows, vec![CityOrderCount::new("curitiba", 1521)]);
    }

    #[test]
    fn test_stable_sort_keeps_file_order_for_ties() {
        let dataset = Dataset::from_parts(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![
                StateCategoryCount::new("Acre", "toys", 5),
                StateCategoryCount::new("Acre", "books", 5),
                StateCategoryCount::new("Acre", "garden", 9),
            ],
        );

        let categories: Vec<&str> = dataset
            .state_categories
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(categories, vec!["garden", "toys", "books"]);
    }
}
