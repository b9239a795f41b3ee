//! Row selection rules for the bar charts
//!
//! - top / bottom windows over a descending table
//! - the 5/3/1 fallback tier for the per-state chart
//! - extreme-value highlighting

use crate::data::StateCategoryCount;

/// Rows shown by the top/bottom category and top city charts
pub const WINDOW_SIZE: usize = 10;

/// First `n` rows (all of them if fewer)
pub fn top_n<T>(rows: &[T], n: usize) -> &[T] {
    &rows[..n.min(rows.len())]
}

/// Last `n` rows in table order (all of them if fewer)
pub fn bottom_n<T>(rows: &[T], n: usize) -> &[T] {
    &rows[rows.len().saturating_sub(n)..]
}

/// Number of rows to display for a state with `matching` rows
pub fn fallback_tier(matching: usize) -> usize {
    match matching {
        n if n >= 5 => 5,
        n if n >= 3 => 3,
        n if n >= 1 => 1,
        _ => 0,
    }
}

/// Rows for one state, trimmed to its fallback tier. Table order is preserved,
/// so with a descending table these are the state's best categories.
pub fn rows_for_state<'a>(
    table: &'a [StateCategoryCount],
    state: &str,
) -> Vec<&'a StateCategoryCount> {
    let mut rows: Vec<&StateCategoryCount> =
        table.iter().filter(|row| row.state_name == state).collect();
    rows.truncate(fallback_tier(rows.len()));
    rows
}

/// Distinct state names in first-appearance order
pub fn state_options(table: &[StateCategoryCount]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for row in table {
        if !options.iter().any(|s| s == &row.state_name) {
            options.push(row.state_name.clone());
        }
    }
    options
}

/// Which extreme a chart accents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

/// One flag per value; set for every value equal to the extreme. Empty in, empty out.
pub fn highlight_mask(values: &[u64], extreme: Extreme) -> Vec<bool> {
    let target = match extreme {
        Extreme::Max => values.iter().max(),
        Extreme::Min => values.iter().min(),
    };

    match target {
        Some(&target) => values.iter().map(|v| *v == target).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    #[test]
    fn test_windows() {
        let rows: Vec<u32> = (0..25).collect();
        assert_eq!(top_n(&rows, 10), &rows[..10]);
        assert_eq!(bottom_n(&rows, 10), &rows[15..]);

        let short = vec![1, 2, 3];
        assert_eq!(top_n(&short, 10).len(), 3);
        assert_eq!(bottom_n(&short, 10).len(), 3);

        let empty: Vec<u32> = Vec::new();
        assert!(top_n(&empty, 10).is_empty());
        assert!(bottom_n(&empty, 10).is_empty());
    }

    #[test]
    fn test_fallback_tiers() {
        assert_eq!(fallback_tier(0), 0);
        assert_eq!(fallback_tier(1), 1);
        assert_eq!(fallback_tier(2), 1);
        assert_eq!(fallback_tier(3), 3);
        assert_eq!(fallback_tier(4), 3);
        assert_eq!(fallback_tier(5), 5);
        assert_eq!(fallback_tier(40), 5);
    }

    #[test]
    fn test_rows_for_state_with_four_matches_shows_three() {
        let dataset = sample_dataset();
        let rows = rows_for_state(&dataset.state_categories, "Bahia");

        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["toys", "garden_tools", "books"]);
    }

    #[test]
    fn test_rows_for_state_with_two_matches_shows_top_one() {
        let dataset = sample_dataset();
        let rows = rows_for_state(&dataset.state_categories, "São Paulo");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "electronics");
        assert_eq!(rows[0].products, 50);
    }

    #[test]
    fn test_rows_for_unknown_state_is_empty() {
        let dataset = sample_dataset();
        assert!(rows_for_state(&dataset.state_categories, "Atlantis").is_empty());
    }

    #[test]
    fn test_state_options_first_appearance_order() {
        let dataset = sample_dataset();
        assert_eq!(
            state_options(&dataset.state_categories),
            vec!["São Paulo".to_string(), "Bahia".to_string()]
        );
    }

    #[test]
    fn test_highlight_mask() {
        assert_eq!(
            highlight_mask(&[5, 9, 2, 9], Extreme::Max),
            vec![false, true, false, true]
        );
        assert_eq!(
            highlight_mask(&[5, 9, 2], Extreme::Min),
            vec![false, false, true]
        );
        assert!(highlight_mask(&[], Extreme::Max).is_empty());
    }
}
