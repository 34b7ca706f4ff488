//! Catalog data
//!
//! Static produce, inventory, farm, weather and traceability records shown
//! on the dashboards. Nothing here is fetched, mutated or persisted; the
//! only behavior is name search and display formatting.
//!
//! - [`products`]: consumer products, seasonal tips, recipes
//! - [`inventory`]: retailer stock, orders, suppliers
//! - [`farm`]: crops and tasks for the default dashboard
//! - [`weather`]: the weather widget
//! - [`trace`]: batch histories and verification lookup

pub mod farm;
pub mod inventory;
pub mod products;
pub mod search;
pub mod trace;
pub mod weather;

pub use farm::{Crop, CropStatus, FarmStats, FarmTab, FarmTask, Priority};
pub use inventory::{InventoryItem, InventorySummary, Order, OrderStatus, RetailerTab, Supplier};
pub use products::{ConsumerTab, Nutrition, Product, Recipe, SeasonalTip};
pub use search::{filter_by_name, name_matches, Named};
pub use trace::{find_batch, Batch, Certification, Stage, StageKind};
pub use weather::{Condition, CurrentWeather, DailyForecast};

use chrono::NaiveDate;

/// A sidebar tab on one of the dashboards
pub trait Tab: Copy + PartialEq + 'static {
    /// Tabs in display order; the first is selected initially
    fn all() -> &'static [Self];

    fn label(self) -> &'static str;
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Render a `YYYY-MM-DD` date as `Jan 15, 2025`; other text passes through
pub fn display_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Whole days from `from` to `to`, if both are `YYYY-MM-DD` dates
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    Some((parse_date(to)? - parse_date(from)?).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-01-15"), "Jan 15, 2025");
        assert_eq!(display_date("Year-round"), "Year-round");
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between("2025-01-15", "2025-01-25"), Some(10));
        assert_eq!(days_between("2025-01-08", "2025-02-08"), Some(31));
        assert_eq!(days_between("2025-01-15", "soon"), None);
    }
}
