//! Consumer-facing produce catalog

use super::search::Named;
use super::{days_between, Tab};

/// A product card on the consumer dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub price: &'static str,
    pub nutrition: Nutrition,
    pub cooking_methods: &'static [&'static str],
    pub seasonal_availability: &'static str,
    pub origin: &'static str,
    pub harvest_date: &'static str,
    pub expiry_date: &'static str,
    pub storage_tips: &'static str,
}

/// Nutrition facts per 100g serving
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: &'static str,
    pub fiber: &'static str,
    pub vitamin_c: &'static str,
}

impl Nutrition {
    /// Labelled values in display order
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            ("Calories", self.calories.to_string()),
            ("Protein", self.protein.to_string()),
            ("Fiber", self.fiber.to_string()),
            ("Vitamin C", self.vitamin_c.to_string()),
        ]
    }
}

impl Product {
    /// Days between harvest and expiry
    pub fn shelf_life_days(&self) -> Option<i64> {
        days_between(self.harvest_date, self.expiry_date)
    }
}

impl Named for Product {
    fn name(&self) -> &str {
        self.name
    }
}

/// Produce in season and what to buy
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalTip {
    pub season: &'static str,
    pub tip: &'static str,
    pub products: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumerTab {
    Products,
    Seasonal,
    Nutrition,
    Recipes,
}

impl Tab for ConsumerTab {
    fn all() -> &'static [Self] {
        &[
            ConsumerTab::Products,
            ConsumerTab::Seasonal,
            ConsumerTab::Nutrition,
            ConsumerTab::Recipes,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            ConsumerTab::Products => "Products",
            ConsumerTab::Seasonal => "Seasonal",
            ConsumerTab::Nutrition => "Nutrition",
            ConsumerTab::Recipes => "Recipes",
        }
    }
}

static PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        name: "Fresh Tomatoes",
        image: "https://agricultureguruji.com/wp-content/uploads/2018/09/tomato-2643774_1280.jpg.webp",
        price: "$2.99/lb",
        nutrition: Nutrition {
            calories: 22,
            protein: "1.1g",
            fiber: "1.2g",
            vitamin_c: "13.7mg",
        },
        cooking_methods: &["Salad", "Sauce", "Soup", "Grilled"],
        seasonal_availability: "Year-round",
        origin: "Local Farm",
        harvest_date: "2025-01-15",
        expiry_date: "2025-01-25",
        storage_tips: "Store at room temperature until ripe, then refrigerate",
    },
    Product {
        id: 2,
        name: "Organic Apples",
        image: "https://extension.umn.edu/sites/extension.umn.edu/files/Two%20apples%20close-up_screen.jpg",
        price: "$3.49/lb",
        nutrition: Nutrition {
            calories: 95,
            protein: "0.5g",
            fiber: "4.4g",
            vitamin_c: "8.4mg",
        },
        cooking_methods: &["Raw", "Baking", "Juice", "Salad"],
        seasonal_availability: "Fall",
        origin: "Himachal Farm",
        harvest_date: "2025-01-08",
        expiry_date: "2025-02-08",
        storage_tips: "Refrigerate in crisper drawer",
    },
    Product {
        id: 3,
        name: "Sweet Corn",
        image: "https://naturespath.com/cdn/shop/articles/growing_corn-948938.jpg?v=1725927714&width=2000",
        price: "$1.99/ear",
        nutrition: Nutrition {
            calories: 88,
            protein: "3.2g",
            fiber: "2.7g",
            vitamin_c: "6.8mg",
        },
        cooking_methods: &["Boiled", "Grilled", "Soup", "Salad"],
        seasonal_availability: "Summer",
        origin: "Local Farm",
        harvest_date: "2025-01-12",
        expiry_date: "2025-01-19",
        storage_tips: "Keep in husk and refrigerate",
    },
];

static SEASONAL_TIPS: [SeasonalTip; 4] = [
    SeasonalTip {
        season: "Winter",
        tip: "Root vegetables and winter squash are at their peak",
        products: &["Carrots", "Potatoes", "Squash", "Onions"],
    },
    SeasonalTip {
        season: "Spring",
        tip: "Fresh greens and early vegetables are abundant",
        products: &["Spinach", "Lettuce", "Asparagus", "Peas"],
    },
    SeasonalTip {
        season: "Summer",
        tip: "Berries, tomatoes, and corn are in season",
        products: &["Strawberries", "Tomatoes", "Corn", "Zucchini"],
    },
    SeasonalTip {
        season: "Fall",
        tip: "Apples, pumpkins, and hearty vegetables",
        products: &["Apples", "Pumpkins", "Sweet Potatoes", "Brussels Sprouts"],
    },
];

static RECIPES: [Recipe; 2] = [
    Recipe {
        title: "Fresh Tomato Salad",
        description: "Combine fresh tomatoes with basil, mozzarella, and balsamic vinaigrette",
        time: "Prep time: 10 minutes",
    },
    Recipe {
        title: "Grilled Corn",
        description: "Grill corn in husk, then brush with butter and sprinkle with salt",
        time: "Cook time: 15 minutes",
    },
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn seasonal_tips() -> &'static [SeasonalTip] {
    &SEASONAL_TIPS
}

pub fn recipes() -> &'static [Recipe] {
    &RECIPES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter_by_name;

    #[test]
    fn test_tabs_in_order() {
        let labels: Vec<_> = ConsumerTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Products", "Seasonal", "Nutrition", "Recipes"]);
    }

    #[test]
    fn test_product_search() {
        let found = filter_by_name(products(), "APPLE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        assert_eq!(filter_by_name(products(), "").len(), 3);
        assert!(filter_by_name(products(), "kale").is_empty());
    }

    #[test]
    fn test_nutrition_entries() {
        let entries = products()[0].nutrition.entries();
        assert_eq!(entries[0], ("Calories", "22".to_string()));
        assert_eq!(entries[3], ("Vitamin C", "13.7mg".to_string()));
    }

    #[test]
    fn test_shelf_life() {
        assert_eq!(products()[2].shelf_life_days(), Some(7));
    }
}
