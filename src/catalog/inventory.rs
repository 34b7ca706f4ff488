//! Retailer stock, orders and suppliers

use super::search::Named;
use super::Tab;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub stock: u32,
    pub unit: &'static str,
    pub price: &'static str,
    pub supplier: &'static str,
    pub batch_code: &'static str,
    pub expiry_date: &'static str,
}

impl InventoryItem {
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock <= threshold
    }
}

impl Named for InventoryItem {
    fn name(&self) -> &str {
        self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub items: u32,
    pub total: &'static str,
    pub status: OrderStatus,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub name: &'static str,
    pub location: &'static str,
    pub products: &'static [&'static str],
    pub rating: f32,
    pub certified: bool,
}

impl Named for Supplier {
    fn name(&self) -> &str {
        self.name
    }
}

/// Headline numbers for the inventory tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub products: usize,
    pub units: u32,
    pub low_stock: usize,
}

impl InventorySummary {
    pub fn of(items: &[InventoryItem], threshold: u32) -> Self {
        Self {
            products: items.len(),
            units: items.iter().map(|i| i.stock).sum(),
            low_stock: items.iter().filter(|i| i.is_low_stock(threshold)).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetailerTab {
    Inventory,
    Orders,
    Suppliers,
}

impl Tab for RetailerTab {
    fn all() -> &'static [Self] {
        &[RetailerTab::Inventory, RetailerTab::Orders, RetailerTab::Suppliers]
    }

    fn label(self) -> &'static str {
        match self {
            RetailerTab::Inventory => "Inventory",
            RetailerTab::Orders => "Orders",
            RetailerTab::Suppliers => "Suppliers",
        }
    }
}

static INVENTORY: [InventoryItem; 5] = [
    InventoryItem {
        id: 1,
        name: "Fresh Tomatoes",
        category: "Vegetables",
        stock: 120,
        unit: "lb",
        price: "$2.99/lb",
        supplier: "Green Valley Farm",
        batch_code: "CT-TOM-2501",
        expiry_date: "2025-01-25",
    },
    InventoryItem {
        id: 2,
        name: "Organic Apples",
        category: "Fruits",
        stock: 18,
        unit: "lb",
        price: "$3.49/lb",
        supplier: "Himachal Orchards",
        batch_code: "CT-APL-2501",
        expiry_date: "2025-02-08",
    },
    InventoryItem {
        id: 3,
        name: "Sweet Corn",
        category: "Vegetables",
        stock: 64,
        unit: "ears",
        price: "$1.99/ear",
        supplier: "Green Valley Farm",
        batch_code: "CT-CRN-2501",
        expiry_date: "2025-01-19",
    },
    InventoryItem {
        id: 4,
        name: "Baby Spinach",
        category: "Leafy Greens",
        stock: 9,
        unit: "bags",
        price: "$2.49/bag",
        supplier: "Sunrise Organics",
        batch_code: "CT-SPN-2501",
        expiry_date: "2025-01-20",
    },
    InventoryItem {
        id: 5,
        name: "Basmati Rice",
        category: "Grains",
        stock: 240,
        unit: "kg",
        price: "$1.80/kg",
        supplier: "Punjab Grain Co-op",
        batch_code: "CT-RCE-2412",
        expiry_date: "2025-12-01",
    },
];

static ORDERS: [Order; 4] = [
    Order {
        id: "ORD-1042",
        customer: "Fresh Basket Cafe",
        items: 12,
        total: "$148.20",
        status: OrderStatus::Pending,
        date: "2025-01-16",
    },
    Order {
        id: "ORD-1041",
        customer: "City Deli",
        items: 5,
        total: "$62.75",
        status: OrderStatus::Processing,
        date: "2025-01-15",
    },
    Order {
        id: "ORD-1039",
        customer: "Green Bowl Kitchen",
        items: 20,
        total: "$231.00",
        status: OrderStatus::Shipped,
        date: "2025-01-14",
    },
    Order {
        id: "ORD-1035",
        customer: "Harbor Grocers",
        items: 8,
        total: "$96.40",
        status: OrderStatus::Delivered,
        date: "2025-01-11",
    },
];

static SUPPLIERS: [Supplier; 4] = [
    Supplier {
        name: "Green Valley Farm",
        location: "Nashik, Maharashtra",
        products: &["Tomatoes", "Corn", "Onions"],
        rating: 4.8,
        certified: true,
    },
    Supplier {
        name: "Himachal Orchards",
        location: "Shimla, Himachal Pradesh",
        products: &["Apples", "Pears", "Plums"],
        rating: 4.6,
        certified: true,
    },
    Supplier {
        name: "Sunrise Organics",
        location: "Pune, Maharashtra",
        products: &["Spinach", "Lettuce", "Herbs"],
        rating: 4.3,
        certified: false,
    },
    Supplier {
        name: "Punjab Grain Co-op",
        location: "Ludhiana, Punjab",
        products: &["Rice", "Wheat"],
        rating: 4.5,
        certified: true,
    },
];

pub fn inventory() -> &'static [InventoryItem] {
    &INVENTORY
}

pub fn orders() -> &'static [Order] {
    &ORDERS
}

pub fn suppliers() -> &'static [Supplier] {
    &SUPPLIERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter_by_name, find_batch};

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let apples = &inventory()[1];
        assert!(apples.is_low_stock(18));
        assert!(!apples.is_low_stock(17));
    }

    #[test]
    fn test_summary() {
        let summary = InventorySummary::of(inventory(), 20);
        assert_eq!(summary.products, 5);
        assert_eq!(summary.units, 120 + 18 + 64 + 9 + 240);
        assert_eq!(summary.low_stock, 2);
    }

    #[test]
    fn test_inventory_search() {
        let found = filter_by_name(inventory(), "rice");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Grains");
    }

    #[test]
    fn test_inventory_batches_are_traceable() {
        for item in inventory() {
            assert!(find_batch(item.batch_code).is_some(), "{}", item.batch_code);
        }
    }
}
