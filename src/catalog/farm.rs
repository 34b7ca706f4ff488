//! Crops and field tasks for the default dashboard

use super::search::Named;
use super::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropStatus {
    Growing,
    ReadyToHarvest,
    Harvested,
}

impl CropStatus {
    pub fn label(self) -> &'static str {
        match self {
            CropStatus::Growing => "Growing",
            CropStatus::ReadyToHarvest => "Ready to harvest",
            CropStatus::Harvested => "Harvested",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    pub id: u32,
    pub name: &'static str,
    pub variety: &'static str,
    pub field: &'static str,
    pub area_acres: f32,
    pub planted: &'static str,
    pub expected_harvest: &'static str,
    pub status: CropStatus,
    /// Field health score, 0-100
    pub health: u8,
}

impl Named for Crop {
    fn name(&self) -> &str {
        self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmTask {
    pub title: &'static str,
    pub field: &'static str,
    pub due: &'static str,
    pub priority: Priority,
    pub done: bool,
}

/// Overview tiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarmStats {
    pub crops: usize,
    pub acres: f32,
    pub ready: usize,
    pub average_health: u8,
    pub open_tasks: usize,
}

impl FarmStats {
    pub fn of(crops: &[Crop], tasks: &[FarmTask]) -> Self {
        let average_health = if crops.is_empty() {
            0
        } else {
            let total: u32 = crops.iter().map(|c| u32::from(c.health)).sum();
            (total / crops.len() as u32) as u8
        };

        Self {
            crops: crops.len(),
            acres: crops.iter().map(|c| c.area_acres).sum(),
            ready: crops
                .iter()
                .filter(|c| c.status == CropStatus::ReadyToHarvest)
                .count(),
            average_health,
            open_tasks: tasks.iter().filter(|t| !t.done).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FarmTab {
    Overview,
    Crops,
    Tasks,
}

impl Tab for FarmTab {
    fn all() -> &'static [Self] {
        &[FarmTab::Overview, FarmTab::Crops, FarmTab::Tasks]
    }

    fn label(self) -> &'static str {
        match self {
            FarmTab::Overview => "Overview",
            FarmTab::Crops => "Crops",
            FarmTab::Tasks => "Tasks",
        }
    }
}

static CROPS: [Crop; 4] = [
    Crop {
        id: 1,
        name: "Tomatoes",
        variety: "Roma",
        field: "North Field",
        area_acres: 2.5,
        planted: "2024-10-20",
        expected_harvest: "2025-01-15",
        status: CropStatus::Harvested,
        health: 92,
    },
    Crop {
        id: 2,
        name: "Sweet Corn",
        variety: "Golden Bantam",
        field: "East Field",
        area_acres: 4.0,
        planted: "2024-10-05",
        expected_harvest: "2025-01-12",
        status: CropStatus::ReadyToHarvest,
        health: 88,
    },
    Crop {
        id: 3,
        name: "Wheat",
        variety: "HD-2967",
        field: "South Field",
        area_acres: 6.0,
        planted: "2024-11-15",
        expected_harvest: "2025-04-10",
        status: CropStatus::Growing,
        health: 79,
    },
    Crop {
        id: 4,
        name: "Spinach",
        variety: "Palak All Green",
        field: "Greenhouse 1",
        area_acres: 0.5,
        planted: "2024-12-20",
        expected_harvest: "2025-01-28",
        status: CropStatus::Growing,
        health: 95,
    },
];

static TASKS: [FarmTask; 4] = [
    FarmTask {
        title: "Harvest sweet corn",
        field: "East Field",
        due: "2025-01-18",
        priority: Priority::High,
        done: false,
    },
    FarmTask {
        title: "Irrigate wheat",
        field: "South Field",
        due: "2025-01-19",
        priority: Priority::Medium,
        done: false,
    },
    FarmTask {
        title: "Pest inspection",
        field: "Greenhouse 1",
        due: "2025-01-21",
        priority: Priority::Low,
        done: false,
    },
    FarmTask {
        title: "Pack tomato batch CT-TOM-2501",
        field: "North Field",
        due: "2025-01-16",
        priority: Priority::High,
        done: true,
    },
];

pub fn crops() -> &'static [Crop] {
    &CROPS
}

pub fn tasks() -> &'static [FarmTask] {
    &TASKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let stats = FarmStats::of(crops(), tasks());
        assert_eq!(stats.crops, 4);
        assert_eq!(stats.ready, 1);
        // 354 / 4, truncated
        assert_eq!(stats.average_health, 88);
        assert_eq!(stats.open_tasks, 3);
        assert!((stats.acres - 13.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stats_empty() {
        let stats = FarmStats::of(&[], &[]);
        assert_eq!(stats.average_health, 0);
        assert_eq!(stats.crops, 0);
    }
}
