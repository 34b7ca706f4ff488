//! Traceability records
//!
//! Each batch carries its supply-chain history from harvest to shelf. The
//! verification page looks batches up by code; the trace page searches
//! them by product name.

use super::search::Named;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Harvested,
    QualityCheck,
    Packed,
    Shipped,
    Delivered,
}

impl StageKind {
    pub fn label(self) -> &'static str {
        match self {
            StageKind::Harvested => "Harvested",
            StageKind::QualityCheck => "Quality check",
            StageKind::Packed => "Packed",
            StageKind::Shipped => "In transit",
            StageKind::Delivered => "Delivered to retailer",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StageKind::Harvested => "🌾",
            StageKind::QualityCheck => "🔬",
            StageKind::Packed => "📦",
            StageKind::Shipped => "🚚",
            StageKind::Delivered => "🏪",
        }
    }
}

/// One step of a batch's journey
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub kind: StageKind,
    pub location: &'static str,
    pub date: &'static str,
    pub handler: &'static str,
    pub note: &'static str,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub body: &'static str,
    pub certificate_id: &'static str,
    pub valid_until: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub code: &'static str,
    pub product: &'static str,
    pub farm: &'static str,
    pub farmer: &'static str,
    pub region: &'static str,
    pub grade: &'static str,
    pub certification: Option<Certification>,
    /// Oldest first
    pub stages: &'static [Stage],
}

impl Batch {
    /// Most recent stage reached
    pub fn current_stage(&self) -> Option<&Stage> {
        self.stages.last()
    }

    /// Every recorded stage was signed off
    pub fn is_fully_verified(&self) -> bool {
        !self.stages.is_empty() && self.stages.iter().all(|s| s.verified)
    }

    /// Certified and fully verified
    pub fn is_authentic(&self) -> bool {
        self.certification.is_some() && self.is_fully_verified()
    }
}

impl Named for Batch {
    fn name(&self) -> &str {
        self.product
    }
}

/// Look a batch up by code, ignoring case and surrounding whitespace
pub fn find_batch(code: &str) -> Option<&'static Batch> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    BATCHES.iter().find(|b| b.code.eq_ignore_ascii_case(code))
}

pub fn batches() -> &'static [Batch] {
    &BATCHES
}

static TOMATO_STAGES: [Stage; 5] = [
    Stage {
        kind: StageKind::Harvested,
        location: "Green Valley Farm, Nashik",
        date: "2025-01-15",
        handler: "Gopal Patil",
        note: "Hand-picked at breaker stage",
        verified: true,
    },
    Stage {
        kind: StageKind::QualityCheck,
        location: "Nashik Agri Lab",
        date: "2025-01-15",
        handler: "Dr. S. Kulkarni",
        note: "Pesticide residue below limits",
        verified: true,
    },
    Stage {
        kind: StageKind::Packed,
        location: "Green Valley Packhouse",
        date: "2025-01-16",
        handler: "Packhouse Team B",
        note: "5 kg ventilated crates",
        verified: true,
    },
    Stage {
        kind: StageKind::Shipped,
        location: "NH-160, Nashik to Mumbai",
        date: "2025-01-16",
        handler: "CoolChain Logistics",
        note: "Reefer truck at 12°C",
        verified: true,
    },
    Stage {
        kind: StageKind::Delivered,
        location: "Fresh Mart, Andheri",
        date: "2025-01-17",
        handler: "Ravi Kumar",
        note: "Received in good condition",
        verified: true,
    },
];

static APPLE_STAGES: [Stage; 4] = [
    Stage {
        kind: StageKind::Harvested,
        location: "Himachal Orchards, Shimla",
        date: "2025-01-08",
        handler: "Anil Thakur",
        note: "Royal Delicious, grade A",
        verified: true,
    },
    Stage {
        kind: StageKind::QualityCheck,
        location: "Shimla Fruit Lab",
        date: "2025-01-09",
        handler: "Dr. M. Negi",
        note: "Organic residue screen passed",
        verified: true,
    },
    Stage {
        kind: StageKind::Packed,
        location: "Himachal Orchards Packhouse",
        date: "2025-01-10",
        handler: "Packhouse Team A",
        note: "Tray-packed, 80 count",
        verified: true,
    },
    Stage {
        kind: StageKind::Shipped,
        location: "Shimla to Delhi",
        date: "2025-01-11",
        handler: "Hill Freight",
        note: "Awaiting delivery scan",
        verified: false,
    },
];

static CORN_STAGES: [Stage; 3] = [
    Stage {
        kind: StageKind::Harvested,
        location: "Green Valley Farm, Nashik",
        date: "2025-01-12",
        handler: "Gopal Patil",
        note: "Harvested at milk stage",
        verified: true,
    },
    Stage {
        kind: StageKind::QualityCheck,
        location: "Nashik Agri Lab",
        date: "2025-01-12",
        handler: "Dr. S. Kulkarni",
        note: "Moisture and size grading",
        verified: true,
    },
    Stage {
        kind: StageKind::Delivered,
        location: "Fresh Mart, Andheri",
        date: "2025-01-13",
        handler: "Ravi Kumar",
        note: "Direct farm delivery",
        verified: true,
    },
];

static SPINACH_STAGES: [Stage; 2] = [
    Stage {
        kind: StageKind::Harvested,
        location: "Sunrise Organics, Pune",
        date: "2025-01-14",
        handler: "Meera Joshi",
        note: "Morning harvest",
        verified: true,
    },
    Stage {
        kind: StageKind::Packed,
        location: "Sunrise Organics",
        date: "2025-01-14",
        handler: "Meera Joshi",
        note: "Washed and bagged",
        verified: true,
    },
];

static RICE_STAGES: [Stage; 4] = [
    Stage {
        kind: StageKind::Harvested,
        location: "Punjab Grain Co-op, Ludhiana",
        date: "2024-11-20",
        handler: "Harjit Singh",
        note: "Combine harvested",
        verified: true,
    },
    Stage {
        kind: StageKind::QualityCheck,
        location: "Ludhiana Grain Lab",
        date: "2024-12-02",
        handler: "Dr. P. Gill",
        note: "Aged 10 days, moisture 12%",
        verified: true,
    },
    Stage {
        kind: StageKind::Packed,
        location: "Co-op Mill",
        date: "2024-12-05",
        handler: "Mill Team",
        note: "25 kg jute sacks",
        verified: true,
    },
    Stage {
        kind: StageKind::Delivered,
        location: "Fresh Mart, Andheri",
        date: "2024-12-12",
        handler: "Ravi Kumar",
        note: "Stored in dry section",
        verified: true,
    },
];

static BATCHES: [Batch; 5] = [
    Batch {
        code: "CT-TOM-2501",
        product: "Fresh Tomatoes",
        farm: "Green Valley Farm",
        farmer: "Gopal Patil",
        region: "Nashik, Maharashtra",
        grade: "A",
        certification: Some(Certification {
            body: "India Organic (NPOP)",
            certificate_id: "NPOP-MH-44821",
            valid_until: "2026-03-31",
        }),
        stages: &TOMATO_STAGES,
    },
    Batch {
        code: "CT-APL-2501",
        product: "Organic Apples",
        farm: "Himachal Orchards",
        farmer: "Anil Thakur",
        region: "Shimla, Himachal Pradesh",
        grade: "A",
        certification: Some(Certification {
            body: "India Organic (NPOP)",
            certificate_id: "NPOP-HP-10377",
            valid_until: "2025-09-30",
        }),
        stages: &APPLE_STAGES,
    },
    Batch {
        code: "CT-CRN-2501",
        product: "Sweet Corn",
        farm: "Green Valley Farm",
        farmer: "Gopal Patil",
        region: "Nashik, Maharashtra",
        grade: "B",
        certification: Some(Certification {
            body: "GLOBALG.A.P.",
            certificate_id: "GGN-4063061981402",
            valid_until: "2025-11-15",
        }),
        stages: &CORN_STAGES,
    },
    Batch {
        code: "CT-SPN-2501",
        product: "Baby Spinach",
        farm: "Sunrise Organics",
        farmer: "Meera Joshi",
        region: "Pune, Maharashtra",
        grade: "A",
        certification: None,
        stages: &SPINACH_STAGES,
    },
    Batch {
        code: "CT-RCE-2412",
        product: "Basmati Rice",
        farm: "Punjab Grain Co-op",
        farmer: "Harjit Singh",
        region: "Ludhiana, Punjab",
        grade: "A",
        certification: Some(Certification {
            body: "FSSAI",
            certificate_id: "FSSAI-10019022004511",
            valid_until: "2026-06-30",
        }),
        stages: &RICE_STAGES,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter_by_name;

    #[test]
    fn test_find_batch_normalizes_input() {
        let batch = find_batch("  ct-tom-2501\n").unwrap();
        assert_eq!(batch.product, "Fresh Tomatoes");
        assert!(find_batch("CT-XXX-0000").is_none());
        assert!(find_batch("   ").is_none());
    }

    #[test]
    fn test_authenticity() {
        assert!(find_batch("CT-TOM-2501").unwrap().is_authentic());

        // Last stage not yet signed off
        let apples = find_batch("CT-APL-2501").unwrap();
        assert!(!apples.is_fully_verified());
        assert!(!apples.is_authentic());

        // Verified but uncertified
        let spinach = find_batch("CT-SPN-2501").unwrap();
        assert!(spinach.is_fully_verified());
        assert!(!spinach.is_authentic());
    }

    #[test]
    fn test_current_stage() {
        let batch = find_batch("CT-APL-2501").unwrap();
        assert_eq!(batch.current_stage().map(|s| s.kind), Some(StageKind::Shipped));
    }

    #[test]
    fn test_search_by_product() {
        let found = filter_by_name(batches(), "corn");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "CT-CRN-2501");
    }
}
