//! Classification types
//!
//! The bucket set is an explicit enum with a named fallback member instead
//! of relying on "the last entry of the list".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classification bucket identifier, in declared order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    AlkalineMetal,
    AlkalineEarthMetal,
    Lanthanide,
    Actinide,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    NobleGas,
    /// Fallback for codes no other bucket matches
    Unknown,
}

impl Classification {
    /// Every bucket in declared order; resolution ties go to the earlier one
    pub const ALL: [Classification; 10] = [
        Classification::AlkalineMetal,
        Classification::AlkalineEarthMetal,
        Classification::Lanthanide,
        Classification::Actinide,
        Classification::TransitionMetal,
        Classification::PostTransitionMetal,
        Classification::Metalloid,
        Classification::ReactiveNonmetal,
        Classification::NobleGas,
        Classification::Unknown,
    ];

    /// The fallback bucket
    pub const FALLBACK: Classification = Classification::Unknown;

    /// Position in declared order
    pub fn index(self) -> usize {
        match self {
            Classification::AlkalineMetal => 0,
            Classification::AlkalineEarthMetal => 1,
            Classification::Lanthanide => 2,
            Classification::Actinide => 3,
            Classification::TransitionMetal => 4,
            Classification::PostTransitionMetal => 5,
            Classification::Metalloid => 6,
            Classification::ReactiveNonmetal => 7,
            Classification::NobleGas => 8,
            Classification::Unknown => 9,
        }
    }

    /// The bucket's display data
    pub fn bucket(self) -> &'static ClassificationBucket {
        &BUCKETS[self.index()]
    }

    /// Human-readable category name
    pub fn category(self) -> &'static str {
        self.bucket().category
    }

    pub fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }

    /// Buckets that may appear in a `classification` query parameter
    pub fn public() -> impl Iterator<Item = Classification> {
        Self::ALL.into_iter().filter(|c| !c.is_fallback())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Display data for one classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationBucket {
    pub classification: Classification,
    /// Human-readable category name, e.g. "Noble Gas"
    pub category: &'static str,
    /// Tile background when highlighted
    pub color: &'static str,
    /// Tile background on hover when highlighted
    pub hover_color: &'static str,
}

impl ClassificationBucket {
    pub fn is_fallback(&self) -> bool {
        self.classification.is_fallback()
    }
}

/// Bucket table, indexed by `Classification::index`
pub static BUCKETS: [ClassificationBucket; 10] = [
    ClassificationBucket {
        classification: Classification::AlkalineMetal,
        category: "Alkaline Metal",
        color: "#FFAF80",
        hover_color: "#EF9851",
    },
    ClassificationBucket {
        classification: Classification::AlkalineEarthMetal,
        category: "Alkaline Earth Metal",
        color: "#80FF8E",
        hover_color: "#44E053",
    },
    ClassificationBucket {
        classification: Classification::Lanthanide,
        category: "Lanthanide",
        color: "#C3FF80",
        hover_color: "#ADFE52",
    },
    ClassificationBucket {
        classification: Classification::Actinide,
        category: "Actinide",
        color: "#80FFFC",
        hover_color: "#52C5FE",
    },
    ClassificationBucket {
        classification: Classification::TransitionMetal,
        category: "Transition Metal",
        color: "#FFEF80",
        hover_color: "#C1B45F",
    },
    ClassificationBucket {
        classification: Classification::PostTransitionMetal,
        category: "Post-Transition Metal",
        color: "#80D5FF",
        hover_color: "#52C5FE",
    },
    ClassificationBucket {
        classification: Classification::Metalloid,
        category: "Metalloid",
        color: "#8095FF",
        hover_color: "#526EFE",
    },
    ClassificationBucket {
        classification: Classification::ReactiveNonmetal,
        category: "Reactive Nonmetal",
        color: "#FF80D4",
        hover_color: "#FE52C4",
    },
    ClassificationBucket {
        classification: Classification::NobleGas,
        category: "Noble Gas",
        color: "#AA80FF",
        hover_color: "#8B52FE",
    },
    ClassificationBucket {
        classification: Classification::Unknown,
        category: "Unknown",
        color: "#FFF",
        hover_color: "#E0E0E0",
    },
];
