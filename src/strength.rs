//! Strength levels and the tier table used to present them.

/// Highest level a password can reach.
pub const MAX_LEVEL: u8 = 5;

/// Number of satisfied password predicates, clamped to [`MAX_LEVEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthLevel(u8);

impl StrengthLevel {
    /// Builds a level, clamping anything above [`MAX_LEVEL`].
    pub fn new(raw: u8) -> Self {
        Self(raw.min(MAX_LEVEL))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into [`TIERS`]. Levels 0 and 1 share index 0.
    fn tier_index(self) -> usize {
        (self.0 as usize).saturating_sub(1).min(TIERS.len() - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

/// One row of the presentation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRecord {
    pub tier: StrengthTier,
    pub label: &'static str,
    pub color: &'static str,
    pub width_percent: u8,
    pub advisory: &'static str,
}

pub const TIERS: [TierRecord; 5] = [
    TierRecord {
        tier: StrengthTier::VeryWeak,
        label: "Very Weak",
        color: "#ff4444",
        width_percent: 20,
        advisory: "Use at least 8 characters with mixed case letters",
    },
    TierRecord {
        tier: StrengthTier::Weak,
        label: "Weak",
        color: "#ff8844",
        width_percent: 40,
        advisory: "Add numbers and special characters for better security",
    },
    TierRecord {
        tier: StrengthTier::Fair,
        label: "Fair",
        color: "#ffaa44",
        width_percent: 60,
        advisory: "Consider using a passphrase or password manager",
    },
    TierRecord {
        tier: StrengthTier::Good,
        label: "Good",
        color: "#88ff44",
        width_percent: 80,
        advisory: "Great! Your password is getting strong",
    },
    TierRecord {
        tier: StrengthTier::Strong,
        label: "Strong",
        color: "#44ff44",
        width_percent: 100,
        advisory: "Excellent! Your password meets all security criteria",
    },
];

/// Full presentation record for a level.
pub fn record_for(level: StrengthLevel) -> &'static TierRecord {
    &TIERS[level.tier_index()]
}

pub fn tier_for(level: StrengthLevel) -> StrengthTier {
    record_for(level).tier
}

pub fn tip_for(level: StrengthLevel) -> &'static str {
    record_for(level).advisory
}
