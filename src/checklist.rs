//! Personal security checklist and the score derived from it.

/// Percentage of checklist items acknowledged, in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SecurityScore(u8);

impl SecurityScore {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> ScoreTier {
        ScoreTier::for_score(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Good,
    Warning,
    Critical,
}

impl ScoreTier {
    /// Lower bounds are inclusive: 80 is good, 60 is warning.
    pub fn for_score(score: SecurityScore) -> Self {
        match score.value() {
            80.. => ScoreTier::Good,
            60..=79 => ScoreTier::Warning,
            _ => ScoreTier::Critical,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::Good => "#44ff44",
            ScoreTier::Warning => "#ffaa44",
            ScoreTier::Critical => "#ff4444",
        }
    }
}

/// Computes `round(checked / total * 100)`, rounding halves up.
///
/// An empty checklist scores 0. `checked` above `total` is clamped.
pub fn score(checked: usize, total: usize) -> SecurityScore {
    if total == 0 {
        return SecurityScore(0);
    }
    let checked = checked.min(total) as u128;
    let total = total as u128;
    let pct = (checked * 100 + total / 2) / total;
    SecurityScore(pct as u8)
}

/// Checklist flags in the order the page lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    items: Vec<(String, bool)>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, or updates it if the id is already present.
    pub fn set(&mut self, id: impl Into<String>, checked: bool) {
        let id = id.into();
        match self.items.iter_mut().find(|(item, _)| *item == id) {
            Some(entry) => entry.1 = checked,
            None => self.items.push((id, checked)),
        }
    }

    pub fn with(mut self, id: impl Into<String>, checked: bool) -> Self {
        self.set(id, checked);
        self
    }

    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.items.iter().find(|(item, _)| item == id).map(|(_, c)| *c)
    }

    pub fn checked(&self) -> usize {
        self.items.iter().filter(|(_, c)| *c).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn score(&self) -> SecurityScore {
        score(self.checked(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_empty_checklist() {
        assert_eq!(score(0, 0).value(), 0);
        assert_eq!(score(3, 0).value(), 0);
    }

    #[test]
    fn test_score_basic() {
        assert_eq!(score(4, 5).value(), 80);
        assert_eq!(score(4, 5).tier(), ScoreTier::Good);
        assert_eq!(score(3, 5).value(), 60);
        assert_eq!(score(3, 5).tier(), ScoreTier::Warning);
        assert_eq!(score(5, 5).value(), 100);
        assert_eq!(score(0, 5).value(), 0);
    }

    #[test]
    fn test_score_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(score(1, 8).value(), 13);
        // 1/3 = 33.33%, 2/3 = 66.67%
        assert_eq!(score(1, 3).value(), 33);
        assert_eq!(score(2, 3).value(), 67);
    }

    #[test]
    fn test_score_clamps_overcount() {
        assert_eq!(score(9, 4).value(), 100);
    }

    #[test]
    fn test_score_huge_counts() {
        let n = usize::MAX / 10;
        assert_eq!(score(n, n).value(), 100);
        assert_eq!(score(n / 2, n).value(), 50);
        assert_eq!(score(usize::MAX, usize::MAX).value(), 100);
    }

    #[test]
    fn test_tier_boundaries() {
        let tier = |v: u8| ScoreTier::for_score(SecurityScore(v));
        assert_eq!(tier(0), ScoreTier::Critical);
        assert_eq!(tier(59), ScoreTier::Critical);
        assert_eq!(tier(60), ScoreTier::Warning);
        assert_eq!(tier(79), ScoreTier::Warning);
        assert_eq!(tier(80), ScoreTier::Good);
        assert_eq!(tier(100), ScoreTier::Good);
    }

    #[test]
    fn test_score_is_idempotent() {
        let first = score(7, 9);
        for _ in 0..5 {
            assert_eq!(score(7, 9), first);
        }
    }

    #[test]
    fn test_checklist_state_counts() {
        let mut state = ChecklistState::new()
            .with("strong-passwords", true)
            .with("two-factor", false)
            .with("updates", true)
            .with("backups", false)
            .with("phishing", true);
        assert_eq!(state.checked(), 3);
        assert_eq!(state.total(), 5);
        assert_eq!(state.score().value(), 60);

        state.set("two-factor", true);
        assert_eq!(state.total(), 5);
        assert_eq!(state.is_checked("two-factor"), Some(true));
        assert_eq!(state.score().value(), 80);
        assert_eq!(state.is_checked("missing"), None);
    }
}
