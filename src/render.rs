//! HTML fragments written into the page containers.

use crate::checklist::SecurityScore;
use crate::strength::{record_for, StrengthLevel, MAX_LEVEL};
use crate::system_check::SimulatedStatus;

/// Labeled strength bar with the advisory below it.
pub fn password_strength(level: StrengthLevel) -> String {
    let record = record_for(level);
    format!(
        r#"<div style="background: #1a1a2e; padding: 1rem; border-radius: 8px; margin-top: 1rem;">
    <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem;">
        <span style="color: {color}; font-weight: bold;">Password Strength: {label}</span>
        <span style="color: var(--text-secondary); font-size: 0.9rem;">{value}/{max}</span>
    </div>
    <div style="background: #16213e; height: 8px; border-radius: 4px; overflow: hidden;">
        <div style="background: {color}; width: {width}%; height: 100%; transition: width 0.3s ease;"></div>
    </div>
    <div style="margin-top: 0.5rem; font-size: 0.9rem; color: var(--text-secondary);">
        {advisory}
    </div>
</div>"#,
        color = record.color,
        label = record.label,
        value = level.value(),
        max = MAX_LEVEL,
        width = record.width_percent,
        advisory = record.advisory,
    )
}

pub fn security_score(score: SecurityScore) -> String {
    format!(
        r#"<div class="stat-box">
    <div class="stat-number" style="color: {color};">{value}%</div>
    <div class="stat-label">Security Score</div>
</div>"#,
        color = score.tier().color(),
        value = score.value(),
    )
}

/// Progress frame of the simulated check; `width` is in percent.
pub fn system_check_progress(width: f64) -> String {
    format!(
        r#"<div style="text-align: center; padding: 2rem;">
    <div style="font-size: 2rem; margin-bottom: 1rem;">🔍</div>
    <p style="color: var(--neon-cyan); margin-bottom: 1rem;">Performing simulated security assessment...</p>
    <div style="width: 100%; height: 4px; background: #16213e; border-radius: 2px; overflow: hidden;">
        <div style="width: {width:.1}%; height: 100%; background: var(--neon-cyan); transition: width 0.1s ease;"></div>
    </div>
</div>"#,
        width = width.clamp(0.0, 100.0),
    )
}

pub fn system_check_report(status: SimulatedStatus) -> String {
    let findings: String = status
        .findings()
        .iter()
        .map(|(item, state)| format!("\n        <p><strong>{}:</strong> {}</p>", item, state))
        .collect();
    format!(
        r#"<div class="warning-box">
    <h4>{icon} System Security Status: {label}</h4>
    <p style="color: var(--text-secondary);"><em>Demo only: this result is simulated and does not inspect your device.</em></p>
    <div style="margin-top: 1rem;">{findings}
    </div>
    <p style="margin-top: 1rem; color: {color};">
        <strong>Recommendation:</strong> {recommendation}
    </p>
</div>"#,
        icon = status.icon(),
        label = status.label(),
        findings = findings,
        color = status.color(),
        recommendation = status.recommendation(),
    )
}

pub fn easter_egg() -> String {
    r#"<div style="position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); background: rgba(0,0,0,0.9); padding: 2rem; border-radius: 15px; border: 2px solid var(--neon-cyan); z-index: 1000; text-align: center;">
    <h2 style="color: var(--neon-cyan); margin-bottom: 1rem;">🎮 EASTER EGG ACTIVATED! 🎮</h2>
    <p style="color: var(--text-primary); margin-bottom: 1rem;">
        You've discovered the Konami Code! You're clearly a cybersecurity enthusiast!
    </p>
    <p style="color: var(--neon-purple); font-size: 0.9rem;">
        Remember: With great power comes great responsibility. Use your knowledge wisely!
    </p>
</div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::score;

    #[test]
    fn test_password_strength_shows_level_and_tier() {
        let html = password_strength(StrengthLevel::new(2));
        assert!(html.contains("Password Strength: Weak"));
        assert!(html.contains("2/5"));
        assert!(html.contains("width: 40%"));
        assert!(html.contains("Add numbers and special characters"));
    }

    #[test]
    fn test_password_strength_level_zero() {
        let html = password_strength(StrengthLevel::new(0));
        assert!(html.contains("Very Weak"));
        assert!(html.contains("0/5"));
    }

    #[test]
    fn test_security_score_color() {
        assert!(security_score(score(4, 5)).contains("color: #44ff44;\">80%"));
        assert!(security_score(score(3, 5)).contains("color: #ffaa44;\">60%"));
        assert!(security_score(score(0, 0)).contains("color: #ff4444;\">0%"));
    }

    #[test]
    fn test_progress_width_is_capped() {
        assert!(system_check_progress(130.0).contains("width: 100.0%"));
        assert!(system_check_progress(12.34).contains("width: 12.3%"));
    }

    #[test]
    fn test_report_is_labeled_simulated() {
        for status in SimulatedStatus::ALL {
            let html = system_check_report(status);
            assert!(html.contains("simulated"));
            assert!(html.contains(status.recommendation()));
        }
    }
}
