//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{character_variety_section, length_section, SectionResult};
use crate::strength::StrengthLevel;

/// Evaluates a password and returns its strength level.
///
/// Every section runs; their points are summed and clamped to 5.
/// Total over all inputs: the empty password yields level 0.
pub fn evaluate_password(password: &SecretString) -> StrengthLevel {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut total: u8 = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("section {} awarded {} points", _section_name, points);
        total = total.saturating_add(points);
    }

    StrengthLevel::new(total)
}

/// Debounced version that sends the level via channel.
///
/// Waits `debounce` before evaluating. If `token` is cancelled meanwhile
/// (a newer keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    debounce: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthLevel>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation superseded");
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let level = evaluate_password(password);

    if let Err(_e) = tx.send(level).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength level: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::{tier_for, StrengthTier};
    use proptest::prelude::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let level = evaluate_password(&secret(""));
        assert_eq!(level.value(), 0);
        assert_eq!(tier_for(level), StrengthTier::VeryWeak);
    }

    #[test]
    fn test_evaluate_eight_lowercase() {
        let level = evaluate_password(&secret("aaaaaaaa"));
        assert_eq!(level.value(), 2);
        assert_eq!(tier_for(level), StrengthTier::Weak);
    }

    #[test]
    fn test_evaluate_all_classes_clamped() {
        // 3 length points + 4 class points, capped at 5
        let level = evaluate_password(&secret("Aa1!aaaaaaaa"));
        assert_eq!(level.value(), 5);
        assert_eq!(tier_for(level), StrengthTier::Strong);
    }

    #[test]
    fn test_evaluate_medium_password() {
        // len 10: 1 + upper, lower, digit, special
        assert_eq!(evaluate_password(&secret("MyPass123!")).value(), 5);
        // len 7: upper, lower, digit
        assert_eq!(evaluate_password(&secret("Abcdef1")).value(), 3);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let pwd = secret("Tr0ub4dor&3");
        let first = evaluate_password(&pwd);
        for _ in 0..5 {
            assert_eq!(evaluate_password(&pwd), first);
        }
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_length(base in "[a-zA-Z0-9!@#]{1,8}", extra in 0usize..24) {
            // Repeating the same string keeps the class mix fixed.
            let short = secret(&base);
            let long = secret(&base.repeat(1 + extra));
            prop_assert!(evaluate_password(&long) >= evaluate_password(&short));
        }

        #[test]
        fn prop_never_exceeds_max(pwd in ".{0,40}") {
            prop_assert!(evaluate_password(&secret(&pwd)).value() <= 5);
        }
    }
}
