//! Length section - awards one point per length threshold reached.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const LENGTH_THRESHOLDS: [usize; 3] = [8, 12, 16];

/// Awards a point for each of the 8, 12 and 16 character thresholds.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    LENGTH_THRESHOLDS.iter().filter(|&&t| len >= t).count() as u8
}
