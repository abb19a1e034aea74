//! Simulated system check.
//!
//! This is a cosmetic demo: nothing on the host is inspected. The progress
//! bar advances by random increments and the final status is picked at
//! random.

use rand::Rng;

use crate::config::{check_increment, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulatedStatus {
    Secure,
    Warning,
    Critical,
}

impl SimulatedStatus {
    pub const ALL: [SimulatedStatus; 3] = [
        SimulatedStatus::Secure,
        SimulatedStatus::Warning,
        SimulatedStatus::Critical,
    ];

    /// Uniform pick among all statuses.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            SimulatedStatus::Secure => "Secure",
            SimulatedStatus::Warning => "Warning",
            SimulatedStatus::Critical => "Critical",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SimulatedStatus::Secure => "#44ff44",
            SimulatedStatus::Warning => "#ffaa44",
            SimulatedStatus::Critical => "#ff4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SimulatedStatus::Secure => "✅",
            SimulatedStatus::Warning => "⚠️",
            SimulatedStatus::Critical => "🚨",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            SimulatedStatus::Secure => {
                "Your system appears secure. Continue regular maintenance and stay vigilant."
            }
            SimulatedStatus::Warning => {
                "Some security measures need attention. Update your software and run a full antivirus scan."
            }
            SimulatedStatus::Critical => {
                "Immediate action required! Update all software, run antivirus scan, and check firewall settings."
            }
        }
    }

    /// Report lines as (item, state). Only `Secure` reports healthy states.
    pub fn findings(self) -> [(&'static str, &'static str); 4] {
        let ok = self == SimulatedStatus::Secure;
        [
            ("Firewall", if ok { "Active" } else { "Needs Update" }),
            ("Antivirus", if ok { "Up to Date" } else { "Outdated" }),
            ("System Updates", if ok { "Current" } else { "Available" }),
            ("Network Security", if ok { "Protected" } else { "Vulnerable" }),
        ]
    }
}

/// Progress bar ticks.
///
/// Each tick adds a random amount in `[0, max_increment)` and yields the
/// displayed width, capped at 100. The iterator ends after yielding 100.
pub struct ProgressTicks<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    max_increment: f64,
    progress: f64,
    done: bool,
}

impl<'a, R: Rng + ?Sized> ProgressTicks<'a, R> {
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroIncrement` unless `max_increment` is
    /// positive and finite.
    pub fn new(rng: &'a mut R, max_increment: f64) -> Result<Self, ConfigError> {
        check_increment(max_increment)?;
        Ok(Self {
            rng,
            max_increment,
            progress: 0.0,
            done: false,
        })
    }
}

impl<R: Rng + ?Sized> Iterator for ProgressTicks<'_, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        self.progress += self.rng.gen_range(0.0..self.max_increment);
        if self.progress >= 100.0 {
            self.done = true;
        }
        Some(self.progress.min(100.0))
    }
}
