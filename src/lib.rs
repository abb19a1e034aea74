//! Interactivity layer for a cyber-crime awareness website
//!
//! This library holds everything the site's pages compute: password
//! strength, the personal security checklist score, the static topic
//! panels, a simulated system check and a hidden key sequence. The page
//! itself is reached only through the [`View`] trait.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation and the timed system check
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`SiteConfig::from_env`]:
//!
//! - `CYBERAWARE_DEBOUNCE_MS` (default: 300)
//! - `CYBERAWARE_TICK_MS` (default: 200)
//! - `CYBERAWARE_SETTLE_MS` (default: 500)
//! - `CYBERAWARE_MAX_INCREMENT` (default: 15)
//!
//! # Example
//!
//! ```rust
//! use cyber_aware::{containers, MemoryView, Site, SiteConfig, TopicKey};
//! use secrecy::SecretString;
//!
//! let view = MemoryView::with_containers([containers::PASSWORD_STRENGTH, "helplineResults"]);
//! let mut site = Site::new(view, SiteConfig::default()).expect("default config is valid");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let level = site.on_password_input(&password);
//! println!("Level: {}/5", level.value());
//!
//! site.show_topic(TopicKey::Helplines);
//! ```

// Internal modules
mod checklist;
mod config;
mod evaluator;
mod konami;
mod nav;
mod render;
mod sections;
mod site;
mod strength;
mod system_check;
mod topics;
mod view;

// Public API
pub use checklist::{score, ChecklistState, ScoreTier, SecurityScore};
pub use config::{ConfigError, SiteConfig};
pub use evaluator::evaluate_password;
pub use konami::{SequenceDetector, KONAMI_SEQUENCE};
pub use nav::is_active_link;
pub use site::Site;
pub use strength::{record_for, tier_for, tip_for, StrengthLevel, StrengthTier, TierRecord, TIERS};
pub use system_check::{ProgressTicks, SimulatedStatus};
pub use topics::{TopicError, TopicKey};
pub use view::{containers, MemoryView, View, ViewError};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
