//! Site controller: routes page events to the core and renders the result.
//!
//! A missing container is never an error for the caller. The render is
//! skipped and the handler returns normally.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checklist::{ChecklistState, SecurityScore};
use crate::config::{ConfigError, SiteConfig};
use crate::evaluator::evaluate_password;
use crate::konami::SequenceDetector;
use crate::render;
use crate::strength::StrengthLevel;
use crate::topics::TopicKey;
use crate::view::{containers, View};

#[cfg(feature = "async")]
use crate::system_check::{ProgressTicks, SimulatedStatus};

pub struct Site<V: View> {
    view: V,
    config: SiteConfig,
    detector: SequenceDetector,
}

impl<V: View> Site<V> {
    /// # Errors
    ///
    /// Returns error if `config` fails `SiteConfig::validate`.
    pub fn new(view: V, config: SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            view,
            config,
            detector: SequenceDetector::default(),
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Renders into `container`, skipping silently if it is absent.
    fn show(&mut self, container: &str, content: &str) -> bool {
        match self.view.render(container, content) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("render skipped: {}", _e);
                false
            }
        }
    }

    /// Password field changed.
    pub fn on_password_input(&mut self, password: &SecretString) -> StrengthLevel {
        let level = evaluate_password(password);
        self.show_strength(level);
        level
    }

    /// Renders a level computed elsewhere, e.g. by `evaluate_password_tx`.
    pub fn show_strength(&mut self, level: StrengthLevel) {
        let html = render::password_strength(level);
        self.show(containers::PASSWORD_STRENGTH, &html);
    }

    /// A checklist flag toggled.
    pub fn on_checklist_change(&mut self, state: &ChecklistState) -> SecurityScore {
        let score = state.score();
        let html = render::security_score(score);
        self.show(containers::SECURITY_SCORE, &html);
        score
    }

    /// A "show details" control was activated.
    pub fn show_topic(&mut self, key: TopicKey) -> bool {
        self.show(key.container(), key.fragment())
    }

    /// A key went down. Returns `true` if it completed the easter egg.
    pub fn on_keydown(&mut self, key_code: u32) -> bool {
        if !self.detector.push(key_code) {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::info!("easter egg activated");

        let html = render::easter_egg();
        self.show(containers::EASTER_EGG, &html);
        true
    }

    /// Plays the simulated system check.
    ///
    /// Renders the progress frame, advances it every `tick_interval`,
    /// waits `settle_delay`, then renders a random report. Returns `None`
    /// if cancelled or if the page has no results container.
    #[cfg(feature = "async")]
    pub async fn run_system_check<R>(
        &mut self,
        rng: &mut R,
        token: CancellationToken,
    ) -> Option<SimulatedStatus>
    where
        R: rand::Rng + ?Sized,
    {
        if !self.show(containers::SYSTEM_RESULTS, &render::system_check_progress(0.0)) {
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::info!("simulated system check started");

        let mut interval = tokio::time::interval(self.config.tick_interval);
        // first tick completes immediately
        interval.tick().await;

        let max_increment = self.config.max_increment;
        // validated in `Site::new`
        let widths: Vec<f64> = ProgressTicks::new(&mut *rng, max_increment).ok()?.collect();
        for width in widths {
            tokio::select! {
                biased;
                _ = token.cancelled() => return None,
                _ = interval.tick() => {}
            }
            self.show(containers::SYSTEM_RESULTS, &render::system_check_progress(width));
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => return None,
            _ = tokio::time::sleep(self.config.settle_delay) => {}
        }

        let status = SimulatedStatus::pick(rng);
        self.show(containers::SYSTEM_RESULTS, &render::system_check_report(status));

        #[cfg(feature = "tracing")]
        tracing::info!("simulated system check finished: {}", status.label());

        Some(status)
    }
}
