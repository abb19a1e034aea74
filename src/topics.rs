//! Static informational panels keyed by topic.
//!
//! Rendering a topic is a lookup: the same key always yields the same
//! fragment, byte for byte.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TopicError {
    #[error("Unknown topic key: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicKey {
    Helplines,
    ReportingPortals,
    WannaCry,
    Equifax,
    Timeline,
}

impl TopicKey {
    pub const ALL: [TopicKey; 5] = [
        TopicKey::Helplines,
        TopicKey::ReportingPortals,
        TopicKey::WannaCry,
        TopicKey::Equifax,
        TopicKey::Timeline,
    ];

    /// Stable key used by the page's "show details" controls.
    pub fn as_str(self) -> &'static str {
        match self {
            TopicKey::Helplines => "helplines",
            TopicKey::ReportingPortals => "reporting-portals",
            TopicKey::WannaCry => "wannacry",
            TopicKey::Equifax => "equifax",
            TopicKey::Timeline => "timeline",
        }
    }

    /// Placeholder container the fragment is injected into.
    pub fn container(self) -> &'static str {
        match self {
            TopicKey::Helplines => "helplineResults",
            TopicKey::ReportingPortals => "reportingResults",
            TopicKey::WannaCry => "wannacryResults",
            TopicKey::Equifax => "equifaxResults",
            TopicKey::Timeline => "timelineResults",
        }
    }

    pub fn fragment(self) -> &'static str {
        match self {
            TopicKey::Helplines => HELPLINES,
            TopicKey::ReportingPortals => REPORTING_PORTALS,
            TopicKey::WannaCry => WANNACRY,
            TopicKey::Equifax => EQUIFAX,
            TopicKey::Timeline => TIMELINE,
        }
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicKey {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TopicError::Unknown(s.to_string()))
    }
}

const HELPLINES: &str = r#"<div class="success-box">
    <h4>🚨 Emergency Cyber Crime Helplines</h4>
    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 1rem;">
        <div>
            <p><strong>National Cyber Crime Helpline:</strong></p>
            <p style="font-size: 1.2rem; color: var(--neon-cyan);">1930</p>
        </div>
        <div>
            <p><strong>Women Cyber Crime Helpline:</strong></p>
            <p style="font-size: 1.2rem; color: var(--neon-purple);">1091</p>
        </div>
        <div>
            <p><strong>Child Helpline:</strong></p>
            <p style="font-size: 1.2rem; color: var(--neon-green);">1098</p>
        </div>
        <div>
            <p><strong>Police Helpline:</strong></p>
            <p style="font-size: 1.2rem; color: var(--neon-red);">100</p>
        </div>
    </div>
    <p style="margin-top: 1rem; color: var(--text-secondary);">
        <em>Remember: These helplines are available 24/7 for immediate assistance</em>
    </p>
</div>"#;

const REPORTING_PORTALS: &str = r#"<div class="warning-box">
    <h4>🌍 International Reporting Platforms</h4>
    <div style="margin-top: 1rem;">
        <p><strong>🇮🇳 India:</strong> cybercrime.gov.in</p>
        <p><strong>🇺🇸 USA:</strong> ic3.gov (FBI Internet Crime Complaint Center)</p>
        <p><strong>🇬🇧 UK:</strong> actionfraud.police.uk</p>
        <p><strong>🇪🇺 EU:</strong> europol.europa.eu/report-a-crime</p>
        <p><strong>🌐 Global:</strong> interpol.int (Contact local police first)</p>
    </div>
    <p style="margin-top: 1rem; color: var(--text-secondary);">
        <em>Always report to your local law enforcement agency first</em>
    </p>
</div>"#;

const WANNACRY: &str = r#"<div class="warning-box">
    <h4>🔍 WannaCry Technical Analysis</h4>
    <div style="margin-top: 1rem;">
        <p><strong>Vulnerability Exploited:</strong> EternalBlue (MS17-010)</p>
        <p><strong>Attack Vector:</strong> SMB protocol vulnerability</p>
        <p><strong>Propagation:</strong> Network worm capabilities</p>
        <p><strong>Encryption:</strong> RSA-2048 + AES-128</p>
        <p><strong>Kill Switch:</strong> Hardcoded domain check</p>
        <p><strong>Impact:</strong> 300,000+ systems in 150+ countries</p>
    </div>
    <p style="margin-top: 1rem; color: var(--neon-green);">
        <strong>Prevention:</strong> Regular Windows updates and disabling SMBv1
    </p>
</div>"#;

const EQUIFAX: &str = r#"<div class="warning-box">
    <h4>🔍 Equifax Breach Technical Details</h4>
    <div style="margin-top: 1rem;">
        <p><strong>Vulnerability:</strong> Apache Struts CVE-2017-5638</p>
        <p><strong>Attack Vector:</strong> Remote code execution</p>
        <p><strong>Entry Point:</strong> Public-facing web application</p>
        <p><strong>Data Accessed:</strong> 147 million records</p>
        <p><strong>Detection Delay:</strong> 76 days to discovery</p>
        <p><strong>Stolen Data:</strong> SSNs, birth dates, addresses, driver's licenses</p>
    </div>
    <p style="margin-top: 1rem; color: var(--neon-red);">
        <strong>Critical Failure:</strong> Failure to patch known vulnerability for months
    </p>
</div>"#;

const TIMELINE: &str = r#"<div class="warning-box" style="max-height: 400px; overflow-y: auto;">
    <h4>⏰ Major Cyber Attacks Timeline (2000-2024)</h4>
    <div style="margin-top: 1rem; line-height: 2;">
        <p><strong>2000:</strong> ILOVEYOU virus - $10B damage</p>
        <p><strong>2001:</strong> Code Red worm - 359K servers infected</p>
        <p><strong>2004:</strong> MyDoom - Fastest spreading email worm</p>
        <p><strong>2008:</strong> Conficker worm - 15 million computers</p>
        <p><strong>2013:</strong> Target breach - 110M customers affected</p>
        <p><strong>2014:</strong> Sony Pictures hack - Data destruction</p>
        <p><strong>2016:</strong> Bangladesh Bank heist - $81M stolen</p>
        <p><strong>2017:</strong> WannaCry ransomware - Global epidemic</p>
        <p><strong>2017:</strong> Equifax breach - 147M records exposed</p>
        <p><strong>2018:</strong> Facebook-Cambridge Analytica - Data misuse</p>
        <p><strong>2020:</strong> SolarWinds supply chain attack</p>
        <p><strong>2021:</strong> Colonial Pipeline ransomware - Fuel shortage</p>
        <p><strong>2022:</strong> Russia-Ukraine cyber warfare</p>
        <p><strong>2023:</strong> MOVEit vulnerability - Mass exploitation</p>
        <p><strong>2024:</strong> Major ransomware evolution continues</p>
    </div>
    <p style="margin-top: 1rem; color: var(--text-secondary);">
        <em>Timeline shows the evolution and increasing sophistication of cyber attacks</em>
    </p>
</div>"#;
