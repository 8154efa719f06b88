//! Scripted interaction replay.
//!
//! A script is a JSON list of steps applied to a session in order:
//!
//! ```json
//! { "steps": [
//!     { "action": "click", "target": ".nav-links a[href=\"#skills\"]" },
//!     { "action": "input", "target": "#contact-name", "value": "Ada" },
//!     { "action": "submit", "target": "#contact-form" },
//!     { "action": "key", "key": "Escape" },
//!     { "action": "advance", "ms": 1600 }
//! ] }
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::NodeId;
use crate::error::{FolioError, FolioResult};
use crate::host::Host;
use crate::selector::Selector;
use crate::session::{DispatchOutcome, UiSession};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Click { target: String },
    Submit { target: String },
    Input { target: String, value: String },
    Key { key: String },
    Advance { ms: u64 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Click { target } => write!(f, "click {}", target),
            Step::Submit { target } => write!(f, "submit {}", target),
            Step::Input { target, value } => write!(f, "input {} {:?}", target, value),
            Step::Key { key } => write!(f, "key {}", key),
            Step::Advance { ms } => write!(f, "advance {} ms", ms),
        }
    }
}

/// Result of one applied step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub default_prevented: bool,
    pub handlers_run: usize,
}

impl StepOutcome {
    fn new(step: &Step, outcome: DispatchOutcome) -> Self {
        Self {
            step: step.to_string(),
            default_prevented: outcome.default_prevented,
            handlers_run: outcome.handlers_run,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Apply every step in order. Stops at the first step whose target
    /// selector is malformed or matches nothing.
    pub fn run<H: Host>(&self, session: &mut UiSession<H>) -> FolioResult<Vec<StepOutcome>> {
        let mut outcomes = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            debug!(%step, "Replaying step");
            let outcome = match step {
                Step::Click { target } => {
                    let node = resolve(session, target)?;
                    session.click(node)
                }
                Step::Submit { target } => {
                    let node = resolve(session, target)?;
                    session.submit(node)
                }
                Step::Input { target, value } => {
                    let node = resolve(session, target)?;
                    session.set_value(node, value);
                    DispatchOutcome::default()
                }
                Step::Key { key } => session.key_down(key),
                Step::Advance { ms } => {
                    session.advance(Duration::from_millis(*ms));
                    DispatchOutcome::default()
                }
            };
            outcomes.push(StepOutcome::new(step, outcome));
        }
        Ok(outcomes)
    }
}

fn resolve<H: Host>(session: &UiSession<H>, target: &str) -> FolioResult<NodeId> {
    let selector = Selector::parse(target)?;
    session
        .find(&selector)
        .ok_or_else(|| FolioError::TargetNotFound(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::host::RecordingHost;
    use crate::page::{build_document, PageSpec};

    fn session() -> UiSession<RecordingHost> {
        UiSession::start(
            build_document(&PageSpec::default()),
            FolioConfig::default(),
            RecordingHost::with_year(2026),
        )
    }

    #[test]
    fn test_parse_all_step_kinds() {
        let script = Script::from_json(
            r##"{ "steps": [
                { "action": "click", "target": "a[href=\"#skills\"]" },
                { "action": "submit", "target": "#contact-form" },
                { "action": "input", "target": "#contact-name", "value": "Ada" },
                { "action": "key", "key": "Escape" },
                { "action": "advance", "ms": 10 }
            ] }"##,
        )
        .unwrap();
        assert_eq!(script.steps.len(), 5);
        assert_eq!(script.steps[4], Step::Advance { ms: 10 });
        assert_eq!(script.steps[0].to_string(), "click a[href=\"#skills\"]");
    }

    #[test]
    fn test_run_reports_each_step() {
        let mut s = session();
        let script = Script {
            steps: vec![
                Step::Click {
                    target: ".nav-links a[href=\"#skills\"]".to_string(),
                },
                Step::Advance { ms: 5 },
            ],
        };
        let outcomes = script.run(&mut s).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].default_prevented);
        assert_eq!(outcomes[0].handlers_run, 1);
        assert_eq!(s.snapshot().visible_sections(), ["skills"]);
        assert_eq!(s.snapshot().now_ms, 5);
    }

    #[test]
    fn test_missing_target_stops_run() {
        let mut s = session();
        let script = Script {
            steps: vec![
                Step::Click {
                    target: "#nowhere".to_string(),
                },
                Step::Advance { ms: 5 },
            ],
        };
        let err = script.run(&mut s).unwrap_err();
        assert!(matches!(err, FolioError::TargetNotFound(ref t) if t == "#nowhere"));
        assert_eq!(s.now(), Duration::ZERO);
    }

    #[test]
    fn test_bad_selector_is_reported() {
        let mut s = session();
        let script = Script {
            steps: vec![Step::Submit {
                target: "form[".to_string(),
            }],
        };
        assert!(matches!(
            script.run(&mut s),
            Err(FolioError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = Script::from_json(r#"{ "steps": [ { "action": "hover" } ] }"#).unwrap_err();
        assert!(matches!(err, FolioError::Parse(_)));
    }
}
