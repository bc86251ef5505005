//! Training module catalog
//!
//! The catalog is a JSON document listing every training module the portal
//! offers. A default catalog is compiled into the binary; a file on disk can
//! replace it (see `watcher::find_catalog`).

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::step::Step;
use crate::error::ContentError;

/// Catalog shipped with the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../content/modules.json");

/// Identifier used in `module-<id>` page tags
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What has to happen before a lesson module awards its badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionRule {
    /// The last step's quiz answered correctly
    #[default]
    FinalQuiz,
    /// A fully filled practice incident report submitted
    PracticeReport,
}

/// Bulletin severity, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// Threat or policy bulletin shown in a checklist module
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bulletin {
    pub title: String,
    pub date: String,
    pub severity: Severity,
    pub summary: String,
    #[serde(default)]
    pub action: Option<String>,
}

/// Action every employee has to tick off in a checklist module
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAction {
    pub text: String,
    pub deadline: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModuleKind {
    Lessons {
        steps: Vec<Step>,
        #[serde(default)]
        completion: CompletionRule,
    },
    Checklist {
        #[serde(default)]
        bulletins: Vec<Bulletin>,
        actions: Vec<RequiredAction>,
    },
}

/// A self-contained training module
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    pub id: ModuleId,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub duration: String,
    #[serde(flatten)]
    pub kind: ModuleKind,
}

impl TrainingModule {
    /// Number of steps (lessons) or required actions (checklists)
    pub fn unit_count(&self) -> usize {
        match &self.kind {
            ModuleKind::Lessons { steps, .. } => steps.len(),
            ModuleKind::Checklist { actions, .. } => actions.len(),
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        let invalid = |reason: String| ContentError::Invalid {
            module: self.id.to_string(),
            reason,
        };

        if self.id.as_str().is_empty() {
            return Err(invalid("module id is empty".to_string()));
        }

        match &self.kind {
            ModuleKind::Lessons { steps, completion } => {
                if steps.is_empty() {
                    return Err(invalid("module has no steps".to_string()));
                }
                for step in steps {
                    if let Some(quiz) = &step.quiz {
                        if quiz.options.len() < 2 {
                            return Err(invalid(format!(
                                "step {} quiz needs at least two options",
                                step.ordinal
                            )));
                        }
                        if quiz.correct_option_index >= quiz.options.len() {
                            return Err(invalid(format!(
                                "step {} correct option {} is out of range",
                                step.ordinal, quiz.correct_option_index
                            )));
                        }
                    }
                }
                let last_has_quiz = steps.last().is_some_and(Step::has_quiz);
                if *completion == CompletionRule::FinalQuiz && !last_has_quiz {
                    return Err(invalid(
                        "final-quiz module must end with a quiz step".to_string(),
                    ));
                }
            }
            ModuleKind::Checklist { actions, .. } => {
                if actions.is_empty() {
                    return Err(invalid("checklist has no required actions".to_string()));
                }
            }
        }

        Ok(())
    }
}

/// Major schema version this build understands
const SCHEMA_MAJOR: &str = "1";

/// Default schema version for catalogs that omit it
fn default_schema_version() -> String {
    "1.0".to_string()
}

/// The full set of training modules
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub modules: Vec<TrainingModule>,
}

impl Catalog {
    /// Parse the compiled-in catalog
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse, number steps and validate a catalog document
    pub fn from_json(content: &str) -> Result<Self, ContentError> {
        let mut catalog: Catalog = serde_json::from_str(content)?;
        if catalog.schema_version.split('.').next() != Some(SCHEMA_MAJOR) {
            return Err(ContentError::UnsupportedSchema {
                version: catalog.schema_version,
            });
        }

        for module in &mut catalog.modules {
            if let ModuleKind::Lessons { steps, .. } = &mut module.kind {
                for (index, step) in steps.iter_mut().enumerate() {
                    step.ordinal = index + 1;
                }
            }
        }

        let mut seen = HashSet::new();
        for module in &catalog.modules {
            module.validate()?;
            if !seen.insert(module.id.clone()) {
                return Err(ContentError::Invalid {
                    module: module.id.to_string(),
                    reason: "duplicate module id".to_string(),
                });
            }
        }

        tracing::debug!(modules = catalog.modules.len(), "catalog parsed");
        Ok(catalog)
    }

    pub fn module(&self, id: &ModuleId) -> Option<&TrainingModule> {
        self.modules.iter().find(|m| &m.id == id)
    }
}
