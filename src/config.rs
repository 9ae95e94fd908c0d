use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tailwind_merge::{Classifier, Layered, Merger, TableClassifier, TailwindClassifier};

pub const CONFIG_FILE_NAME: &str = "cn.toml";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// Built-in Tailwind CSS groups
    #[default]
    Tailwind,
    /// Only the groups defined in `[groups]`
    Table,
    /// `[groups]` first, then the Tailwind groups
    Layered,
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassifierKind::Tailwind => "tailwind",
            ClassifierKind::Table => "table",
            ClassifierKind::Layered => "layered",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CnConfig {
    #[serde(default)]
    pub merge: MergeSection,

    /// Custom conflict groups, keyed by group name
    #[serde(default)]
    pub groups: BTreeMap<String, GroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MergeSection {
    #[serde(default)]
    pub classifier: ClassifierKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Exact class names in this group
    #[serde(default)]
    pub classes: Vec<String>,

    /// Class-name prefixes that place a class in this group
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Groups whose earlier classes are removed by a later class of this group
    #[serde(default)]
    pub overrides: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The table classifier needs at least one group. Please add a [groups.<name>] section")]
    NoGroups,
    #[error("Group '{group}' has neither classes nor prefixes")]
    EmptyGroup { group: String },
    #[error("Group '{group}' overrides unknown group '{target}'")]
    UnknownOverride { group: String, target: String },
    #[error("Group '{group}' has an empty prefix, which would match every class")]
    EmptyPrefix { group: String },
    #[error("Class '{class}' is listed in both group '{first}' and group '{second}'")]
    DuplicateClass {
        class: String,
        first: String,
        second: String,
    },
    #[error("Prefix '{prefix}' is listed in both group '{first}' and group '{second}'")]
    DuplicatePrefix {
        prefix: String,
        first: String,
        second: String,
    },
}

impl CnConfig {
    /// Parse CnConfig from a TOML string and validate its groups
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: CnConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {:?}", path))
    }

    /// Path of the `cn.toml` in `dir`, if there is one.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Load `cn.toml` from `dir`, or fall back to the default config when
    /// there is none.
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.merge.classifier == ClassifierKind::Table && self.groups.is_empty() {
            return Err(ConfigError::NoGroups);
        }
        let mut class_owners: HashMap<&str, &str> = HashMap::new();
        let mut prefix_owners: HashMap<&str, &str> = HashMap::new();
        for (name, group) in &self.groups {
            if group.classes.is_empty() && group.prefixes.is_empty() {
                return Err(ConfigError::EmptyGroup {
                    group: name.clone(),
                });
            }
            if group.prefixes.iter().any(|prefix| prefix.trim().is_empty()) {
                return Err(ConfigError::EmptyPrefix {
                    group: name.clone(),
                });
            }
            for class in &group.classes {
                match class_owners.insert(class, name) {
                    Some(first) if first != name.as_str() => {
                        return Err(ConfigError::DuplicateClass {
                            class: class.clone(),
                            first: first.to_string(),
                            second: name.clone(),
                        });
                    }
                    _ => {}
                }
            }
            for prefix in &group.prefixes {
                match prefix_owners.insert(prefix, name) {
                    Some(first) if first != name.as_str() => {
                        return Err(ConfigError::DuplicatePrefix {
                            prefix: prefix.clone(),
                            first: first.to_string(),
                            second: name.clone(),
                        });
                    }
                    _ => {}
                }
            }
            if let Some(target) = group
                .overrides
                .iter()
                .find(|target| !self.groups.contains_key(*target))
            {
                return Err(ConfigError::UnknownOverride {
                    group: name.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Lookup table built from `[groups]`
    pub fn table(&self) -> TableClassifier {
        let mut table = TableClassifier::new();
        for (name, group) in &self.groups {
            for class in &group.classes {
                table.insert_class(name.as_str(), class.as_str());
            }
            for prefix in &group.prefixes {
                table.insert_prefix(name.as_str(), prefix.as_str());
            }
            for overridden in &group.overrides {
                table.insert_override(name.as_str(), overridden.as_str());
            }
        }
        table
    }

    pub fn merger(&self) -> Merger<Box<dyn Classifier>> {
        let classifier: Box<dyn Classifier> = match self.merge.classifier {
            ClassifierKind::Tailwind => Box::new(TailwindClassifier),
            ClassifierKind::Table => Box::new(self.table()),
            ClassifierKind::Layered => Box::new(Layered::new(self.table(), TailwindClassifier)),
        };
        Merger::new(classifier)
    }
}
