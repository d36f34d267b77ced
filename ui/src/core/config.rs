//! Startup configuration resolved from the environment.
//!
//! | Variable                  | Meaning                               | Default                         |
//! |---------------------------|---------------------------------------|---------------------------------|
//! | `VOTESCOPE_DATASET`       | Path of the election results CSV      | `<resource dir>/<DATASET_FILE>` |
//! | `VOTESCOPE_LOG`           | Log level (`error` … `trace`)         | `info`                          |
//! | `VOTESCOPE_FACET_COLUMNS` | Initial facet column limit (1–20)     | `10`                            |

use std::path::{Path, PathBuf};

use tracing::{warn, Level};

use super::selection::{Selection, FACET_COLUMNS_DEFAULT};

pub const DATASET_ENV: &str = "VOTESCOPE_DATASET";
pub const LOG_ENV: &str = "VOTESCOPE_LOG";
pub const FACET_COLUMNS_ENV: &str = "VOTESCOPE_FACET_COLUMNS";

pub const DATASET_FILE: &str = "compiled_fed_elections_2004-2024.csv";

/// An environment value that couldn't be parsed and was replaced by its
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredSetting {
    pub var: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub log_level: Level,
    pub facet_columns: u8,
    /// Resolution runs before logging is up, so rejected values are kept
    /// here and reported by [`DashboardConfig::log_ignored`].
    pub ignored: Vec<IgnoredSetting>,
}

impl DashboardConfig {
    pub fn from_env(resource_dir: &Path) -> Self {
        Self::from_lookup(resource_dir, |key| std::env::var(key).ok())
    }

    /// Resolves every setting through `lookup`; unparsable values fall back
    /// to their defaults and are recorded in `ignored`.
    pub fn from_lookup(resource_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut ignored = Vec::new();

        let dataset_path = lookup(DATASET_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| resource_dir.join(DATASET_FILE));

        let log_level = match lookup(LOG_ENV) {
            Some(raw) => match raw.trim().parse::<Level>() {
                Ok(level) => level,
                Err(_) => {
                    ignored.push(IgnoredSetting {
                        var: LOG_ENV,
                        value: raw,
                    });
                    Level::INFO
                }
            },
            None => Level::INFO,
        };

        let facet_columns = match lookup(FACET_COLUMNS_ENV) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(columns) => {
                    let mut clamped = Selection::default();
                    clamped.set_facet_columns(columns);
                    clamped.facet_columns
                }
                Err(_) => {
                    ignored.push(IgnoredSetting {
                        var: FACET_COLUMNS_ENV,
                        value: raw,
                    });
                    FACET_COLUMNS_DEFAULT
                }
            },
            None => FACET_COLUMNS_DEFAULT,
        };

        Self {
            dataset_path,
            log_level,
            facet_columns,
            ignored,
        }
    }

    /// Emits one warning per rejected setting. Call after the logger is
    /// initialized.
    pub fn log_ignored(&self) {
        for setting in &self.ignored {
            warn!(value = %setting.value, "ignoring invalid {}", setting.var);
        }
    }

    /// The selection the dashboard opens with.
    pub fn initial_selection(&self) -> Selection {
        Selection {
            facet_columns: self.facet_columns,
            ..Selection::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(Path::new("/opt/votescope"), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = resolve(&[]);
        assert_eq!(
            config.dataset_path,
            Path::new("/opt/votescope").join(DATASET_FILE)
        );
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.facet_columns, 10);
        assert!(config.ignored.is_empty());
    }

    #[test]
    fn overrides_are_applied() {
        let config = resolve(&[
            (DATASET_ENV, "/data/results.csv"),
            (LOG_ENV, "debug"),
            (FACET_COLUMNS_ENV, "4"),
        ]);
        assert_eq!(config.dataset_path, PathBuf::from("/data/results.csv"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.initial_selection().facet_columns, 4);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = resolve(&[(LOG_ENV, "loud"), (FACET_COLUMNS_ENV, "many")]);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.facet_columns, 10);
        assert_eq!(
            config.ignored,
            vec![
                IgnoredSetting {
                    var: LOG_ENV,
                    value: "loud".to_string(),
                },
                IgnoredSetting {
                    var: FACET_COLUMNS_ENV,
                    value: "many".to_string(),
                },
            ]
        );

        let config = resolve(&[(FACET_COLUMNS_ENV, "99")]);
        assert_eq!(config.facet_columns, 20);
        assert!(config.ignored.is_empty(), "out-of-range values clamp silently");
    }
}
