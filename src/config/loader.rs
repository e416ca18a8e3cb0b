//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading a valuation
//! policy version from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{MethodologyMetadata, MultipliersConfig, RatesConfig, ValuationPolicy};

/// Loads a valuation policy from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/ot5/
/// ├── methodology.yaml  # Version, document, effective date
/// ├── rates.yaml        # Hourly rate per professional category
/// └── multipliers.yaml  # Labor and travel factors
/// ```
///
/// # Example
///
/// ```no_run
/// use valuation_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/ot5").unwrap();
/// println!("Methodology: {}", loader.policy().metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: ValuationPolicy,
}

impl PolicyLoader {
    /// Loads and validates the policy in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - Any rate or factor is unusable (`InvalidPolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use valuation_engine::config::PolicyLoader;
    ///
    /// let loader = PolicyLoader::load("./config/ot5")?;
    /// # Ok::<(), valuation_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<MethodologyMetadata>(&path.join("methodology.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let multipliers = Self::load_yaml::<MultipliersConfig>(&path.join("multipliers.yaml"))?;

        let policy = ValuationPolicy::new(
            metadata,
            rates.hourly_rates,
            multipliers.labor,
            multipliers.travel,
        )?;

        debug!(
            path = %path.display(),
            version = %policy.metadata().version,
            "Loaded valuation policy"
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &ValuationPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> ValuationPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfessionalCategory;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ot5"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Copies the shipped policy into a scratch directory so one file can be replaced.
    fn scratch_policy_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "valuation-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        for file in ["methodology.yaml", "rates.yaml", "multipliers.yaml"] {
            fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().metadata().version, "v1.0.0");
        assert_eq!(loader.policy().metadata().document, "docs/ot5_methodology.md");
    }

    #[test]
    fn test_shipped_policy_matches_constants() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        let loaded = loader.policy();
        let standard = ValuationPolicy::standard();

        assert_eq!(loaded.hourly_rates(), standard.hourly_rates());
        assert_eq!(loaded.labor(), standard.labor());
        assert_eq!(loaded.travel(), standard.travel());
    }

    #[test]
    fn test_rates_loaded_with_scale() {
        let loader = PolicyLoader::load(config_path()).unwrap();

        let rate = loader
            .policy()
            .rate_for(ProfessionalCategory::ExecutiveSeniorLeadership);
        assert_eq!(rate, dec("149.00"));
        assert_eq!(rate.to_string(), "149.00");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("methodology.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_rates_file_returns_parse_error() {
        let dir = scratch_policy_dir("malformed");
        fs::write(dir.join("rates.yaml"), "hourly_rates:\n  senior_specialist: \"131.00\"\n")
            .unwrap();

        match PolicyLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("rates.yaml"));
                assert!(message.contains("executive_senior_leadership"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_negative_rate_returns_invalid_policy() {
        let dir = scratch_policy_dir("negative");
        fs::write(
            dir.join("rates.yaml"),
            "hourly_rates:\n  executive_senior_leadership: \"-149.00\"\n  senior_specialist: \"131.00\"\n",
        )
        .unwrap();

        match PolicyLoader::load(&dir) {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "hourly_rates.executive_senior_leadership");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }
}
