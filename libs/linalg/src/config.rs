//! Numeric configuration.

use crate::{matrix::DISPLAY_DECIMALS, matrix::Matrix, tolerance::Tolerance};

/// Settings shared by callers of the library.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct NumericConfig {
    /// Tolerance used for zero and equality tests during elimination.
    pub tolerance: Tolerance,

    /// Decimals shown when rendering matrices.
    pub display_decimals: usize,
}

impl NumericConfig {
    /// Renders a matrix with the configured number of decimals.
    pub fn render(&self, matrix: &Matrix) -> String {
        matrix.render(self.display_decimals)
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self { tolerance: Tolerance::default(), display_decimals: DISPLAY_DECIMALS }
    }
}

#[cfg(feature = "config")]
impl NumericConfig {
    /// Load the configuration from a YAML file.
    ///
    /// Any property can be overridden with an environment variable prefixed by `LINALG__`, for example
    /// `LINALG__DISPLAY_DECIMALS=6`. Properties missing from both take their default value.
    pub fn load(path: std::path::PathBuf) -> Result<Self, config::ConfigError> {
        let source = config::File::from(path).format(config::FileFormat::Yaml);
        let config = config::Config::builder()
            .add_source(source)
            .add_source(config::Environment::with_prefix("LINALG").prefix_separator("__").separator("__"))
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tolerance::DEFAULT_TOLERANCE;

    #[test]
    fn defaults() {
        let config = NumericConfig::default();
        assert_eq!(config.tolerance.epsilon(), DEFAULT_TOLERANCE);
        assert_eq!(config.display_decimals, 4);
    }

    #[test]
    fn render() {
        let config = NumericConfig { display_decimals: 2, ..Default::default() };
        let m = Matrix::new(vec![1.0, -0.5], 1, 2).unwrap();
        assert_eq!(config.render(&m), "[  1.00 -0.50 ]");
    }

    // loaders read the process environment, hold this while touching `LINALG__` variables
    #[cfg(feature = "config")]
    static ENVIRONMENT: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[cfg(feature = "config")]
    #[test]
    fn load() {
        use std::io::Write;

        let _guard = ENVIRONMENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "tolerance: 0.001\ndisplay_decimals: 2").unwrap();
        let config = NumericConfig::load(file.path().to_path_buf()).unwrap();
        assert_eq!(config, NumericConfig { tolerance: Tolerance::new(0.001), display_decimals: 2 });
    }

    #[cfg(feature = "config")]
    #[test]
    fn load_partial() {
        use std::io::Write;

        let _guard = ENVIRONMENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "tolerance: 0.5").unwrap();
        let config = NumericConfig::load(file.path().to_path_buf()).unwrap();
        assert_eq!(config.tolerance, Tolerance::new(0.5));
        assert_eq!(config.display_decimals, DISPLAY_DECIMALS);
    }

    #[cfg(feature = "config")]
    #[test]
    fn environment_overrides_file() {
        use std::io::Write;

        let _guard = ENVIRONMENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "tolerance: 0.001\ndisplay_decimals: 2").unwrap();

        std::env::set_var("LINALG__DISPLAY_DECIMALS", "6");
        std::env::set_var("LINALG__TOLERANCE", "0.5");
        let config = NumericConfig::load(file.path().to_path_buf());
        std::env::remove_var("LINALG__DISPLAY_DECIMALS");
        std::env::remove_var("LINALG__TOLERANCE");

        assert_eq!(config.unwrap(), NumericConfig { tolerance: Tolerance::new(0.5), display_decimals: 6 });
    }
}
