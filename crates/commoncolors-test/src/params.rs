//! Regression test parameters and operations

use commoncolors_core::Color;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and record failures (default)
    #[default]
    Compare,
    /// Compare, and also print every checked value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "cluster")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if self.display() {
            eprintln!("  [{:02}] expected {}, actual {}", self.index, expected, actual);
        }

        // A NaN difference never satisfies the delta
        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two colors for exact equality, weight included
    pub fn compare_colors(&mut self, expected: &Color, actual: &Color) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!(
                "  [{:02}] expected {} w{}, actual {} w{}",
                self.index,
                expected,
                expected.weight(),
                actual,
                actual.weight()
            );
        }

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: color comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two strings for equality
    ///
    /// # Returns
    ///
    /// `true` if the strings are identical, `false` otherwise.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("  [{:02}] expected {:?}, actual {:?}", self.index, expected, actual);
        }

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} failed: {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        // Can't safely mutate the environment here; just check the result is valid
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_values_nan() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
    }

    #[test]
    fn test_compare_colors() {
        let mut rp = RegParams::new("test");
        let c = Color::rgb(1, 2, 3);
        assert!(rp.compare_colors(&c, &c));
        assert!(!rp.compare_colors(&c, &c.with_weight(2)));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_strings_and_check() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings("#ff00ff", "#ff00ff"));
        assert!(rp.check(true, "always true"));
        assert!(!rp.check(false, "always false"));
        assert_eq!(rp.index(), 3);
        assert!(!rp.is_success());
    }
}
