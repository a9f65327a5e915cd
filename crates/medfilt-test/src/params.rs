//! Regression test parameters and operations

use medfilt_core::Pix;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Every comparison
/// increments the index so that failures can be located in the output.
pub struct RegParams {
    /// Name of the test (e.g., "median")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "median")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
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

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two Pix images for exact equality
    ///
    /// # Returns
    ///
    /// `true` if images are identical, `false` otherwise.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        let diff = match pix1.count_pixel_diffs(pix2) {
            Ok(diff) => diff,
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.record_failure(msg);
                return false;
            }
        };

        match diff.first_diff {
            None => true,
            Some((x, y)) => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - {} pixels differ, \
                     first at ({}, {}): {} vs {}, max diff {}",
                    self.test_name,
                    self.index,
                    diff.n_diff,
                    x,
                    y,
                    pix1.get_pixel_unchecked(x, y),
                    pix2.get_pixel_unchecked(x, y),
                    diff.max_diff
                );
                self.record_failure(msg);
                false
            }
        }
    }

    /// Compare an 8 bpp image against expected row-major samples
    ///
    /// # Returns
    ///
    /// `true` if the image has exactly the expected samples.
    pub fn compare_gray_bytes(&mut self, expected: &[u8], pix: &Pix) -> bool {
        self.index += 1;

        let actual = match pix.to_gray_bytes() {
            Ok(samples) => samples,
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: sample comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.record_failure(msg);
                return false;
            }
        };

        if let Some(pos) = expected
            .iter()
            .zip(actual.iter())
            .position(|(e, a)| e != a)
            .or((expected.len() != actual.len()).then_some(expected.len().min(actual.len())))
        {
            let msg = format!(
                "Failure in {}_reg: sample comparison for index {} - first mismatch at offset {} \
                 (sizes {} vs {})",
                self.test_name,
                self.index,
                pos,
                expected.len(),
                actual.len()
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
