//! Expected-vs-actual comparison and report rendering.

use std::fmt;

use crate::exec::ExecutionResult;
use crate::test_case::TestCase;

/// Per-test comparison of expected and actual verdicts, one flag per axis.
///
/// Comparison is exact string equality against the header text, so an
/// absent actual verdict (empty string) matches an empty expectation.
/// Derived per test, printed, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Id of the compared test.
    pub test_id: String,
    /// Description from the test header.
    pub description: String,
    /// Expected null-pointer verdict string.
    pub expected_np: String,
    /// Expected out-of-bounds verdict string.
    pub expected_oob: String,
    /// Observed null-pointer verdict literal, empty when absent.
    pub actual_np: String,
    /// Observed out-of-bounds verdict literal, empty when absent.
    pub actual_oob: String,
}

impl ComparisonReport {
    /// Compare a test case against its execution result.
    pub fn new(case: &TestCase, result: &ExecutionResult) -> Self {
        Self {
            test_id: case.id.clone(),
            description: case.description.clone(),
            expected_np: case.expected_np.clone(),
            expected_oob: case.expected_oob.clone(),
            actual_np: result.actual_np_str().to_string(),
            actual_oob: result.actual_oob_str().to_string(),
        }
    }

    /// Whether the null-pointer axis matched.
    pub fn np_pass(&self) -> bool {
        self.expected_np == self.actual_np
    }

    /// Whether the bounds axis matched.
    pub fn oob_pass(&self) -> bool {
        self.expected_oob == self.actual_oob
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]: {}", self.test_id, self.description)?;
        if self.np_pass() {
            writeln!(f, "\tNP correct")?;
        } else {
            writeln!(
                f,
                "\t[EE] Expected {{{}}} but got {{{}}}",
                self.expected_np, self.actual_np
            )?;
        }
        if self.oob_pass() {
            write!(f, "\tOOB correct")
        } else {
            write!(
                f,
                "\t[EE] Expected {{{}}} but got {{{}}}",
                self.expected_oob, self.actual_oob
            )
        }
    }
}

/// Aggregate outcome over a whole run, used to derive the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Tests executed (including errored ones).
    pub tests: usize,
    /// Axis comparisons that mismatched.
    pub mismatches: usize,
    /// Tests that could not produce a result (spawn failure, timeout).
    pub errors: usize,
}

impl Summary {
    /// Fold one comparison into the totals.
    pub fn record(&mut self, report: &ComparisonReport) {
        self.tests += 1;
        self.mismatches += usize::from(!report.np_pass());
        self.mismatches += usize::from(!report.oob_pass());
    }

    /// Fold one errored test (no comparison possible) into the totals.
    pub fn record_error(&mut self) {
        self.tests += 1;
        self.errors += 1;
    }

    /// Whether every axis of every test matched.
    pub fn all_passed(&self) -> bool {
        self.mismatches == 0 && self.errors == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests, {} mismatched axes, {} errors",
            self.tests, self.mismatches, self.errors
        )
    }
}
