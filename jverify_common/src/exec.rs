//! Execution engine: runs the analyzer against one test and extracts its
//! verdicts from stdout.
//!
//! The analyzer's only observable contract is stdout lines of the form
//! `<testId> <TOKEN>`. Its exit status is deliberately not inspected: a
//! crashing analyzer just produces no matching lines, which the report
//! surfaces as empty actual verdicts.

use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::command::{RunCommand, analyzer_command};
use crate::config::ToolchainConfig;
use crate::error::HarnessError;
use crate::test_case::TestCase;
use crate::verdict::{Axis, VerdictToken};

/// Poll interval while waiting on a bounded child process.
const WAIT_POLL: Duration = Duration::from_millis(25);

/// The verdicts actually observed for one test. `None` on an axis means no
/// matching output line carried a token for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Id of the test this result belongs to.
    pub test_id: String,
    /// Last null-pointer-axis token seen, if any.
    pub actual_np: Option<VerdictToken>,
    /// Last bounds-axis token seen, if any.
    pub actual_oob: Option<VerdictToken>,
}

impl ExecutionResult {
    /// An empty result for `test_id`, before any output has been scanned.
    pub fn empty(test_id: impl Into<String>) -> Self {
        Self {
            test_id: test_id.into(),
            actual_np: None,
            actual_oob: None,
        }
    }

    /// Record a token on its axis, overwriting any earlier value. Later
    /// output lines win.
    pub fn record(&mut self, token: VerdictToken) {
        match token.axis() {
            Axis::NullPointer => self.actual_np = Some(token),
            Axis::OutOfBounds => self.actual_oob = Some(token),
        }
    }

    /// The null-pointer verdict as the literal string, empty when absent.
    pub fn actual_np_str(&self) -> &'static str {
        self.actual_np.map_or("", VerdictToken::as_str)
    }

    /// The bounds verdict as the literal string, empty when absent.
    pub fn actual_oob_str(&self) -> &'static str {
        self.actual_oob.map_or("", VerdictToken::as_str)
    }
}

/// Run the analyzer for one test case and scan its stdout for verdicts.
///
/// With `timeout` set, the child is killed once the bound expires and
/// [`HarnessError::Timeout`] is returned; otherwise the wait is unbounded,
/// as the original harness behaved.
///
/// # Errors
/// [`HarnessError::Spawn`] if the runtime cannot be started and
/// [`HarnessError::Timeout`] on an expired bound. A non-zero analyzer exit
/// is not an error.
pub fn execute_test(
    root: &Path,
    config: &ToolchainConfig,
    case: &TestCase,
    timeout: Option<Duration>,
) -> Result<ExecutionResult, HarnessError> {
    let cmd = analyzer_command(root, config, &case.id);
    tracing::debug!(id = %case.id, command = %cmd.display(), "running analyzer");

    let stdout = match timeout {
        None => run_unbounded(root, &cmd)?,
        Some(bound) => run_bounded(root, &cmd, bound, &case.id)?,
    };
    Ok(scan_output(&case.id, &stdout))
}

/// Scan captured stdout for this test's verdict lines.
///
/// A line participates iff it starts with the id followed by a single
/// space; the remainder is classified against the four verdict literals.
/// Unrecognized remainders and foreign lines are dropped, and the last
/// occurrence per axis wins.
pub fn scan_output(test_id: &str, output: &str) -> ExecutionResult {
    let mut result = ExecutionResult::empty(test_id);
    let prefix = format!("{test_id} ");
    for line in output.lines() {
        if let Some(rest) = line.strip_prefix(prefix.as_str()) {
            if let Some(token) = VerdictToken::parse(rest) {
                result.record(token);
            }
        }
    }
    result
}

/// Block until the child exits and hand back its decoded stdout.
fn run_unbounded(root: &Path, cmd: &RunCommand) -> Result<String, HarnessError> {
    let output = cmd
        .to_command()
        .current_dir(root)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::null())
        .output()
        .map_err(|e| HarnessError::spawn(cmd.display(), e))?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Wait on the child with a deadline, draining stdout on a reader thread so
/// a chatty analyzer cannot block on a full pipe. On expiry the child is
/// killed and reaped before the error is returned.
fn run_bounded(
    root: &Path,
    cmd: &RunCommand,
    bound: Duration,
    test_id: &str,
) -> Result<String, HarnessError> {
    let mut child = cmd
        .to_command()
        .current_dir(root)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map_err(|e| HarnessError::spawn(cmd.display(), e))?;

    let reader = child.stdout.take().map(|mut stdout| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            buf
        })
    });

    let deadline = Instant::now() + bound;
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => break,
            Ok(None) if Instant::now() >= deadline => {
                tracing::error!(id = %test_id, secs = bound.as_secs(), "analyzer timed out, killing");
                let _ = child.kill();
                let _ = child.wait();
                return Err(HarnessError::Timeout {
                    test_id: test_id.to_string(),
                    secs: bound.as_secs(),
                });
            }
            Ok(None) => std::thread::sleep(WAIT_POLL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(HarnessError::spawn(cmd.display(), e));
            }
        }
    }

    let bytes = reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
