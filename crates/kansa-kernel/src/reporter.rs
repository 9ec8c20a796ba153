//! Line-oriented report rendering and exit-code derivation.

use std::io::{self, Write};

use kansa_types::{Status, ValidationReport};

/// Exit code when every target passed.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one target failed, or the run aborted.
pub const EXIT_FAILURE: i32 = 1;

/// Render a report to `out` and derive the process exit code.
///
/// One line per result in report order — `OK: <path>` or `FAIL: <path>`,
/// the latter followed by one two-space-indented line per message — then a
/// single summary line. The reporter never filters or reorders; it is a
/// faithful rendering of the report.
pub fn render(report: &ValidationReport, out: &mut impl Write) -> io::Result<i32> {
    for result in report.results() {
        let path = result.target().path().display();
        match result.status() {
            Status::Ok => writeln!(out, "OK: {path}")?,
            Status::Fail => {
                writeln!(out, "FAIL: {path}")?;
                for message in result.messages() {
                    writeln!(out, "  {message}")?;
                }
            }
        }
    }

    let total = report.results().len();
    if report.is_success() {
        writeln!(out, "All {total} targets passed")?;
        Ok(EXIT_SUCCESS)
    } else {
        writeln!(out, "{} of {total} targets failed", report.fail_count())?;
        Ok(EXIT_FAILURE)
    }
}
