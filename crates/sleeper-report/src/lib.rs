// sleeper-report: configuration, rendering, and output for the
// `sleeper-report` binary.

use std::fs::{File, OpenOptions};
use std::path::Path;

pub mod cli;
pub mod config;
pub mod render;
pub mod report;

pub use report::{build_report, generate, write_report, Report, ReportContext};

/// Log file name under the `logs/` directory.
pub const LOG_FILE: &str = "sleeper-report.log";

/// Open `log_dir/sleeper-report.log` for appending, creating the directory
/// and file as needed. Earlier runs stay in the file.
pub fn open_log_file(log_dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_keeps_earlier_runs() {
        let tmp = std::env::temp_dir().join("report_log_append");
        let _ = std::fs::remove_dir_all(&tmp);
        let logs = tmp.join("logs");

        writeln!(open_log_file(&logs).unwrap(), "first run").unwrap();
        writeln!(open_log_file(&logs).unwrap(), "second run").unwrap();

        let content = std::fs::read_to_string(logs.join(LOG_FILE)).unwrap();
        assert_eq!(content, "first run\nsecond run\n");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
