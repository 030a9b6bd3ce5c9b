use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI jobs to distinguish between
/// argument problems and failures during the scan itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Scan finished (possibly with skipped branches)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, API, file I/O, report write, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the dependency scan.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant carries enough context (operation, path, project) to
/// locate the failing unit from the message alone.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    #[error("GitLab request failed while trying to {operation}\nDetails: {details}\n\n💡 Hint: Check the base URL, the access token, and that the token can read the requested group or project")]
    SourceControl { operation: String, details: String },

    #[error("Failed to fetch {file_path} from project '{project}' at ref '{branch}'\nDetails: {details}\n\n💡 Hint: A failing raw-file download usually means the token lost access; re-run with --skip-fetch-errors to skip such branches instead")]
    PomFetch {
        project: String,
        branch: String,
        file_path: String,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory is writable and the disk is not full")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory exists and you have write permissions")]
    ReportWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    UnsafePath {
        path: String,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let error = FlowError::InvalidConfig {
            message: "base_url is not set".to_string(),
            hint: "Pass --base-url".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("base_url is not set"));
        assert!(display.contains("💡 Hint: Pass --base-url"));
    }

    #[test]
    fn test_source_control_display() {
        let error = FlowError::SourceControl {
            operation: "list groups".to_string(),
            details: "401 Unauthorized".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("list groups"));
        assert!(display.contains("401 Unauthorized"));
    }

    #[test]
    fn test_pom_fetch_display() {
        let error = FlowError::PomFetch {
            project: "billing".to_string(),
            branch: "main".to_string(),
            file_path: "core/pom.xml".to_string(),
            details: "404 Not Found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("core/pom.xml"));
        assert!(display.contains("'billing'"));
        assert!(display.contains("'main'"));
        assert!(display.contains("--skip-fetch-errors"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = FlowError::FileWriteError {
            path: PathBuf::from("/poms/g/p/main/pom.xml"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/poms/g/p/main/pom.xml"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_unsafe_path_display() {
        let error = FlowError::UnsafePath {
            path: "../etc/pom.xml".to_string(),
            reason: "Parent directory segments are not allowed".to_string(),
            hint: "Check the repository tree".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("../etc/pom.xml"));
        assert!(display.contains("Check the repository tree"));
    }
}
