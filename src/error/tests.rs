//! Tests for error handling system

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_severity() {
        assert_eq!(
            CodemapError::PermissionDenied {
                path: PathBuf::from("test"),
            }
            .severity(),
            ErrorSeverity::Warning
        );

        assert_eq!(
            CodemapError::Io {
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }
            .severity(),
            ErrorSeverity::Error
        );

        assert_eq!(
            CodemapError::DirectoryNotFound {
                path: PathBuf::from("missing"),
            }
            .severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let not_found = CodemapError::DirectoryNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        let not_dir = CodemapError::NotADirectory {
            path: PathBuf::from("file.py"),
        };

        assert_eq!(not_found.exit_code(), 1);
        assert_eq!(not_dir.exit_code(), 1);
        assert_eq!(CodemapError::Interrupted.exit_code(), 130);
        assert_eq!(CodemapError::config_error("bad").exit_code(), 2);
    }

    #[test]
    fn test_not_found_message() {
        let err = CodemapError::DirectoryNotFound {
            path: PathBuf::from("/nonexistent/path/xyz"),
        };
        let message = err.user_message();
        assert!(message.to_lowercase().contains("not found"));
        assert!(message.contains("/nonexistent/path/xyz"));
    }

    #[test]
    fn test_read_error_maps_permission_denied() {
        let err = CodemapError::read_error(
            "secret.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CodemapError::PermissionDenied { .. }));

        let err = CodemapError::read_error(
            "gone.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, CodemapError::FileRead { .. }));
    }

    #[test]
    fn test_from_io_error() {
        let err: CodemapError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, CodemapError::Io { .. }));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_from_glob_error() {
        let err: CodemapError = glob::Pattern::new("[").unwrap_err().into();
        assert!(matches!(err, CodemapError::GlobPattern { .. }));
    }
}
