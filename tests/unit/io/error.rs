//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilemerge::GameError;
    use tilemerge::io::error::{invalid_grid, invalid_parameter};

    // Tests error source chaining works correctly
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = GameError::FileSystem {
            path: "/tmp/best.txt".into(),
            operation: "write high score",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("write high score"));
        assert!(message.contains("/tmp/best.txt"));
    }

    #[test]
    fn test_invalid_grid_error() {
        let error = invalid_grid(&"cell (0, 0) holds 3");

        assert_eq!(error.to_string(), "Invalid grid: cell (0, 0) holds 3");
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("target", &3, &"must be a power of two");
        let message = error.to_string();

        assert!(message.contains("'target'"));
        assert!(message.contains("'3'"));
        assert!(message.contains("must be a power of two"));
        assert!(matches!(
            error,
            GameError::InvalidParameter {
                parameter: "target",
                ..
            }
        ));
    }

    #[test]
    fn test_high_score_format_error() {
        let error = GameError::HighScoreFormat {
            path: "scores/best.txt".into(),
            content: "abc".to_string(),
            source: "abc".parse::<u64>().unwrap_err(),
        };
        let message = error.to_string();

        assert!(message.contains("scores/best.txt"));
        assert!(message.contains("'abc'"));
        assert!(error.source().is_some());
    }
}
