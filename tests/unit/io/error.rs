//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use algoviz::AlgoVizError;
    use algoviz::io::error::{ValidationError, invalid_input, invalid_parameter};
    use std::error::Error;

    // Tests validation messages are phrased for end users
    // Verified by printing the debug representation
    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter at least one number"
        );
        assert_eq!(
            ValidationError::NonNumeric {
                token: "x7".to_string()
            }
            .to_string(),
            "'x7' is not a whole number"
        );
        assert_eq!(
            ValidationError::OutOfRange {
                value: -4,
                min: 0,
                max: 999
            }
            .to_string(),
            "-4 is out of range (allowed 0 to 999)"
        );
        assert_eq!(
            ValidationError::TooManyElements {
                count: 120,
                max: 100
            }
            .to_string(),
            "Too many values: 120 given, at most 100 allowed"
        );
        assert_eq!(
            ValidationError::MissingTarget.to_string(),
            "Please enter a value to search for"
        );
    }

    // Tests validation errors chain as the source of the wrapping error
    // Verified by returning None from source for validation errors
    #[test]
    fn test_validation_source_chain() {
        let error = AlgoVizError::from(ValidationError::Empty);
        assert!(error.to_string().contains("Please enter at least one number"));
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("Please enter at least one number".to_string())
        );
    }

    // Tests file system errors keep the io source
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgoVizError::FileSystem {
            path: "/tmp/run.gif".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("/tmp/run.gif"));
    }

    // Tests rejected controls name the control and the state
    // Verified by omitting the state from the message
    #[test]
    fn test_control_rejected_message() {
        let error = AlgoVizError::ControlRejected {
            control: "start",
            state: "running",
        };
        assert_eq!(error.to_string(), "'start' is not available while running");
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("speed", &0, &"must be between 1 and 100");
        let message = error.to_string();
        assert!(message.contains("speed"));
        assert!(message.contains('0'));
        assert!(message.contains("must be between 1 and 100"));
    }

    // Tests invalid input helper wraps the reason
    // Verified by dropping the reason
    #[test]
    fn test_invalid_input_helper() {
        let error = invalid_input(&"binary search needs a target");
        assert_eq!(
            error.to_string(),
            "Cannot start run: binary search needs a target"
        );
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = AlgoVizError::ImageExport {
            path: "/tmp/run.gif".into(),
            source: image_error,
        };
        assert!(error.to_string().contains("access denied"));
        assert!(error.to_string().contains("/tmp/run.gif"));
        assert!(error.source().is_some());
    }
}
