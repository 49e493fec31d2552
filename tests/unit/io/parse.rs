//! Tests for custom input parsing and validation messages

#[cfg(test)]
mod tests {
    use algoviz::io::error::ValidationError;
    use algoviz::io::parse::{InputLimits, parse_custom_sequence, parse_target};

    // Tests well formed input with spaces and a trailing comma
    // Verified by rejecting the trailing comma
    #[test]
    fn test_parse_valid_list() {
        let limits = InputLimits::default();
        let sequence = parse_custom_sequence(" 5, 3 ,8,1, ", &limits)
            .unwrap_or_else(|error| panic!("{error}"));
        assert_eq!(sequence.values(), &[5, 3, 8, 1]);
    }

    // Tests blank input is reported as empty
    // Verified by returning an empty sequence
    #[test]
    fn test_empty_input() {
        let limits = InputLimits::default();
        for text in ["", "   ", ","] {
            assert_eq!(
                parse_custom_sequence(text, &limits),
                Err(ValidationError::Empty)
            );
        }
    }

    // Tests non-numeric and blank tokens are named in the error
    // Verified by skipping blank tokens
    #[test]
    fn test_non_numeric_tokens() {
        let limits = InputLimits::default();
        assert_eq!(
            parse_custom_sequence("1, two, 3", &limits),
            Err(ValidationError::NonNumeric {
                token: "two".to_string()
            })
        );
        assert_eq!(
            parse_custom_sequence("1,,3", &limits),
            Err(ValidationError::NonNumeric {
                token: String::new()
            })
        );
        assert_eq!(
            parse_custom_sequence("1.5", &limits),
            Err(ValidationError::NonNumeric {
                token: "1.5".to_string()
            })
        );
    }

    // Tests negative and too large values are out of range
    // Verified by clamping values into range
    #[test]
    fn test_out_of_range() {
        let limits = InputLimits::default();
        assert_eq!(
            parse_custom_sequence("4, -1", &limits),
            Err(ValidationError::OutOfRange {
                value: -1,
                min: 0,
                max: 999
            })
        );
        assert!(matches!(
            parse_custom_sequence("1000", &limits),
            Err(ValidationError::OutOfRange { value: 1000, .. })
        ));
    }

    // Tests the element count limit
    // Verified by truncating instead of rejecting
    #[test]
    fn test_too_many_elements() {
        let limits = InputLimits {
            max_elements: 3,
            ..InputLimits::default()
        };
        assert!(parse_custom_sequence("1,2,3", &limits).is_ok());
        assert_eq!(
            parse_custom_sequence("1,2,3,4", &limits),
            Err(ValidationError::TooManyElements { count: 4, max: 3 })
        );
    }

    // Tests target parsing shares the value rules and reports a missing target
    // Verified by defaulting a blank target to zero
    #[test]
    fn test_parse_target() {
        let limits = InputLimits::default();
        assert_eq!(parse_target(" 42 ", &limits), Ok(42));
        assert_eq!(parse_target("  ", &limits), Err(ValidationError::MissingTarget));
        assert!(matches!(
            parse_target("abc", &limits),
            Err(ValidationError::NonNumeric { .. })
        ));
    }
}
