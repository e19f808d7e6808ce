//! Tests for error types including source chaining and exit statuses

#[cfg(test)]
mod tests {
    use pwpattern::io::error::invalid_pattern;
    use pwpattern::{GeneratorError, PatternError};
    use std::error::Error;

    #[test]
    fn test_invalid_pattern_chains_source() {
        let error = invalid_pattern("[]", PatternError::EmptyClass { offset: 1 });
        let message = error.to_string();
        assert!(message.contains("'[]'"));
        assert!(message.contains("offset 1"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let missing = GeneratorError::MissingPattern.exit_code();
        let invalid = invalid_pattern("(", PatternError::UnclosedGroup { offset: 0 }).exit_code();
        let entropy = GeneratorError::Entropy {
            reason: "no device".to_string(),
        }
        .exit_code();

        assert_ne!(missing, 0);
        assert_ne!(invalid, 0);
        assert_ne!(entropy, 0);
        assert_ne!(missing, invalid);
        assert_ne!(missing, entropy);
        assert_ne!(invalid, entropy);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error = GeneratorError::from(io_error);
        assert!(matches!(error, GeneratorError::Output { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_pattern_error_messages() {
        let cases = [
            (
                PatternError::InvalidCharacter {
                    offset: 4,
                    byte: b' ',
                },
                "0x20",
            ),
            (PatternError::DanglingEscape { offset: 2 }, "nothing to escape"),
            (PatternError::NestedClass { offset: 3 }, "inside a class"),
            (PatternError::UnopenedGroup { offset: 0 }, "no matching '('"),
            (PatternError::MissingRangeStart { offset: 1 }, "no start"),
            (PatternError::MissingRangeEnd { offset: 1 }, "no end"),
            (PatternError::CountOverflow { offset: 5 }, "too large"),
        ];

        for (error, fragment) in cases {
            let message = error.to_string();
            assert!(message.contains(fragment), "{message}");
            assert!(message.contains(&format!("offset {}", error.offset())));
        }
    }

    #[test]
    fn test_entropy_message() {
        let error = GeneratorError::Entropy {
            reason: "device missing".to_string(),
        };
        assert!(error.to_string().contains("device missing"));
        assert!(error.source().is_none());
    }
}
