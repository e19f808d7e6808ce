//! Tests for single-pass pattern validation

#[cfg(test)]
mod tests {
    use pwpattern::PatternError;
    use pwpattern::pattern::{is_valid, validate};

    #[test]
    fn test_valid_patterns() {
        let patterns = [
            "abc",
            "([A-Za-z][0-9])*3",
            r"\[a\]",
            "[a-a]",
            "[aab]",
            "[a-c-e]",
            r"[!-\-]",
            r"[\--/]",
            r"[\]]",
            "[*]",
            "[0-9]*12",
            "(([0-9])*2x)*3",
            "(a*)",
            "a-b",
            "b-a",
            "-",
            "*",
            "[a]*0",
            "*0",
            "",
        ];

        for pattern in patterns {
            assert_eq!(validate(pattern), Ok(()), "pattern {pattern:?}");
            assert!(is_valid(pattern), "pattern {pattern:?}");
        }
    }

    #[test]
    fn test_unclosed_class() {
        assert_eq!(
            validate("x[abc"),
            Err(PatternError::UnclosedClass { offset: 1 })
        );
    }

    #[test]
    fn test_nested_class() {
        assert_eq!(
            validate("[a[b]]"),
            Err(PatternError::NestedClass { offset: 2 })
        );
    }

    #[test]
    fn test_unmatched_close_group() {
        assert_eq!(
            validate("a)"),
            Err(PatternError::UnopenedGroup { offset: 1 })
        );
        assert_eq!(
            validate("(a))"),
            Err(PatternError::UnopenedGroup { offset: 3 })
        );
    }

    #[test]
    fn test_unclosed_group_reports_innermost() {
        assert_eq!(
            validate("((a)"),
            Err(PatternError::UnclosedGroup { offset: 0 })
        );
        assert_eq!(
            validate("(a)(b(c"),
            Err(PatternError::UnclosedGroup { offset: 5 })
        );
    }

    #[test]
    fn test_descending_range() {
        assert_eq!(
            validate("[b-a]"),
            Err(PatternError::DescendingRange {
                offset: 2,
                start: b'b',
                end: b'a'
            })
        );
        // Escaped end operand is still compared
        assert_eq!(
            validate(r"[a-\]]"),
            Err(PatternError::DescendingRange {
                offset: 2,
                start: b'a',
                end: b']'
            })
        );
    }

    #[test]
    fn test_dash_at_class_edges() {
        assert_eq!(
            validate("[-a]"),
            Err(PatternError::MissingRangeStart { offset: 1 })
        );
        assert_eq!(
            validate("[a-]"),
            Err(PatternError::MissingRangeEnd { offset: 2 })
        );
        assert_eq!(
            validate("[a--b]"),
            Err(PatternError::MissingRangeEnd { offset: 2 })
        );
    }

    #[test]
    fn test_trailing_escape() {
        assert_eq!(
            validate(r"abc\"),
            Err(PatternError::DanglingEscape { offset: 3 })
        );
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(validate("[]"), Err(PatternError::EmptyClass { offset: 1 }));
        assert_eq!(
            validate("ab[]"),
            Err(PatternError::EmptyClass { offset: 3 })
        );
    }

    #[test]
    fn test_close_class_without_open() {
        assert_eq!(
            validate("a]"),
            Err(PatternError::UnopenedClass { offset: 1 })
        );
        assert_eq!(
            validate(r"\[]"),
            Err(PatternError::UnopenedClass { offset: 2 })
        );
    }

    #[test]
    fn test_group_inside_class() {
        assert_eq!(
            validate("[(a]"),
            Err(PatternError::GroupInClass { offset: 1 })
        );
        assert_eq!(
            validate("([a)])"),
            Err(PatternError::GroupInClass { offset: 3 })
        );
    }

    #[test]
    fn test_out_of_range_byte() {
        assert!(!is_valid("pass word"));
        assert!(!is_valid("naïve"));
    }

    #[test]
    fn test_repeat_count_overflow() {
        assert_eq!(
            validate("[a]*999999999999999999999999"),
            Err(PatternError::CountOverflow { offset: 3 })
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        for pattern in ["([a-z])*4", "[b-a]", r"x\", "(("] {
            assert_eq!(validate(pattern), validate(pattern));
            assert_eq!(is_valid(pattern), is_valid(pattern));
        }
    }
}
