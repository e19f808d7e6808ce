//! Pattern language constants and runtime configuration defaults

// Pattern alphabet
/// Lowest byte allowed anywhere in a pattern (`!`)
pub const PRINTABLE_FIRST: u8 = 0x21;
/// Highest byte allowed anywhere in a pattern (`~`)
pub const PRINTABLE_LAST: u8 = 0x7E;
/// Number of slots needed to track membership of any ASCII byte
pub const ASCII_WIDTH: usize = 128;

// Structural bytes
/// Introduces an escaped character
pub const ESCAPE: u8 = b'\\';
/// Opens a character class
pub const CLASS_OPEN: u8 = b'[';
/// Closes a character class
pub const CLASS_CLOSE: u8 = b']';
/// Opens a group
pub const GROUP_OPEN: u8 = b'(';
/// Closes a group
pub const GROUP_CLOSE: u8 = b')';
/// Range operator inside a class
pub const RANGE_DASH: u8 = b'-';
/// Introduces a repetition suffix after `]` or `)`
pub const REPEAT_MARKER: u8 = b'*';

// Default values for configurable parameters
/// Passwords generated when no count (or a count of zero) is requested
pub const DEFAULT_PASSWORD_COUNT: usize = 1;
/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "pwpattern=warn";
/// Log filter used with `--verbose` when `RUST_LOG` is not set
pub const VERBOSE_LOG_FILTER: &str = "pwpattern=debug";

// Process exit statuses
/// No pattern was supplied on the command line
pub const EXIT_MISSING_PATTERN: u8 = 255;
/// The supplied pattern failed validation
pub const EXIT_INVALID_PATTERN: u8 = 254;
/// Seeding or writing output failed
pub const EXIT_RUNTIME_FAILURE: u8 = 1;

/// Test whether a byte belongs to the pattern alphabet
pub const fn is_printable(byte: u8) -> bool {
    byte >= PRINTABLE_FIRST && byte <= PRINTABLE_LAST
}
