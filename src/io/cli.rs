//! Command-line interface for generating passwords from a pattern

use crate::generation::interpreter::Interpreter;
use crate::generation::random::seeded_rng;
use crate::io::configuration::DEFAULT_PASSWORD_COUNT;
use crate::io::error::{GeneratorError, Result, invalid_pattern};
use crate::pattern::Pattern;
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "pwpattern")]
#[command(
    author,
    version,
    about = "Generate passwords from a pattern",
    long_about = "Generate passwords from a pattern.\n\n\
        [...] draws one character from a class (ranges like A-Z allowed),\n\
        (...) groups a sub-pattern, *N after ] or ) repeats it N times,\n\
        \\ makes the next character literal; everything else is printed as is.\n\n\
        Example: pwpattern -p '([A-Za-z][0-9])*3'"
)]
/// Command-line arguments for the password generator
pub struct Cli {
    /// Pattern describing the password
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Number of passwords to generate (0 means 1)
    #[arg(short, long, value_name = "N")]
    pub times: Option<usize>,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log generation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Number of passwords to produce
    pub fn password_count(&self) -> usize {
        match self.times {
            None | Some(0) => DEFAULT_PASSWORD_COUNT,
            Some(times) => times,
        }
    }
}

/// Validates the pattern once and writes one password per line
pub struct PasswordRunner {
    cli: Cli,
}

impl PasswordRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate passwords to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is missing or invalid, seeding fails,
    /// or stdout cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut sink = stdout.lock();
        self.run_to(&mut sink)
    }

    /// Generate passwords to an arbitrary sink
    ///
    /// Nothing is written unless the pattern validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is missing or invalid, seeding fails,
    /// or the sink cannot be written
    pub fn run_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        let text = self
            .cli
            .pattern
            .as_deref()
            .ok_or(GeneratorError::MissingPattern)?;

        let pattern = Pattern::parse(text).map_err(|source| invalid_pattern(text, source))?;
        debug!(pattern = text, nodes = pattern.nodes().len(), "pattern accepted");

        let mut interpreter = Interpreter::new(seeded_rng(self.cli.seed)?);
        let count = self.cli.password_count();
        let mut password = String::new();

        for _ in 0..count {
            password.clear();
            interpreter.generate_into(&pattern, &mut password);
            writeln!(sink, "{password}")?;
        }
        sink.flush()?;

        info!(count, "passwords generated");
        Ok(())
    }
}
