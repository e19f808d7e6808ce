//! Walks a parsed pattern and draws random characters

use crate::pattern::{Class, Node, Pattern};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Generates passwords from patterns using an owned random generator
///
/// Each call to [`Interpreter::generate`] starts a fresh walk from the first
/// node; only the generator state carries over between passwords.
pub struct Interpreter<R> {
    rng: R,
}

impl<R: Rng> Interpreter<R> {
    /// Create an interpreter drawing from `rng`
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce one password
    pub fn generate(&mut self, pattern: &Pattern) -> String {
        let mut output = String::new();
        self.generate_into(pattern, &mut output);
        output
    }

    /// Append one password to `output`
    pub fn generate_into(&mut self, pattern: &Pattern, output: &mut String) {
        self.run(pattern.nodes(), output);
    }

    /// Give back the generator
    pub fn into_inner(self) -> R {
        self.rng
    }

    fn run(&mut self, nodes: &[Node], output: &mut String) {
        for node in nodes {
            match node {
                Node::Literal(byte) => output.push(char::from(*byte)),
                Node::Class(class) => self.draw(class, output),
                // Every pass re-enters the body so nested classes draw again
                Node::Group(group) => {
                    for _ in 0..group.count {
                        self.run(&group.body, output);
                    }
                }
            }
        }
    }

    /// Independent uniform draws with replacement
    fn draw(&mut self, class: &Class, output: &mut String) {
        for _ in 0..class.count() {
            if let Some(&byte) = class.choices().choose(&mut self.rng) {
                output.push(char::from(byte));
            }
        }
    }
}
