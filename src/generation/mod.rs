/// Pattern walker producing passwords
pub mod interpreter;
/// Random generator construction and seeding
pub mod random;
