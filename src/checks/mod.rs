mod rule;
mod validation;

pub use rule::Rule;
pub use validation::Validation;
