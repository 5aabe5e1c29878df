use crate::{error::Error, templater::Templater};

/// Asserts that a response body contains a (templated) piece of text, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    text: String,
}

impl Validation {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn execute(&self, templater: &Templater, body: &str) -> Result<(), Error> {
        let expected = templater.substitute(&self.text);

        if body.to_lowercase().contains(&expected.to_lowercase()) {
            Ok(())
        } else {
            Err(Error::Validation { expected })
        }
    }
}
