use crate::{error::Error, extractor, templater::Templater};
use tracing::debug;

/// Derives a variable from a response body by reading the text between two delimiters.
///
/// `name`, `left` and `right` are required; a rule missing one of them fails with
/// [`Error::Structural`] when executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    name: Option<String>,
    left: Option<String>,
    right: Option<String>,
    start: Option<String>,
}

impl Rule {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn left<S: Into<String>>(mut self, left: S) -> Self {
        self.left = Some(left.into());
        self
    }

    pub fn right<S: Into<String>>(mut self, right: S) -> Self {
        self.right = Some(right.into());
        self
    }

    pub fn start<S: Into<String>>(mut self, start: S) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Extracts the value from `body` and stores it under the rule's name.
    ///
    /// Delimiters are resolved against the replacement table as it is now; the written variable
    /// only shows up in substitutions once the templater rebuilds its table.
    pub fn execute(&self, templater: &mut Templater, body: &str) -> Result<(), Error> {
        let name = self.name.as_deref().ok_or_else(|| Error::Structural {
            rule: String::from("Unnamed rule"),
            missing: "name",
        })?;
        let left = self.required(name, &self.left, "left")?;
        let right = self.required(name, &self.right, "right")?;

        let left = templater.substitute(left);
        let right = templater.substitute(right);
        let start = templater.substitute_opt(self.start.as_deref());

        let value = extractor::read_between(body, &left, &right, start.as_deref())
            .ok_or_else(|| Error::Extraction {
                rule: String::from(name),
            })?;

        debug!(rule = name, value, "rule extracted a value");
        templater.set_variable(name, value);

        Ok(())
    }

    fn required<'a>(
        &self,
        name: &str,
        field: &'a Option<String>,
        field_name: &'static str,
    ) -> Result<&'a str, Error> {
        field.as_deref().ok_or_else(|| Error::Structural {
            rule: format!("Rule \"{}\"", name),
            missing: field_name,
        })
    }
}
