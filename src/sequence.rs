use crate::{
    checks::{Rule, Validation},
    data::Response,
    templater::{Templater, Variables},
};

/// One step of a sequence: a request template plus the checks run against its response.
#[derive(Debug, Clone)]
pub struct Page {
    url: String,
    headers: Option<Vec<String>>,
    body: Option<String>,
    validations: Vec<Validation>,
    rules: Vec<Rule>,
    last_response: Option<Response>,
}

impl Page {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            headers: None,
            body: None,
            validations: Vec::new(),
            rules: Vec::new(),
            last_response: None,
        }
    }

    pub fn with_headers<S: Into<String>, I: IntoIterator<Item = S>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_validation<S: Into<String>>(mut self, text: S) -> Self {
        self.validations.push(Validation::new(text));
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn validations(&self) -> &[Validation] {
        &self.validations
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The response received during the most recent execution, if this page was reached.
    pub fn last_response(&self) -> Option<&Response> {
        self.last_response.as_ref()
    }

    pub(crate) fn set_last_response(&mut self, response: Response) {
        self.last_response = Some(response);
    }

    pub(crate) fn clear_last_response(&mut self) {
        self.last_response = None;
    }
}

/// An ordered list of pages sharing one set of variables during an execution.
#[derive(Debug, Clone)]
pub struct Sequence {
    pages: Vec<Page>,
    initial_variables: Variables,
    templater: Templater,
}

impl Sequence {
    pub fn new(pages: Vec<Page>, initial_variables: Variables) -> Self {
        Self {
            pages,
            templater: Templater::new(initial_variables.clone()),
            initial_variables,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn initial_variables(&self) -> &Variables {
        &self.initial_variables
    }

    pub fn variables(&self) -> &Variables {
        self.templater.variables()
    }

    pub fn templater(&self) -> &Templater {
        &self.templater
    }

    /// Restores the initial variables and forgets the responses of the previous execution.
    pub(crate) fn reset(&mut self) {
        self.templater.reset(&self.initial_variables);
        for page in &mut self.pages {
            page.clear_last_response();
        }
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [Page], &mut Templater) {
        (&mut self.pages, &mut self.templater)
    }
}
