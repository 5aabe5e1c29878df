use crate::{
    configuration::AutoHttpConfiguration,
    data::{FetchRequest, Response},
    diagnostics,
    error::Error,
    log::Log,
    sequence::{Page, Sequence},
    templater::Templater,
    transport::Transport,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Final result of executing a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success => None,
            Outcome::Failed(message) => Some(message.as_str()),
        }
    }
}

/// Runs sequences page by page against a transport.
#[derive(Debug, Clone)]
pub struct AutoHttp {
    transport: Arc<dyn Transport + Send + Sync>,
    log: Option<Arc<dyn Log + Send + Sync>>,
}

impl AutoHttp {
    pub fn new(configuration: AutoHttpConfiguration) -> Result<Self, Error> {
        Ok(Self {
            transport: configuration.transport()?,
            log: configuration.log(),
        })
    }

    pub fn transport(&self) -> Arc<dyn Transport + Send + Sync> {
        self.transport.clone()
    }

    /// Executes every page of `sequence` in order, stopping at the first failure.
    ///
    /// The sequence starts over from its initial variables on every call. Variables written by
    /// the rules of a page become visible to the pages after it, never to the checks of the page
    /// itself.
    pub fn execute(&self, sequence: &mut Sequence) -> Outcome {
        let outcome = match self.run(sequence) {
            Ok(()) => {
                info!(pages = sequence.pages().len(), "sequence completed");
                Outcome::Success
            }
            Err(error) => {
                warn!(error = %error, "sequence failed");
                Outcome::Failed(error.to_string())
            }
        };

        if let Some(log) = &self.log {
            log.write("autohttp", &diagnostics::sequence_dump(sequence));
        }

        outcome
    }

    fn run(&self, sequence: &mut Sequence) -> Result<(), Error> {
        sequence.reset();
        let (pages, templater) = sequence.parts_mut();

        for (index, page) in pages.iter_mut().enumerate() {
            let request = FetchRequest {
                url: templater.substitute(page.url()),
                headers: templater.substitute_all(page.headers()),
                body: templater.substitute_opt(page.body()),
                ..FetchRequest::default()
            };

            debug!(page = index + 1, url = %request.url, "fetching page");
            let response = self.transport.fetch(&request);

            let checked = Self::check_page(page, templater, &request, &response);
            page.set_last_response(response);
            checked?;

            templater.rebuild_replacements();
        }

        Ok(())
    }

    fn check_page(
        page: &Page,
        templater: &mut Templater,
        request: &FetchRequest,
        response: &Response,
    ) -> Result<(), Error> {
        if let Some(message) = &response.error {
            return Err(Error::Transport {
                url: request.url.clone(),
                message: message.clone(),
            });
        }

        for validation in page.validations() {
            validation.execute(templater, &response.body)?;
        }

        for rule in page.rules() {
            rule.execute(templater, &response.body)?;
        }

        Ok(())
    }
}
