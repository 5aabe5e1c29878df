use crate::{
    error::Error,
    log::Log,
    transport::{HttpTransport, Transport},
};
use std::sync::Arc;

const DEFAULT_TIMEOUT_MS: u64 = 4000;
const DEFAULT_MAX_REDIRECTS: usize = 8;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; WOW64; rv:52.0) Gecko/20100101 Firefox/52.0";

#[derive(Debug, Clone)]
pub struct AutoHttpConfiguration {
    timeout_ms: u64,
    user_agent: String,
    max_redirects: usize,
    verify_tls: bool,
    log: Option<Arc<dyn Log + Send + Sync>>,
    transport: Option<Arc<dyn Transport + Send + Sync>>,
}

impl AutoHttpConfiguration {
    pub fn new() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            verify_tls: true,
            log: None,
            transport: None,
        }
    }

    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn set_user_agent<S: Into<String>>(&mut self, user_agent: S) {
        self.user_agent = user_agent.into();
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_max_redirects(&mut self, max_redirects: usize) {
        self.max_redirects = max_redirects;
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn set_verify_tls(&mut self, value: bool) {
        self.verify_tls = value;
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    pub fn set_log(&mut self, log: Arc<dyn Log + Send + Sync>) {
        self.log = Some(log);
    }

    pub fn log(&self) -> Option<Arc<dyn Log + Send + Sync>> {
        self.log.clone()
    }

    /// Uses `transport` instead of building an [`HttpTransport`] from this configuration.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport + Send + Sync>) {
        self.transport = Some(transport);
    }

    /// The configured transport or, if none was set, a new [`HttpTransport`] with its own cookie
    /// jar.
    pub fn transport(&self) -> Result<Arc<dyn Transport + Send + Sync>, Error> {
        match &self.transport {
            Some(transport) => Ok(transport.clone()),
            None => Ok(Arc::new(HttpTransport::new(self)?)),
        }
    }
}

impl Default for AutoHttpConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
