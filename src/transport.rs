//! Blocking HTTP transport with a per-instance cookie jar.

use crate::{
    configuration::AutoHttpConfiguration,
    data::{FetchRequest, Response},
    diagnostics,
    error::Error,
    log::Log,
    util,
};
use reqwest::{
    blocking::Client,
    header::{
        HeaderMap, HeaderValue, ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE,
        CONTENT_TYPE,
    },
    redirect::Policy,
};
use std::{fmt::Debug, sync::Arc, time::Duration};
use tracing::{debug, warn};

/// Performs a single HTTP fetch.
///
/// Failures to obtain any response are reported through [`Response::error`]; a response with a
/// non-2xx status is an ordinary response.
pub trait Transport: Debug {
    fn fetch(&self, request: &FetchRequest) -> Response;
}

#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    log: Option<Arc<dyn Log + Send + Sync>>,
}

impl HttpTransport {
    pub fn new(configuration: &AutoHttpConfiguration) -> Result<Self, Error> {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::limited(configuration.max_redirects()))
            .timeout(Duration::from_millis(configuration.timeout_ms()))
            .user_agent(configuration.user_agent())
            .danger_accept_invalid_certs(!configuration.verify_tls())
            .build()?;

        Ok(Self {
            client,
            log: configuration.log(),
        })
    }

    fn default_headers(has_body: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_CHARSET,
            HeaderValue::from_static("ISO-8859-1,utf-8;q=0.7,*;q=0.7"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));

        if has_body {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
        }

        headers
    }

    fn send(&self, request: &FetchRequest) -> Result<Response, Error> {
        let mut headers = Self::default_headers(request.body.is_some());
        if let Some(lines) = &request.headers {
            util::put_headers(&mut headers, lines)?;
        }

        let mut request_builder = match &request.body {
            Some(body) => self.client.post(&request.url).body(body.clone()),
            None => self.client.get(&request.url),
        };
        request_builder = request_builder.headers(headers);

        if let Some(query) = &request.query {
            request_builder = request_builder.query(query);
        }
        if let Some(timeout_ms) = request.timeout_ms {
            request_builder = request_builder.timeout(Duration::from_millis(timeout_ms));
        }

        let response = request_builder.send()?;

        let status_line = format!("{:?} {}", response.version(), response.status());
        let (headers, mut raw_header_lines) = util::extract_headers(response.headers());
        raw_header_lines.insert(0, status_line);

        let body = response.text()?;

        Ok(Response {
            headers,
            raw_header_lines,
            body,
            error: None,
        })
    }

    fn describe(error: Error) -> String {
        match error {
            Error::ReqwestError(e) if e.is_timeout() => format!("timeout: {}", e),
            Error::ReqwestError(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, request: &FetchRequest) -> Response {
        debug!(method = request.method(), url = %request.url, "sending request");

        let response = match self.send(request) {
            Ok(response) => {
                debug!(
                    url = %request.url,
                    status = response.status_line().unwrap_or_default(),
                    "received response"
                );
                response
            }
            Err(error) => {
                let message = Self::describe(error);
                warn!(url = %request.url, error = %message, "request failed");
                Response::from_error(message)
            }
        };

        if let Some(log) = &self.log {
            log.write("http", &diagnostics::fetch_dump(request, &response));
        }

        response
    }
}
