use crate::error::Error;
use autohttp::{AutoHttp, AutoHttpConfiguration, Outcome, Page, Rule, Sequence};
use tracing::info;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Builder used to build a ForumLoginClient instance
#[derive(Debug, Clone, Default)]
pub struct ForumLoginClientBuilder {
    base_url: Option<String>,
    configuration: Option<AutoHttpConfiguration>,
}

impl ForumLoginClientBuilder {
    /// Create a new ForumLoginClientBuilder instance.
    pub fn new() -> Self {
        Self {
            base_url: None,
            configuration: None,
        }
    }

    /// Use the given base url when building a ForumLoginClient instance.
    ///
    /// # Arguments
    /// `base_url` - scheme, host and port of the forum, without a trailing slash.
    ///
    /// # Returns
    /// This builder.
    pub fn with_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use the given engine configuration when building a ForumLoginClient instance.
    ///
    /// # Arguments
    /// `configuration` - timeouts, logging and transport used for every login.
    ///
    /// # Returns
    /// This builder.
    pub fn with_configuration(mut self, configuration: AutoHttpConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Consume the builder and create a ForumLoginClient instance using all of the previously configured values or
    /// their defaults.
    ///
    /// # Returns
    /// A ForumLoginClient instance or an error if the HTTP transport couldn't be set up.
    pub fn build(mut self) -> Result<ForumLoginClient, Error> {
        Ok(ForumLoginClient {
            auto_http: AutoHttp::new(self.configuration.take().unwrap_or_default())?,
            base_url: self
                .base_url
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_BASE_URL)),
        })
    }
}

/// Credentials the forum hands out once a token has been redeemed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub password: String,
}

/// Client that redeems a forum access token and logs in with the credentials it reveals.
#[derive(Debug, Clone)]
pub struct ForumLoginClient {
    auto_http: AutoHttp,
    base_url: String,
}

impl ForumLoginClient {
    /// Redeems `token` and logs in.
    ///
    /// The flow spans three pages: the token page links to the credentials page, whose username and
    /// password are then posted to the login form.
    ///
    /// # Returns
    /// The credentials used for the successful login.
    pub fn log_in<T: AsRef<str>>(&self, token: T) -> Result<Session, Error> {
        let mut sequence = self.login_sequence(token.as_ref());

        if let Outcome::Failed(reason) = self.auto_http.execute(&mut sequence) {
            return Err(Error::LoginFailed(reason));
        }

        let variables = sequence.variables();
        let username = variables
            .get("username")
            .ok_or(Error::MissingCredential("username"))?;
        let password = variables
            .get("password")
            .ok_or(Error::MissingCredential("password"))?;

        info!("Logged in to {} as {}", self.base_url, username);

        Ok(Session {
            username: String::from(username),
            password: String::from(password),
        })
    }

    fn login_sequence(&self, token: &str) -> Sequence {
        Sequence::new(
            vec![
                Page::new(format!("{}/one?token={{{{token}}}}", self.base_url))
                    .with_validation("Token accepted.")
                    .with_rule(
                        Rule::new("credentialsPage")
                            .left("<a href=\"")
                            .right("\"")
                            .start("Token accepted."),
                    ),
                Page::new(format!("{}/{{{{credentialsPage}}}}", self.base_url))
                    .with_rule(Rule::new("username").left("<p>Username: ").right("</p>"))
                    .with_rule(Rule::new("password").left("<p>Password: ").right("</p>")),
                Page::new(format!("{}/three", self.base_url))
                    .with_body("username={{username}}&password={{password}}")
                    .with_validation("Welcome, {{username}}!"),
            ],
            vec![("token", token)].into_iter().collect(),
        )
    }
}
