use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    LoginFailed(String),
    MissingCredential(&'static str),
    AutoHttpError(autohttp::Error),
}

impl std::error::Error for Error {}

impl From<autohttp::Error> for Error {
    fn from(e: autohttp::Error) -> Self {
        Error::AutoHttpError(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LoginFailed(reason) => write!(f, "Login failed: {}", reason),
            Error::MissingCredential(name) => {
                write!(f, "The login flow didn't yield a {}", name)
            }
            Error::AutoHttpError(e) => write!(f, "{}", e),
        }
    }
}
