mod error;
mod login_client;

pub use error::Error;
pub use login_client::{ForumLoginClient, ForumLoginClientBuilder, Session};
