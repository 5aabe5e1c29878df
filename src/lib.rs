mod checks;
mod configuration;
mod data;
pub mod diagnostics;
mod engine;
mod error;
pub mod extractor;
mod log;
mod sequence;
mod templater;
mod transport;
mod util;

pub use checks::{Rule, Validation};
pub use configuration::AutoHttpConfiguration;
pub use data::{FetchRequest, Response};
pub use engine::{AutoHttp, Outcome};
pub use error::Error;
pub use extractor::read_between;
pub use log::{FileLog, Log, TracingLog};
pub use sequence::{Page, Sequence};
pub use templater::{Replacements, Templater, Variables};
pub use transport::{HttpTransport, Transport};
