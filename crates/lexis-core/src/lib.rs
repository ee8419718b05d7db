//! Lexis Core Library
//!
//! Dispatch and rendering contract for the text-analysis actions
//! (lemmatize, tag, keyword extraction): one HTTP call per action, a shared
//! busy indicator around it, and projection of the JSON result into a
//! field or a table.

pub mod busy;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod render;
pub mod transport;
pub mod view;

pub use busy::{BusyCounter, BusyGuard, BusyIndicator, LogIndicator};
pub use config::{ClientConfig, TransportVariant};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{LexisError, LexisResult, TransportFailure};
pub use model::{AnalysisRequest, Endpoint, Keyword, KeywordListResponse, KeywordRow};
pub use transport::{HttpTransport, Transport};
pub use view::{FieldBuffer, KeywordTable, ResultField, RowBuffer};
