//! Request dispatcher.
//!
//! Every action runs the same sequence: clear the target, take a busy slot,
//! send one request, project the result or log the failure, then release the
//! slot. Failures are swallowed here; callers get an [`Outcome`] back.

use serde_json::Value;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::busy::BusyCounter;
use crate::config::ClientConfig;
use crate::error::{LexisResult, TransportFailure};
use crate::model::{AnalysisRequest, Endpoint};
use crate::render;
use crate::transport::{HttpTransport, Transport};
use crate::view::{KeywordTable, ResultField};

/// Result of one dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call succeeded; holds the number of values written to the target.
    Rendered(usize),
    /// The call failed and was logged. The target stays cleared.
    Failed(TransportFailure),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn failure(&self) -> Option<&TransportFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Rendered(_) => None,
        }
    }
}

/// A target plus the rule for projecting a response into it.
trait Projection {
    fn clear(&mut self);
    fn project(&mut self, response: &Value) -> usize;
}

struct ScalarTarget<'a, F: ?Sized> {
    field: &'a mut F,
    result_field: &'static str,
}

impl<F: ResultField + ?Sized> Projection for ScalarTarget<'_, F> {
    fn clear(&mut self) {
        self.field.clear();
    }

    fn project(&mut self, response: &Value) -> usize {
        usize::from(render::project_scalar(response, self.result_field, &mut *self.field))
    }
}

struct ListTarget<'a, K: ?Sized> {
    table: &'a mut K,
}

impl<K: KeywordTable + ?Sized> Projection for ListTarget<'_, K> {
    fn clear(&mut self) {
        self.table.clear();
    }

    fn project(&mut self, response: &Value) -> usize {
        render::project_keywords(response, &mut *self.table)
    }
}

/// Sends analysis actions and renders their results.
pub struct Dispatcher<T = HttpTransport> {
    transport: T,
    busy: BusyCounter,
}

impl Dispatcher<HttpTransport> {
    /// Dispatcher over HTTP using `config`.
    pub fn from_config(config: &ClientConfig, busy: BusyCounter) -> LexisResult<Self> {
        Ok(Self::new(HttpTransport::from_config(config)?, busy))
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, busy: BusyCounter) -> Self {
        Self { transport, busy }
    }

    pub fn busy(&self) -> &BusyCounter {
        &self.busy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a scalar action (`lemmatize`, `tag`) and write the endpoint's
    /// result field into `target`.
    pub async fn dispatch_simple<F>(&self, endpoint: Endpoint, input: &str, target: &mut F) -> Outcome
    where
        F: ResultField + Send + ?Sized,
    {
        let request = AnalysisRequest::simple(input);
        let mut projection = ScalarTarget {
            field: target,
            result_field: endpoint.result_field(),
        };
        self.dispatch(endpoint, &request, &mut projection).await
    }

    /// Run a keyword extraction action and append one row per keyword to
    /// `target`.
    pub async fn dispatch_keywords<K>(
        &self,
        endpoint: Endpoint,
        text: &str,
        method: &str,
        target: &mut K,
    ) -> Outcome
    where
        K: KeywordTable + Send + ?Sized,
    {
        let request = AnalysisRequest::keywords(text, method);
        let mut projection = ListTarget { table: target };
        self.dispatch(endpoint, &request, &mut projection).await
    }

    async fn dispatch<P>(&self, endpoint: Endpoint, request: &AnalysisRequest, target: &mut P) -> Outcome
    where
        P: Projection + Send,
    {
        let span = info_span!("dispatch", id = %Uuid::new_v4(), endpoint = %endpoint);

        async move {
            target.clear();

            // The indicator hides only after the result is in place.
            let busy = self.busy.acquire();
            let outcome = match self.transport.send(endpoint, request).await {
                Ok(response) => Outcome::Rendered(target.project(&response)),
                Err(failure) => {
                    warn!(
                        status = failure.text_status(),
                        error = %failure,
                        "Error: {}",
                        failure.text_status()
                    );
                    Outcome::Failed(failure)
                }
            };
            drop(busy);

            outcome
        }
        .instrument(span)
        .await
    }
}
