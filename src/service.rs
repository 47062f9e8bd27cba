//! Channel-driven quote worker.
//!
//! [`QuoteService`] reads [`Request`]s from a tokio channel, answers them
//! concurrently and writes exactly one [`Response`] per request.  Each
//! request runs under the configured oracle timeout; a request that does
//! not finish in time is answered with
//! [`FailureCode::Generic`](crate::error::FailureCode::Generic).
//!
//! At most [`max_in_flight`](crate::config::QuoteConfig::max_in_flight)
//! requests are answered at once; while the cap is reached the worker
//! stops reading, so a bounded request channel pushes back on senders.
//!
//! Responses are sent in completion order, not arrival order.  Callers
//! correlate them through the echoed query fields.

use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, warn};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::error::QuoteError;
use crate::message::{Request, Response};
use crate::quote::QuoteEngine;
use crate::traits::CurveOracle;

/// Serves quote requests from a channel.
#[derive(Debug, Clone)]
pub struct QuoteService<O> {
    engine: QuoteEngine<O>,
}

impl<O: CurveOracle> QuoteService<O> {
    /// Wraps an engine.
    #[must_use]
    pub const fn new(engine: QuoteEngine<O>) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    #[must_use]
    pub const fn engine(&self) -> &QuoteEngine<O> {
        &self.engine
    }

    /// Answers requests until the request channel closes and every
    /// in-flight request has been answered, or until the response
    /// receiver goes away.
    ///
    /// Returns the number of responses delivered.
    pub async fn run(&self, mut requests: Receiver<Request>, responses: Sender<Response>) -> usize {
        let config = self.engine.config();
        let cap = config.max_in_flight();
        info!(
            "quote service started, timeout {} ms, at most {cap} in flight",
            config.oracle_timeout_ms()
        );
        let mut in_flight = FuturesUnordered::new();
        let mut accepting = true;
        let mut delivered = 0usize;

        loop {
            tokio::select! {
                next = requests.recv(), if accepting && in_flight.len() < cap => match next {
                    Some(request) => {
                        debug!("accepted {} request", request.kind());
                        in_flight.push(self.serve(request));
                    }
                    None => {
                        accepting = false;
                        let pending = in_flight.len();
                        debug!("request channel closed, draining {pending} in flight");
                    }
                },
                Some(response) = in_flight.next(), if !in_flight.is_empty() => {
                    if responses.send(response).await.is_err() {
                        let abandoned = in_flight.len();
                        warn!("response receiver dropped, abandoning {abandoned} in flight");
                        break;
                    }
                    delivered += 1;
                },
                else => break,
            }
        }

        info!("quote service stopped after {delivered} responses");
        delivered
    }

    /// Answers one request within the timeout.
    async fn serve(&self, request: Request) -> Response {
        let limit = self.engine.config().oracle_timeout_ms();
        let kind = request.kind();
        let pending = request.clone();
        match tokio::time::timeout(Duration::from_millis(limit), self.engine.answer(request)).await
        {
            Ok(response) => response,
            Err(_) => {
                let err = QuoteError::Timeout(limit);
                warn!("{kind} failed with code {}: {err}", err.failure_code());
                Response::failed(pending, err.failure_code())
            }
        }
    }
}
