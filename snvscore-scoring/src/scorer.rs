use std::sync::{Arc, Mutex, MutexGuard};

use snvscore_core::errors::ScoringError;

///
/// A sequence-likelihood model: one score per input sequence, same order,
/// deterministic for a given model checkpoint.
///
/// Takes `&mut self` so a model that is not safe to call concurrently can
/// only be reached through exclusive access; see [`SharedScorer`].
///
pub trait SequenceScorer: Send {
    fn score_sequences(&mut self, sequences: &[String]) -> Result<Vec<f64>, ScoringError>;
}

impl<T: SequenceScorer + ?Sized> SequenceScorer for Box<T> {
    fn score_sequences(&mut self, sequences: &[String]) -> Result<Vec<f64>, ScoringError> {
        (**self).score_sequences(sequences)
    }
}

///
/// Score a single sequence, checking the model answered with exactly one score.
///
pub fn score_one<S: SequenceScorer + ?Sized>(scorer: &mut S, sequence: &str) -> Result<f64, ScoringError> {
    let scores = scorer.score_sequences(&[sequence.to_string()])?;
    match scores.as_slice() {
        [score] => Ok(*score),
        _ => Err(ScoringError::CountMismatch {
            expected: 1,
            got: scores.len(),
        }),
    }
}

///
/// Process-scoped handle on a loaded model.
///
/// The model is loaded once and every request borrows it through `lock`,
/// which serialises requests: one in flight at a time per process.
///
#[derive(Clone)]
pub struct SharedScorer {
    inner: Arc<Mutex<Box<dyn SequenceScorer>>>,
}

impl SharedScorer {
    pub fn new<S: SequenceScorer + 'static>(scorer: S) -> Self {
        SharedScorer {
            inner: Arc::new(Mutex::new(Box::new(scorer))),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Box<dyn SequenceScorer>>, ScoringError> {
        self.inner
            .lock()
            .map_err(|_| ScoringError::Model("model lock poisoned by a failed request".to_string()))
    }
}

#[cfg(feature = "http")]
pub use remote::HttpScorer;

#[cfg(feature = "http")]
mod remote {
    use std::time::Duration;

    use log::debug;
    use serde::{Deserialize, Serialize};
    use ureq::Agent;

    use super::SequenceScorer;
    use snvscore_core::errors::ScoringError;

    #[derive(Serialize)]
    struct ScoreRequest<'a> {
        sequences: &'a [String],
    }

    #[derive(Deserialize)]
    struct ScoreResponse {
        scores: Vec<f64>,
    }

    ///
    /// Adapter for a model served over HTTP.
    ///
    /// POSTs `{"sequences": [...]}` and expects `{"scores": [...]}` back.
    ///
    pub struct HttpScorer {
        endpoint: String,
        agent: Agent,
    }

    impl HttpScorer {
        pub fn new(endpoint: &str, timeout: Option<Duration>) -> Self {
            let config = Agent::config_builder().timeout_global(timeout).build();

            HttpScorer {
                endpoint: endpoint.to_string(),
                agent: config.into(),
            }
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl SequenceScorer for HttpScorer {
        fn score_sequences(&mut self, sequences: &[String]) -> Result<Vec<f64>, ScoringError> {
            debug!("Scoring {} sequence(s) at {}", sequences.len(), self.endpoint);

            let mut response = match self
                .agent
                .post(&self.endpoint)
                .send_json(ScoreRequest { sequences })
            {
                Ok(resp) => resp,
                Err(ureq::Error::StatusCode(code)) => {
                    return Err(ScoringError::Model(format!(
                        "HTTP status {} from {}",
                        code, self.endpoint
                    )));
                }
                Err(e) => {
                    return Err(ScoringError::Model(format!(
                        "request to {} failed: {}",
                        self.endpoint, e
                    )));
                }
            };

            let body: ScoreResponse = response
                .body_mut()
                .read_json()
                .map_err(|e| ScoringError::Model(format!("malformed response: {}", e)))?;

            if body.scores.len() != sequences.len() {
                return Err(ScoringError::CountMismatch {
                    expected: sequences.len(),
                    got: body.scores.len(),
                });
            }

            Ok(body.scores)
        }
    }
}
