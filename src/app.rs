use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{PredictionOutput, ProjectInput};
use crate::error::{PredictionError, ValidationError};
use crate::scenario::{self, Scenario};
use crate::services::{Notification, Notifier, Predictor};

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// The baseline input and its result, always updated together.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    pub status: Status,
    /// Most recently submitted input, kept even when its request failed.
    pub baseline: Option<ProjectInput>,
    pub result: Option<PredictionOutput>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }
}

/// How a single `submit` ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Succeeded,
    Failed,
    /// A newer submission was issued while this one was in flight; its
    /// outcome was discarded.
    Superseded,
}

struct Inner {
    state: DashboardState,
    /// Sequence number of the latest request issued.
    latest: u64,
}

/// Session-scoped controller for the prediction dashboard.
pub struct Dashboard<P, N> {
    predictor: P,
    notifier: N,
    inner: Mutex<Inner>,
}

impl<P: Predictor, N: Notifier> Dashboard<P, N> {
    pub fn new(predictor: P, notifier: N) -> Self {
        Self {
            predictor,
            notifier,
            inner: Mutex::new(Inner {
                state: DashboardState::default(),
                latest: 0,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DashboardState {
        self.inner.lock().state.clone()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validate `input`, record it as the baseline and request a prediction.
    ///
    /// Remote failures are reported through the notifier and the `Failed`
    /// status, not as an `Err`. Only local validation returns an error, in
    /// which case nothing changes and no request is made.
    pub async fn submit(&self, input: ProjectInput) -> Result<Submission, ValidationError> {
        if let Err(e) = input.validate() {
            warn!(error = %e, "Rejected submission");
            return Err(e);
        }

        let sequence = self.begin(&input);
        let outcome = self.predictor.predict(&input).await;
        Ok(self.finish(sequence, outcome))
    }

    /// Resubmit a perturbed baseline. Returns `Ok(None)` without issuing a
    /// request when the candidate changes neither editable field, when no
    /// baseline exists yet, or while a request is in flight.
    pub async fn reanalyze(
        &self,
        candidate: ProjectInput,
    ) -> Result<Option<Submission>, ValidationError> {
        let allowed = {
            let inner = self.inner.lock();
            inner.state.baseline.as_ref().is_some_and(|baseline| {
                scenario::allows(baseline, &candidate, inner.state.is_loading())
            })
        };

        if !allowed {
            debug!("Re-analysis skipped: no effective change");
            return Ok(None);
        }

        self.submit(candidate).await.map(Some)
    }

    /// Apply `scenario` to the current baseline and re-analyze.
    pub async fn reanalyze_scenario(
        &self,
        scenario: Scenario,
    ) -> Result<Option<Submission>, ValidationError> {
        let candidate = self
            .inner
            .lock()
            .state
            .baseline
            .as_ref()
            .map(|baseline| scenario.apply(baseline));

        match candidate {
            Some(candidate) => self.reanalyze(candidate).await,
            None => Ok(None),
        }
    }

    fn begin(&self, input: &ProjectInput) -> u64 {
        let mut inner = self.inner.lock();
        inner.latest += 1;
        inner.state = DashboardState {
            status: Status::Loading,
            baseline: Some(input.clone()),
            result: None,
        };

        info!(
            sequence = inner.latest,
            project_name = %input.project_name,
            "Prediction submitted"
        );
        inner.latest
    }

    fn finish(&self, sequence: u64, outcome: Result<PredictionOutput, PredictionError>) -> Submission {
        let (submission, notification) = {
            let mut inner = self.inner.lock();
            if sequence != inner.latest {
                debug!(sequence, latest = inner.latest, "Discarding stale prediction response");
                return Submission::Superseded;
            }

            match outcome {
                Ok(output) => {
                    info!(
                        sequence,
                        time_overrun = output.predicted_time_overrun,
                        hotspots = output.hotspots.len(),
                        "Prediction succeeded"
                    );
                    inner.state.status = Status::Success;
                    inner.state.result = Some(output);
                    (Submission::Succeeded, Notification::analysis_complete())
                }
                Err(e) => {
                    warn!(sequence, kind = e.kind(), error = %e, "Prediction failed");
                    inner.state.status = Status::Failed;
                    inner.state.result = None;
                    (Submission::Failed, Notification::analysis_failed(e.user_message()))
                }
            }
        };

        self.notifier.notify(notification);
        submission
    }
}
