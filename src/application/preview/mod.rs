//! Debounced slug preview for the authoring form.
//!
//! Titles arrive as the author types. Once the input has been quiet for the
//! debounce window the latest title is turned into a slug and checked for
//! availability on a separate task. A newer settle aborts the task still
//! running, so only the most recent title ever produces a preview.
use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant},
};

use crate::domain::{
    errors::DomainResult,
    slug::{EntityId, EntityKind, SlugAvailability, SlugService},
};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

const OUTPUT_BUFFER: usize = 16;

#[derive(Debug)]
pub struct SlugPreview {
    /// Position of the settle that produced this preview, starting at 1.
    pub seq: u64,
    pub title: String,
    pub outcome: DomainResult<SlugAvailability>,
}

pub struct SlugPreviewer {
    slug_service: Arc<SlugService>,
    kind: EntityKind,
    exclude: Option<EntityId>,
    debounce: Duration,
}

impl SlugPreviewer {
    pub fn new(slug_service: Arc<SlugService>, kind: EntityKind) -> Self {
        Self {
            slug_service,
            kind,
            exclude: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Preview on behalf of an existing entity, whose own slug never counts as
    /// taken.
    pub fn excluding(mut self, id: EntityId) -> Self {
        self.exclude = Some(id);
        self
    }

    /// Start the previewer. The returned receiver closes once `inputs` has
    /// closed and the final preview was delivered.
    pub fn spawn(self, inputs: mpsc::Receiver<String>) -> mpsc::Receiver<SlugPreview> {
        let (tx, rx) = mpsc::channel(OUTPUT_BUFFER);
        tokio::spawn(self.run(inputs, tx));
        rx
    }

    async fn run(self, mut inputs: mpsc::Receiver<String>, output: mpsc::Sender<SlugPreview>) {
        let mut pending: Option<String> = None;
        let mut in_flight: Option<JoinHandle<SlugPreview>> = None;
        let mut seq = 0u64;

        let settle = time::sleep(self.debounce);
        tokio::pin!(settle);

        loop {
            tokio::select! {
                received = inputs.recv() => match received {
                    Some(title) => {
                        pending = Some(title);
                        settle.as_mut().reset(Instant::now() + self.debounce);
                    }
                    None => break,
                },
                () = &mut settle, if pending.is_some() => {
                    if let Some(title) = pending.take() {
                        seq += 1;
                        self.restart(&mut in_flight, seq, title);
                    }
                }
                finished = join_in_flight(&mut in_flight), if in_flight.is_some() => {
                    in_flight = None;
                    if let Some(preview) = finished.filter(|p| p.seq == seq) {
                        if output.send(preview).await.is_err() {
                            tracing::debug!("slug preview receiver dropped");
                            return;
                        }
                    }
                }
            }
        }

        if let Some(title) = pending.take() {
            seq += 1;
            self.restart(&mut in_flight, seq, title);
        }
        if let Some(handle) = in_flight.take() {
            match handle.await {
                Ok(preview) if preview.seq == seq => {
                    let _ = output.send(preview).await;
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(error = %err, "slug preview task failed"),
            }
        }
    }

    fn restart(&self, in_flight: &mut Option<JoinHandle<SlugPreview>>, seq: u64, title: String) {
        if let Some(stale) = in_flight.take() {
            stale.abort();
        }

        let service = Arc::clone(&self.slug_service);
        let kind = self.kind;
        let exclude = self.exclude;
        *in_flight = Some(tokio::spawn(async move {
            let outcome = match service.generate(&title) {
                Ok(slug) => service.check_availability(kind, slug.as_str(), exclude).await,
                Err(err) => Err(err.into()),
            };
            SlugPreview {
                seq,
                title,
                outcome,
            }
        }));
    }
}

/// Completes with the in-flight task's preview; `None` if it was aborted or
/// panicked.
async fn join_in_flight(in_flight: &mut Option<JoinHandle<SlugPreview>>) -> Option<SlugPreview> {
    match in_flight.as_mut() {
        Some(handle) => handle.await.ok(),
        None => std::future::pending().await,
    }
}
