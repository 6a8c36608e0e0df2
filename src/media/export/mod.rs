// SPDX-License-Identifier: MPL-2.0
//! Export pipeline: rasterize the canvas, encode it and deliver it.
//!
//! [`ExportPipeline::share`] is the single entry point. It works on a frozen
//! [`OverlaySnapshot`] and never returns an error; every failure is folded
//! into an [`ExportOutcome`] that maps to at most one user notice.

pub mod compose;
pub mod delivery;

use crate::domain::overlay::OverlaySnapshot;
use crate::error::{Error, Result};
use crate::ui::notifications::Notification;
use delivery::{select_backend, Artifact, Delivered, DeliveryBackend};
use image_rs::RgbaImage;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use delivery::{default_backends, BackendKind};

/// Result of one share attempt.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Shared { path: PathBuf },
    Downloaded { path: PathBuf },
    /// No share facility was available; the image went to the cache.
    Saved { path: PathBuf },
    Dismissed,
    /// Another export was still running.
    Ignored,
    Failed(Error),
}

impl ExportOutcome {
    /// Notice to show for this outcome, if any.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self {
            ExportOutcome::Shared { path } => {
                Some(Notification::success("Image shared").with_detail(path.display().to_string()))
            }
            ExportOutcome::Downloaded { path } => Some(
                Notification::success("Image downloaded").with_detail(path.display().to_string()),
            ),
            ExportOutcome::Saved { path } => {
                Some(Notification::info("Image saved").with_detail(path.display().to_string()))
            }
            ExportOutcome::Failed(err) => {
                Some(Notification::error("Share failed").with_detail(err.to_string()))
            }
            ExportOutcome::Dismissed | ExportOutcome::Ignored => None,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, ExportOutcome::Failed(_))
    }
}

impl From<Delivered> for ExportOutcome {
    fn from(delivered: Delivered) -> Self {
        match delivered {
            Delivered::Shared(path) => ExportOutcome::Shared { path },
            Delivered::Downloaded(path) => ExportOutcome::Downloaded { path },
            Delivered::Saved(path) => ExportOutcome::Saved { path },
            Delivered::Dismissed => ExportOutcome::Dismissed,
        }
    }
}

/// Resets the in-flight flag when the export finishes or is dropped.
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Clone)]
pub struct ExportPipeline {
    logo: Arc<RgbaImage>,
    backends: Arc<Vec<Box<dyn DeliveryBackend>>>,
    in_flight: Arc<AtomicBool>,
}

impl std::fmt::Debug for ExportPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportPipeline")
            .field("logo", &self.logo.dimensions())
            .field(
                "backends",
                &self.backends.iter().map(|b| b.kind()).collect::<Vec<_>>(),
            )
            .field("in_flight", &self.is_in_flight())
            .finish()
    }
}

impl ExportPipeline {
    #[must_use]
    pub fn new(logo: RgbaImage, backends: Vec<Box<dyn DeliveryBackend>>) -> Self {
        Self {
            logo: Arc::new(logo),
            backends: Arc::new(backends),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Renders `snapshot` over `base` and hands the PNG to the first
    /// available backend.
    pub async fn share(
        &self,
        base: Arc<RgbaImage>,
        snapshot: OverlaySnapshot,
        file_name: String,
    ) -> ExportOutcome {
        let Some(guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("export already in flight, ignoring request");
            return ExportOutcome::Ignored;
        };

        tracing::info!(canvas = ?snapshot.canvas.pixel_dimensions(), "export started");
        let logo = Arc::clone(&self.logo);
        let backends = Arc::clone(&self.backends);
        // The guard lives with the blocking work, which outlives a dropped future.
        let task = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            run(&base, &logo, &snapshot, file_name, &backends)
        });

        let outcome = match task.await {
            Ok(Ok(delivered)) => ExportOutcome::from(delivered),
            Ok(Err(err)) => ExportOutcome::Failed(err),
            Err(err) => ExportOutcome::Failed(Error::Capture(format!("export task failed: {err}"))),
        };
        match &outcome {
            ExportOutcome::Failed(err) => tracing::warn!(error = %err, "export failed"),
            other => tracing::info!(outcome = ?other, "export finished"),
        }
        outcome
    }
}

fn run(
    base: &RgbaImage,
    logo: &RgbaImage,
    snapshot: &OverlaySnapshot,
    file_name: String,
    backends: &[Box<dyn DeliveryBackend>],
) -> Result<Delivered> {
    let image = compose::render(base, logo, snapshot)?;
    let bytes = compose::encode_png(&image)?;
    let backend = select_backend(backends)
        .ok_or_else(|| Error::Delivery("no share or save facility available".to_string()))?;
    tracing::debug!(backend = %backend.kind(), bytes = bytes.len(), "delivering export");
    backend.deliver(&Artifact { bytes, file_name })
}
