//! Log-only front end: reports every change of either carousel.

use crate::carousel::SlideView;
use crate::runtime::{CarouselSnapshot, LoadStatus, RuntimeHandle};
use crate::shutdown::ShutdownHandle;

pub async fn run(handle: RuntimeHandle, shutdown: ShutdownHandle) {
    let mut snapshots = handle.subscribe();
    let mut last = snapshots.borrow_and_update().clone();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let next = snapshots.borrow_and_update().clone();
                report(&last, &next);
                last = next;
            }
            _ = shutdown.wait() => break,
        }
    }
}

fn report(previous: &CarouselSnapshot, next: &CarouselSnapshot) {
    if previous.status != next.status {
        match &next.status {
            LoadStatus::Loading => tracing::info!("loading banners"),
            LoadStatus::Ready => tracing::info!(slides = next.left.slide_count, "banners ready"),
            LoadStatus::Failed { details, .. } => {
                tracing::warn!(error = %details, "banners unavailable")
            }
        }
    }

    for (before, after) in [(&previous.left, &next.left), (&previous.right, &next.right)] {
        if before.current_index != after.current_index || before.phase != after.phase {
            log_view(after);
        }
    }
}

fn log_view(view: &SlideView) {
    tracing::info!(
        side = %view.side,
        position = %view.position_label(),
        slide = view.slide.as_ref().map(|s| s.id.as_str()).unwrap_or("-"),
        autoplay = view.phase.label(),
        "carousel changed"
    );
}
