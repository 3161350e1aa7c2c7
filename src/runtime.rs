//! Async driver for [`DualCarousel`].
//!
//! One task owns the controller. Commands arrive over an mpsc channel,
//! the slide fetch reports back over another, and the task sleeps until
//! the earliest armed autoplay deadline. Every change is published as a
//! [`CarouselSnapshot`] on a watch channel.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::carousel::{DualCarousel, NavRequest, Side, Slide, SlideView, Timing};
use crate::provider::{ProviderError, SlideProvider};
use crate::shutdown::ShutdownHandle;

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Navigate { side: Side, request: NavRequest },
    SetAutoplay { side: Side, enabled: bool },
    /// Fetch the slide list again.
    Reload,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed { message: String, details: String },
}

/// Everything a view needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub left: SlideView,
    pub right: SlideView,
    pub status: LoadStatus,
}

impl CarouselSnapshot {
    pub fn view(&self, side: Side) -> &SlideView {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Cloneable access to a running [`CarouselRuntime`].
#[derive(Clone)]
pub struct RuntimeHandle {
    commands: mpsc::Sender<CarouselCommand>,
    snapshots: watch::Receiver<CarouselSnapshot>,
}

impl RuntimeHandle {
    /// Queue a command. Returns false once the runtime has stopped.
    pub async fn send(&self, command: CarouselCommand) -> bool {
        self.commands.send(command).await.is_ok()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshots.clone()
    }
}

pub struct CarouselRuntime {
    carousel: DualCarousel,
    provider: Arc<dyn SlideProvider>,
    status: LoadStatus,
    commands: mpsc::Receiver<CarouselCommand>,
    snapshots: watch::Sender<CarouselSnapshot>,
    fetch_tx: mpsc::Sender<Result<Vec<Slide>, ProviderError>>,
    fetch_rx: mpsc::Receiver<Result<Vec<Slide>, ProviderError>>,
    fetch_task: Option<JoinHandle<()>>,
    shutdown: ShutdownHandle,
}

impl CarouselRuntime {
    pub fn new(
        provider: Arc<dyn SlideProvider>,
        timing: Timing,
        autoplay: bool,
        shutdown: ShutdownHandle,
    ) -> (Self, RuntimeHandle) {
        let carousel = DualCarousel::new(timing, autoplay);
        let status = LoadStatus::Loading;
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(snapshot_of(&carousel, &status));
        let (fetch_tx, fetch_rx) = mpsc::channel(1);

        let runtime = Self {
            carousel,
            provider,
            status,
            commands: command_rx,
            snapshots: snapshot_tx,
            fetch_tx,
            fetch_rx,
            fetch_task: None,
            shutdown,
        };
        let handle = RuntimeHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        (runtime, handle)
    }

    /// Run until shutdown is signalled, a `Shutdown` command arrives or
    /// every handle is dropped. Unmounts the carousel on the way out.
    pub async fn run(mut self) {
        self.start_fetch();

        loop {
            let deadline = self.carousel.next_deadline();
            tokio::select! {
                _ = self.shutdown.wait() => break,
                command = self.commands.recv() => match command {
                    None | Some(CarouselCommand::Shutdown) => break,
                    Some(command) => self.apply(command),
                },
                Some(result) = self.fetch_rx.recv() => self.on_fetched(result),
                _ = sleep_until(deadline) => {
                    self.carousel.fire_due(now());
                }
            }
            self.publish();
        }

        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        self.carousel.unmount();
        tracing::debug!("carousel runtime stopped");
    }

    fn apply(&mut self, command: CarouselCommand) {
        let now = now();
        match command {
            CarouselCommand::Navigate { side, request } => match request {
                NavRequest::Next => self.carousel.go_next(side, now),
                NavRequest::Prev => self.carousel.go_previous(side, now),
                NavRequest::GoTo(index) => self.carousel.go_to(side, index, now),
            },
            CarouselCommand::SetAutoplay { side, enabled } => {
                self.carousel.set_autoplay(side, enabled, now)
            }
            CarouselCommand::Reload => self.start_fetch(),
            CarouselCommand::Shutdown => {}
        }
    }

    fn start_fetch(&mut self) {
        if self
            .fetch_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
        {
            tracing::debug!("slide fetch already in flight");
            return;
        }
        self.status = LoadStatus::Loading;
        let provider = Arc::clone(&self.provider);
        let tx = self.fetch_tx.clone();
        tracing::debug!(provider = provider.name(), "fetching slides");
        self.fetch_task = Some(tokio::spawn(async move {
            let result = provider.fetch().await;
            let _ = tx.send(result).await;
        }));
    }

    fn on_fetched(&mut self, result: Result<Vec<Slide>, ProviderError>) {
        self.fetch_task = None;
        match result {
            Ok(slides) => {
                self.carousel.load(slides, now());
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                tracing::warn!(provider = self.provider.name(), error = %err, "slide fetch failed");
                self.status = LoadStatus::Failed {
                    message: err.user_message().to_string(),
                    details: err.to_string(),
                };
            }
        }
    }

    fn publish(&self) {
        let next = snapshot_of(&self.carousel, &self.status);
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

fn snapshot_of(carousel: &DualCarousel, status: &LoadStatus) -> CarouselSnapshot {
    CarouselSnapshot {
        left: carousel.view(Side::Left),
        right: carousel.view(Side::Right),
        status: status.clone(),
    }
}

/// Current instant on tokio's clock, so paused test time drives the carousel.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}
