
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};
use crossbeam::atomic::AtomicCell;
use crossbeam::channel::{bounded, Receiver, Sender, TrySendError};
use log::info;
use crate::Solution;

/// Hooks called by the optimizer around every iteration.
///
/// Observers only receive shared views of the engine state, so they cannot
/// change the course of a run.
pub trait IterationObserver<S: Solution> {
    /// Called before the sweep of iteration `iteration`.
    fn on_iteration_start(&mut self, _iteration: usize) {}

    /// Called after the sweep with the incremented iteration counter and the
    /// global best of every weight vector.
    fn on_iteration_end(&mut self, _iteration: usize, _global_best: &[S]) {}

    /// Called every time the stopping condition is evaluated.
    fn on_termination_check(&mut self, _iteration: usize, _stop: bool) {}
}

impl<S: Solution, O: IterationObserver<S> + ?Sized> IterationObserver<S> for &mut O {
    fn on_iteration_start(&mut self, iteration: usize) {
        (**self).on_iteration_start(iteration)
    }

    fn on_iteration_end(&mut self, iteration: usize, global_best: &[S]) {
        (**self).on_iteration_end(iteration, global_best)
    }

    fn on_termination_check(&mut self, iteration: usize, stop: bool) {
        (**self).on_termination_check(iteration, stop)
    }
}

/// What subscribers receive after every iteration.
#[derive(Debug, Clone)]
pub struct IterationSnapshot<S> {
    pub iteration: usize,
    pub global_best: Vec<S>,
    /// Name and value of every registered indicator, in registration order.
    pub indicators: Vec<(String, f64)>,
    pub elapsed: Duration,
}

/// Scalar computed from the global best list, e.g. a quality indicator.
pub type Indicator<S> = Box<dyn Fn(&[S]) -> f64 + Send>;

/// Pull side of the measures: cheap to clone and safe to poll from another
/// thread while the optimizer runs.
#[derive(Debug, Clone, Default)]
pub struct MeasureHandle {
    iteration: Arc<AtomicCell<usize>>,
    started: Arc<AtomicCell<Option<Instant>>>,
    finished: Arc<AtomicCell<Option<Duration>>>,
}

impl MeasureHandle {
    pub fn current_iteration(&self) -> usize {
        self.iteration.load()
    }

    /// Time since the first termination check, frozen once the run stopped.
    pub fn current_execution_time(&self) -> Duration {
        match (self.finished.load(), self.started.load())
        {
            (Some(total), _) => total,
            (None, Some(start)) => start.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load().is_some()
    }

    fn start(&self) {
        if self.started.load().is_none()
        {
            self.started.store(Some(Instant::now()));
        }
    }

    fn finish(&self) {
        let total = self.started.load().map(|start| start.elapsed()).unwrap_or_default();
        self.finished.store(Some(total));
    }
}

/// Publishes the iteration count, the global best and indicator values after
/// every iteration.
///
/// Delivery never blocks: a subscriber whose channel is full misses the
/// snapshot, a subscriber that dropped its receiver is removed.
pub struct MeasuresObserver<S: Solution> {
    subscribers: Vec<Sender<IterationSnapshot<S>>>,
    indicators: Vec<(String, Indicator<S>)>,
    handle: MeasureHandle,
}

impl<S: Solution> MeasuresObserver<S> {
    pub fn new() -> Self {
        MeasuresObserver {
            subscribers: vec![],
            indicators: vec![],
            handle: MeasureHandle::default(),
        }
    }

    /// Compute `indicator` on the global best list of every published snapshot.
    pub fn with_indicator(mut self, name: impl Into<String>, indicator: impl Fn(&[S]) -> f64 + Send + 'static) -> Self {
        self.indicators.push((name.into(), Box::new(indicator)));
        self
    }

    /// Open a new channel holding at most `capacity` undelivered snapshots.
    pub fn subscribe(&mut self, capacity: usize) -> Receiver<IterationSnapshot<S>> {
        let (tx, rx) = bounded(capacity);
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn handle(&self) -> MeasureHandle {
        self.handle.clone()
    }

    fn publish(&mut self, iteration: usize, global_best: &[S]) {
        let snapshot = IterationSnapshot {
            iteration,
            global_best: global_best.to_vec(),
            indicators: self
                .indicators
                .iter()
                .map(|(name, indicator)| (name.clone(), indicator(global_best)))
                .collect(),
            elapsed: self.handle.current_execution_time(),
        };

        self.subscribers.retain(|tx| match tx.try_send(snapshot.clone())
        {
            Ok(()) | Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}

impl<S: Solution> Default for MeasuresObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solution> Debug for MeasuresObserver<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasuresObserver")
            .field("subscribers", &self.subscribers.len())
            .field("indicators", &self.indicators.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .field("handle", &self.handle)
            .finish()
    }
}

impl<S: Solution> IterationObserver<S> for MeasuresObserver<S> {
    fn on_iteration_end(&mut self, iteration: usize, global_best: &[S]) {
        self.handle.iteration.store(iteration);

        if !self.subscribers.is_empty()
        {
            self.publish(iteration, global_best);
        }
    }

    fn on_termination_check(&mut self, iteration: usize, stop: bool) {
        self.handle.start();
        self.handle.iteration.store(iteration);

        if stop
        {
            self.handle.finish();
        }
    }
}

/// Logs the progress of a run every `every` iterations.
#[derive(Debug, Clone)]
pub struct LogObserver {
    every: usize,
    started: Option<Instant>,
}

impl LogObserver {
    /// `every` is raised to 1 if zero.
    pub fn new(every: usize) -> Self {
        LogObserver {
            every: every.max(1),
            started: None,
        }
    }
}

impl<S: Solution> IterationObserver<S> for LogObserver {
    fn on_iteration_end(&mut self, iteration: usize, global_best: &[S]) {
        if iteration % self.every == 0
        {
            info!(
                "Iteration {} done, {} global bests, {:?} elapsed",
                iteration,
                global_best.len(),
                self.started.map(|start| start.elapsed()).unwrap_or_default()
            );
        }
    }

    fn on_termination_check(&mut self, iteration: usize, stop: bool) {
        if self.started.is_none()
        {
            self.started = Some(Instant::now());
        }

        if stop
        {
            info!("Stopping at iteration {}", iteration);
        }
    }
}
