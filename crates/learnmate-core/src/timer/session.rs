//! Live timer session: a cancellable 1 Hz tick source around one
//! [`FocusTimer`].
//!
//! The engine runs inside a single Tokio task. Commands and ticks are
//! serialized through one `select!` loop, so a manual transition can
//! never race a pending tick -- pausing disables the tick branch before
//! the next tick is polled, and starting resets the interval so the
//! first tick lands a full second later.
//!
//! State flows out through two channels: a `watch` snapshot (live
//! display) and an unbounded mpsc of [`Event`]s (completion and
//! transition notifications, fire-and-forget). Dropping the
//! [`TimerSession`] handle tears the task down.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};

use crate::events::Event;

use super::{Durations, FocusTimer, TimerMode, TimerSnapshot};

#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Pause,
    Reset,
    SwitchMode(TimerMode),
    Shutdown,
}

/// Handle to a running timer session.
///
/// Commands are fire-and-forget; observe their effect through
/// [`TimerSession::snapshots`] and the event receiver returned by
/// [`TimerSession::spawn`].
#[derive(Debug, Clone)]
pub struct TimerSession {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<TimerSnapshot>,
}

impl TimerSession {
    /// Spawn a session task for a fresh timer with the given durations.
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn(durations: Durations) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let timer = FocusTimer::new(durations);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(timer.snapshot());
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        tokio::spawn(session_loop(timer, command_rx, snapshot_tx, event_tx));
        (
            Self {
                commands: command_tx,
                snapshots: snapshot_rx,
            },
            event_rx,
        )
    }

    pub fn start(&self) {
        let _ = self.commands.send(Command::Start);
    }

    pub fn pause(&self) {
        let _ = self.commands.send(Command::Pause);
    }

    pub fn reset(&self) {
        let _ = self.commands.send(Command::Reset);
    }

    pub fn switch_mode(&self, mode: TimerMode) {
        let _ = self.commands.send(Command::SwitchMode(mode));
    }

    /// Stop the session task. Equivalent to dropping every handle.
    pub fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown);
    }

    /// Subscribe to live state snapshots.
    pub fn snapshots(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshots.borrow().clone()
    }
}

async fn session_loop(
    mut timer: FocusTimer,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<TimerSnapshot>,
    events: mpsc::UnboundedSender<Event>,
) {
    let mut ticker = interval(Duration::from_secs(1));
    // A late tick must not be followed by a burst of catch-up ticks.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                log::debug!("timer session command: {command:?}");
                let event = match command {
                    Command::Start => {
                        let event = timer.start();
                        if event.is_some() {
                            // First tick a full second after starting.
                            ticker.reset();
                        }
                        event
                    }
                    Command::Pause => timer.pause(),
                    Command::Reset => timer.reset(),
                    Command::SwitchMode(mode) => timer.switch_mode(mode),
                    Command::Shutdown => break,
                };
                if let Some(event) = event {
                    let _ = events.send(event);
                }
                let _ = snapshots.send(timer.snapshot());
            }
            _ = ticker.tick(), if timer.is_running() => {
                if let Some(event) = timer.tick() {
                    if let Event::TimerCompleted { finished, next, .. } = &event {
                        log::info!("{} interval complete, next: {}", finished.label(), next.label());
                    }
                    let _ = events.send(event);
                }
                let _ = snapshots.send(timer.snapshot());
            }
        }
    }
    log::debug!("timer session closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> Durations {
        Durations {
            focus_secs: 2,
            short_break_secs: 1,
            long_break_secs: 1,
        }
    }

    async fn next_snapshot(rx: &mut watch::Receiver<TimerSnapshot>) -> TimerSnapshot {
        rx.changed().await.expect("session alive");
        rx.borrow().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_advance_a_running_timer() {
        let (session, _events) = TimerSession::spawn(Durations::default());
        let mut rx = session.snapshots();

        session.start();
        let snap = next_snapshot(&mut rx).await;
        assert!(snap.is_running);
        assert_eq!(snap.seconds_remaining, 1500);

        tokio::time::advance(Duration::from_secs(1)).await;
        let snap = next_snapshot(&mut rx).await;
        assert_eq!(snap.seconds_remaining, 1499);

        tokio::time::advance(Duration::from_secs(1)).await;
        let snap = next_snapshot(&mut rx).await;
        assert_eq!(snap.seconds_remaining, 1498);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_the_pending_tick() {
        let (session, _events) = TimerSession::spawn(Durations::default());
        let mut rx = session.snapshots();

        session.start();
        next_snapshot(&mut rx).await;

        // Half a second in, the first tick is still pending.
        tokio::time::advance(Duration::from_millis(500)).await;
        session.pause();
        let snap = next_snapshot(&mut rx).await;
        assert!(!snap.is_running);

        // The stale tick must not fire after the pause.
        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(session.snapshot().seconds_remaining, 1500);
    }

    #[tokio::test(start_paused = true)]
    async fn switch_mode_cancels_the_pending_tick() {
        let (session, _events) = TimerSession::spawn(Durations::default());
        let mut rx = session.snapshots();

        session.start();
        next_snapshot(&mut rx).await;

        tokio::time::advance(Duration::from_millis(900)).await;
        session.switch_mode(TimerMode::LongBreak);
        let snap = next_snapshot(&mut rx).await;
        assert_eq!(snap.mode, TimerMode::LongBreak);
        assert_eq!(snap.seconds_remaining, 900);
        assert!(!snap.is_running);

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(session.snapshot().seconds_remaining, 900);
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_does_not_reset_progress() {
        let (session, _events) = TimerSession::spawn(Durations::default());
        let mut rx = session.snapshots();

        session.start();
        next_snapshot(&mut rx).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        next_snapshot(&mut rx).await;

        // Second start is a guarded no-op; a snapshot is still published.
        session.start();
        let snap = next_snapshot(&mut rx).await;
        assert_eq!(snap.seconds_remaining, 1499);
        assert!(snap.is_running);
    }

    #[tokio::test(start_paused = true)]
    async fn completion_emits_an_event_and_pauses_at_the_next_mode() {
        let (session, mut events) = TimerSession::spawn(short());
        let mut rx = session.snapshots();

        session.start();
        next_snapshot(&mut rx).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        next_snapshot(&mut rx).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        let snap = next_snapshot(&mut rx).await;

        assert_eq!(snap.mode, TimerMode::ShortBreak);
        assert_eq!(snap.seconds_remaining, 1);
        assert!(!snap.is_running);
        assert_eq!(snap.completed_focus_sessions, 1);

        let mut saw_completion = false;
        while let Ok(event) = events.try_recv() {
            if let Event::TimerCompleted {
                finished,
                next,
                completed_focus_sessions,
                ..
            } = event
            {
                assert_eq!(finished, TimerMode::Focus);
                assert_eq!(next, TimerMode::ShortBreak);
                assert_eq!(completed_focus_sessions, 1);
                saw_completion = true;
            }
        }
        assert!(saw_completion, "completion event should have been emitted");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let (session, mut events) = TimerSession::spawn(short());
        session.start();
        drop(session);
        // Once the command channel closes the loop exits and the event
        // sender is dropped with it.
        while events.recv().await.is_some() {}
    }
}
