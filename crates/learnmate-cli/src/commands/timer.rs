use std::io::Write;

use clap::Subcommand;
use learnmate_core::{Config, Event, TimerMode, TimerSession};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a live timer session in the terminal
    Run {
        /// Stop after this many completed focus sessions
        #[arg(long, default_value = "1")]
        sessions: u32,
        /// Override the focus duration in seconds
        #[arg(long)]
        focus_secs: Option<u32>,
        /// Override the short break duration in seconds
        #[arg(long)]
        short_break_secs: Option<u32>,
        /// Override the long break duration in seconds
        #[arg(long)]
        long_break_secs: Option<u32>,
        /// Stream snapshots and events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// List the timer modes and their configured durations
    Modes,
}

fn clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    match action {
        TimerAction::Run {
            sessions,
            focus_secs,
            short_break_secs,
            long_break_secs,
            json,
        } => {
            let mut durations = config.timer.durations();
            if let Some(secs) = focus_secs {
                durations.focus_secs = secs;
            }
            if let Some(secs) = short_break_secs {
                durations.short_break_secs = secs;
            }
            if let Some(secs) = long_break_secs {
                durations.long_break_secs = secs;
            }
            let notify = config.notifications.enabled;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_session(durations, sessions, notify, json))
        }
        TimerAction::Modes => {
            let durations = config.timer.durations();
            for mode in TimerMode::ALL {
                println!("{:<12} {}", mode.label(), clock(durations.for_mode(mode)));
            }
            Ok(())
        }
    }
}

async fn run_session(
    durations: learnmate_core::Durations,
    target_sessions: u32,
    notify: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (session, mut events) = TimerSession::spawn(durations);
    let mut snapshots = session.snapshots();

    log::info!("starting timer session, target: {target_sessions} focus session(s)");
    session.start();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = snapshots.borrow().clone();
                if json {
                    println!("{}", serde_json::to_string(&snap)?);
                } else {
                    print!("\r{:<12} {}   ", snap.mode.label(), snap.clock);
                    std::io::stdout().flush()?;
                }
            }
            event = events.recv() => {
                let Some(event) = event else { break };
                if json {
                    println!("{}", serde_json::to_string(&event)?);
                }
                if let Event::TimerCompleted { finished, next, completed_focus_sessions, .. } = event {
                    if !json {
                        let bell = if notify { "\u{7}" } else { "" };
                        println!("\n{}{} complete! Next up: {}.", bell, finished.label(), next.label());
                        if finished == TimerMode::Focus {
                            println!("Sessions completed: {completed_focus_sessions}");
                        }
                        println!("{}", next.tip());
                    }
                    if finished == TimerMode::Focus && completed_focus_sessions >= target_sessions {
                        break;
                    }
                    // The engine leaves the next interval paused at full
                    // duration; in an unattended terminal run we advance
                    // through it automatically.
                    session.start();
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if !json {
                    println!();
                }
                break;
            }
        }
    }

    session.shutdown();
    Ok(())
}
