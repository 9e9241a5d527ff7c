use std::time::Duration;

use chrono::Utc;
use clap::Args;
use learnmate_core::{recommend, Config, EmotionDetector, Event, SimulatedDetector};

#[derive(Args)]
pub struct DetectArgs {
    /// Seed the simulated detector for a reproducible reading
    #[arg(long)]
    pub seed: Option<u64>,
    /// Override the configured inference latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,
    /// Print the detection as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DetectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let latency =
        Duration::from_millis(args.latency_ms.unwrap_or(config.detector.latency_ms));
    let mut detector = match args.seed {
        Some(seed) => SimulatedDetector::with_seed(latency, seed),
        None => SimulatedDetector::new(latency),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    if !args.json {
        println!("Analyzing your emotions...");
    }
    let detection = runtime.block_on(detector.detect());

    if args.json {
        let event = Event::EmotionDetected {
            emotion: detection.emotion,
            confidence: detection.confidence,
            at: Utc::now(),
        };
        println!("{}", serde_json::to_string_pretty(&event)?);
        return Ok(());
    }

    println!(
        "{} {} ({}% confidence)",
        detection.emotion.emoji(),
        detection.emotion.as_str(),
        detection.confidence
    );
    println!("{}", detection.emotion.coaching_tip());
    println!();
    println!("Try one of these:");
    for activity in recommend(detection.emotion) {
        println!("  - {} ({})", activity.title, activity.duration);
    }
    Ok(())
}
