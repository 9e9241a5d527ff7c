use clap::Args;
use learnmate_core::{recommend, Emotion};

#[derive(Args)]
pub struct RecommendArgs {
    /// Current emotion: happy, focused, confused, bored, excited or
    /// tired. Anything else falls back to the base activities.
    pub emotion: String,
    /// Print the activity list as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let emotion = Emotion::parse(&args.emotion);
    let activities = recommend(emotion);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&activities)?);
        return Ok(());
    }

    println!(
        "Recommended activities for {} {}:",
        emotion.emoji(),
        emotion.as_str()
    );
    for activity in &activities {
        println!(
            "  {:<22} [{}] {} pts, {}",
            activity.title, activity.tag, activity.points, activity.duration
        );
        println!("      {}", activity.description);
    }
    Ok(())
}
