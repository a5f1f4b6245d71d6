//! Learning paths and coach questions from the command line.

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};

use poker_coach::learn::{Catalog, CoachClient, CoachConfig, PathSelector, SkillLevel};

#[derive(Parser, Debug)]
#[command(name = "learn", about = "Browse learning paths and ask the coach")]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List the paths for a skill level
    Paths {
        #[arg(long, default_value = "beginner", value_parser = parse_level)]
        level: SkillLevel,
    },
    /// Start a learning path
    Start { path_id: String },
    /// Show one lesson of a path
    Lesson { path_id: String, index: usize },
    /// Ask the coach a question
    Ask {
        question: Vec<String>,
        #[arg(long, default_value = "beginner", value_parser = parse_level)]
        level: SkillLevel,
        /// Base URL of the coach service
        #[arg(long)]
        url: Option<String>,
    },
}

fn parse_level(s: &str) -> Result<SkillLevel, String> {
    SkillLevel::parse(s).ok_or_else(|| format!("unknown skill level '{}'", s))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let catalog = Catalog::standard();

    match args.command {
        Cmd::Paths { level } => {
            let mut selector = PathSelector::new(catalog);
            selector.select_level(level);
            println!("{} paths:", level);
            for path in selector.visible_paths() {
                println!("  {:<14} {} ({} lessons)", path.id, path.name, path.lessons.len());
                if let Some(description) = path.description {
                    println!("  {:<14} {}", "", description);
                }
            }
        }
        Cmd::Start { path_id } => {
            let selector = PathSelector::new(catalog);
            let nav = selector
                .start_path(&path_id)
                .ok_or_else(|| anyhow!("no path id given"))?;
            println!("{}", nav.url);
        }
        Cmd::Lesson { path_id, index } => {
            let Some(lesson) = catalog.lesson(&path_id, index) else {
                bail!("no lesson {} in path '{}'", index, path_id);
            };
            println!("{}", lesson.title);
            if let Some(description) = lesson.description {
                println!("{}", description);
            }
            println!("\n{}", lesson.content);
        }
        Cmd::Ask { question, level, url } => {
            let mut config = CoachConfig::default();
            if let Some(url) = url {
                config = config.with_base_url(url);
            }
            let client = CoachClient::new(&config);
            match client.ask(&question.join(" "), level).await {
                Ok(advice) => println!("{}", advice),
                Err(prompt) => println!("{}", prompt),
            }
        }
    }
    Ok(())
}
