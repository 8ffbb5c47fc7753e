//! # Filltext CLI
//!
//! Runs one generator session from the command line.
//!
//! Usage: `filltext --shape list --category health --language ar --length 3`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use filltext_core::{
    Category, ContentGenerator, ControlEvent, Direction, FillConfig, GeneratedContent, Language,
    Notice, NoticeLevel, RetryTimer, SamplePool, Scene, Session, Shape,
};

/// Command-line arguments for filltext.
#[derive(Debug, Clone, Parser)]
#[command(name = "filltext")]
#[command(about = "Placeholder text generator for canvas designs")]
#[command(version)]
pub struct CliArgs {
    /// Text shape: heading, paragraph or list
    #[arg(long, env = "FILLTEXT_SHAPE", default_value = "paragraph")]
    pub shape: Shape,

    /// Content category
    #[arg(long, env = "FILLTEXT_CATEGORY", default_value = "technology")]
    pub category: Category,

    /// Language code (en, ar)
    #[arg(long, env = "FILLTEXT_LANGUAGE", default_value = "en")]
    pub language: Language,

    /// Words, sentences or items; defaults to the shape default
    #[arg(long)]
    pub length: Option<usize>,

    /// Seed for reproducible output
    #[arg(long, env = "FILLTEXT_SEED")]
    pub seed: Option<u64>,

    /// Force a text direction (ltr, rtl)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// JSON configuration file
    #[arg(long, env = "FILLTEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Commit the text to an in-memory scene and print the scene
    #[arg(long)]
    pub commit: bool,

    /// Print the generated content as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    /// Final content after validation settled.
    pub content: GeneratedContent,
    /// Notices raised during the run.
    pub notices: Vec<Notice>,
    /// Scene JSON when `--commit` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

/// Load configuration from `path`, or defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<FillConfig> {
    let Some(path) = path else {
        return Ok(FillConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = FillConfig::from_json(&json)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Generate text for `args`, waiting for list validation to settle.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or generation fails.
pub async fn run(args: &CliArgs) -> anyhow::Result<RunOutput> {
    let config = load_config(args.config.as_deref())?;
    let pool = SamplePool::builtin();
    let mut generator = match args.seed {
        Some(seed) => ContentGenerator::seeded(pool, seed),
        None => ContentGenerator::new(pool),
    };
    generator.set_config(config.generator.clone());
    let (timer, mut tickets) = RetryTimer::new();
    let mut session = Session::new(generator, timer, config);

    let mut events = vec![
        ControlEvent::SetLanguage(args.language),
        ControlEvent::SetCategory(args.category),
        ControlEvent::SetShape(args.shape),
    ];
    if let Some(length) = args.length {
        events.push(ControlEvent::SetLength(length));
    }
    if args.direction.is_some() {
        events.push(ControlEvent::SetDirection(args.direction));
    }

    let mut notices = Vec::new();
    for event in events {
        notices.extend(session.process_event(event)?);
    }
    notices.extend(session.settle(&mut tickets).await?);

    let content = session
        .content()
        .cloned()
        .context("Session produced no content")?;

    let scene = if args.commit {
        let mut scene = Scene::new();
        notices.extend(session.add_to_canvas(&mut scene)?);
        Some(scene.to_json()?)
    } else {
        None
    };

    for notice in &notices {
        match notice.level() {
            NoticeLevel::Info => tracing::info!(%notice, "Notice"),
            NoticeLevel::Warning => tracing::warn!(%notice, "Notice"),
            NoticeLevel::Error => tracing::error!(%notice, "Notice"),
        }
    }

    Ok(RunOutput {
        content,
        notices,
        scene,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use filltext_core::count::count_list_items;
    use std::io::Write;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["filltext"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.shape, Shape::Paragraph);
        assert_eq!(args.category, Category::Technology);
        assert_eq!(args.language, Language::English);
        assert!(args.length.is_none());
        assert!(!args.commit);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"layout": {{"max_width": 400.0}}}}"#).expect("write");

        let config = load_config(Some(file.path())).expect("config");
        assert!((config.layout.max_width - 400.0).abs() < f32::EPSILON);
        assert_eq!(config.validation.max_attempts, 3);
    }

    #[test]
    fn test_load_config_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        let err = load_config(Some(file.path())).expect_err("should fail");
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.json");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_arabic_list_with_commit() {
        let args = args(&[
            "--shape",
            "list",
            "--category",
            "health",
            "--language",
            "ar",
            "--length",
            "3",
            "--seed",
            "4",
            "--commit",
        ]);
        let output = run(&args).await.expect("run");

        assert_eq!(count_list_items(&output.content.text), 3);
        assert_eq!(output.content.direction, Direction::Rtl);
        assert!(output.notices.contains(&Notice::Committed { nodes: 1 }));
        let scene = Scene::from_json(output.scene.as_deref().expect("scene")).expect("scene json");
        assert_eq!(scene.node_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_direction_override() {
        let args = args(&["--shape", "heading", "--direction", "rtl", "--seed", "1"]);
        let output = run(&args).await.expect("run");
        assert_eq!(output.content.direction, Direction::Rtl);
        assert!(output.scene.is_none());
    }
}
