//! Mood commands: decay, inject, refresh, baseline.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use tokio::io::AsyncReadExt;

use padmood_core::mood::MoodPromptGenerator;
use padmood_types::mood::{MoodState, BASELINE};

use crate::cli::OutputMode;
use crate::state::AppState;

/// Load a mood state from inline JSON, a JSON file, or stdin (`-`).
pub async fn read_state(raw: &str) -> Result<MoodState> {
    let content = if raw == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read mood state from stdin")?;
        buf
    } else if raw.trim_start().starts_with('{') {
        raw.to_string()
    } else {
        let path = Path::new(raw);
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read mood state from {}", path.display()))?
    };

    serde_json::from_str(&content).context("invalid mood state JSON")
}

/// Decay the input state to `at` (or now) and print the result.
pub async fn decay(
    state: &AppState,
    raw: &str,
    at: Option<DateTime<Utc>>,
    output: OutputMode,
) -> Result<()> {
    let last = read_state(raw).await?;
    let next = apply(state, &last, at);

    match output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&next)?),
        OutputMode::Styled => print_state("Decayed mood", &next),
        OutputMode::Quiet => {}
    }
    Ok(())
}

/// Print the injection text for the input state, unchanged.
pub async fn inject(raw: &str, output: OutputMode) -> Result<()> {
    let mood = read_state(raw).await?;
    print_injection(&mood, output)
}

/// Decay the input state, then print the injection text for the new state.
pub async fn refresh(
    state: &AppState,
    raw: &str,
    at: Option<DateTime<Utc>>,
    output: OutputMode,
) -> Result<()> {
    let last = read_state(raw).await?;
    let next = apply(state, &last, at);
    print_injection(&next, output)
}

/// Print the process-wide baseline.
pub fn baseline(output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&*BASELINE)?),
        OutputMode::Styled => print_state("Baseline mood", &BASELINE),
        OutputMode::Quiet => {}
    }
    Ok(())
}

fn print_injection(mood: &MoodState, output: OutputMode) -> Result<()> {
    let text = MoodPromptGenerator::generate_injection_text(mood);
    match output {
        OutputMode::Json => {
            let out = serde_json::json!({
                "state": mood,
                "implication": MoodPromptGenerator::behavioral_implication(mood),
                "text": text,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputMode::Styled => println!("{text}"),
        OutputMode::Quiet => {}
    }
    Ok(())
}

fn apply(state: &AppState, last: &MoodState, at: Option<DateTime<Utc>>) -> MoodState {
    let now = at.unwrap_or_else(Utc::now);
    let _span = tracing::info_span!(
        "apply_decay",
        from = %last.timestamp(),
        to = %now,
        source = last.source()
    )
    .entered();

    let next = state.engine.apply_decay(last, now);
    tracing::info!(
        valence = next.valence(),
        arousal = next.arousal(),
        dominance = next.dominance(),
        "mood decayed"
    );
    next
}

fn print_state(title: &str, mood: &MoodState) {
    println!();
    println!("  {} {}", style("◐").bold(), style(title).cyan());
    println!();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Dimension", "Value", "Baseline"]);

    for (name, value, base) in [
        ("Valence", mood.valence(), BASELINE.valence()),
        ("Arousal", mood.arousal(), BASELINE.arousal()),
        ("Dominance", mood.dominance(), BASELINE.dominance()),
    ] {
        let color = if value > base {
            Color::Green
        } else if value < base {
            Color::Red
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{value:+.4}")).fg(color),
            Cell::new(format!("{base:+.2}")),
        ]);
    }

    println!("{table}");
    println!(
        "  {} {}",
        style("Timestamp:").dim(),
        mood.timestamp().to_rfc3339()
    );
    println!("  {} {}", style("Source:").dim(), mood.source());
    println!(
        "  {} {}",
        style("Implication:").dim(),
        MoodPromptGenerator::behavioral_implication(mood)
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    const STATE_JSON: &str = r#"{
        "valence": 1.0,
        "arousal": 0.0,
        "dominance": 0.5,
        "timestamp": "2025-03-01T12:00:00Z",
        "source": "user"
    }"#;

    #[tokio::test]
    async fn read_state_inline_json() {
        let state = read_state(STATE_JSON).await.unwrap();
        assert_eq!(state.valence(), 1.0);
        assert_eq!(state.source(), "user");
    }

    #[tokio::test]
    async fn read_state_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mood.json");
        tokio::fs::write(&path, STATE_JSON).await.unwrap();

        let state = read_state(path.to_str().unwrap()).await.unwrap();
        assert_eq!(state.dominance(), 0.5);
    }

    #[tokio::test]
    async fn read_state_rejects_bad_json() {
        let err = read_state("{ \"valence\": 1.0 }").await.unwrap_err();
        assert!(err.to_string().contains("invalid mood state JSON"));
    }

    #[tokio::test]
    async fn read_state_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = read_state(missing.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("failed to read mood state"));
    }

    #[tokio::test]
    async fn apply_uses_explicit_timestamp() {
        let dir = tempdir().unwrap();
        let state = AppState::init(Some(dir.path().to_path_buf())).await;
        let last = read_state(STATE_JSON).await.unwrap();
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();

        let next = apply(&state, &last, Some(at));

        assert_eq!(next.timestamp(), at);
        assert!((next.valence() - 0.35).abs() < 1e-9);
    }
}
