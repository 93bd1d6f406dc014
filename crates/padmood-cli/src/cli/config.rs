//! Effective configuration display.

use anyhow::Result;
use console::style;

use padmood_infra::config::ConfigOrigin;
use padmood_infra::filesystem::config_path;
use padmood_types::config::MoodConfig;

use crate::cli::OutputMode;
use crate::state::AppState;

/// Show the decay configuration the engine runs with, and where it came from.
pub fn show_config(state: &AppState, output: OutputMode) -> Result<()> {
    if output == OutputMode::Quiet {
        return Ok(());
    }

    let decay = state.engine.config();
    let origin = match &state.config_origin {
        ConfigOrigin::Defaults => "defaults".to_string(),
        ConfigOrigin::File(path) => path.display().to_string(),
    };

    if output == OutputMode::Json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "config_path": config_path(&state.data_dir).display().to_string(),
            "origin": origin,
            "mood": MoodConfig::from(decay),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} padmood v{}",
        style("◐").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {}", style("── Decay ──").dim());
    println!(
        "  Half-life: {}s",
        style(decay.half_life()).bold()
    );
    println!("  Inertia:   {}", style(decay.inertia()).bold());
    println!();
    println!("  {}", style("── Source ──").dim());
    println!("  Config:    {origin}");
    println!(
        "  Data dir:  {}",
        style(state.data_dir.display()).dim()
    );
    println!();

    Ok(())
}
