//! Neon Breakout headless demo
//!
//! Drives a session with the autopilot at simulated 60 fps and logs what
//! happens.

use std::path::PathBuf;

use clap::Parser;
use neon_breakout::audio::{CueLog, SoundCue};
use neon_breakout::hud::HudState;
use neon_breakout::input::Autopilot;
use neon_breakout::renderer::Tessellator;
use neon_breakout::sim::{GamePhase, Outputs};
use neon_breakout::{GameLoop, QualityPreset, Settings};

/// Simulated frame interval (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "neon-breakout")]
#[command(about = "Play Neon Breakout headlessly with the autopilot")]
struct Cli {
    /// Settings JSON file (defaults are used if it can't be read)
    settings: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(default_value_t = 3600)]
    frames: u64,
    /// Override the settings seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the quality preset (low, medium, high)
    #[arg(long)]
    quality: Option<QualityPreset>,
    /// Drop sound cues instead of recording them
    #[arg(long)]
    mute: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("Using default settings ({})", e);
            Settings::default()
        }),
        None => Settings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(quality) = cli.quality {
        settings.quality = quality;
    }

    log::info!(
        "Neon Breakout demo starting ({} frames, seed {}, {} quality)",
        cli.frames,
        settings.seed,
        settings.quality
    );

    let mut audio = CueLog::new();
    audio.set_muted(cli.mute);
    let mut hud = HudState::default();
    let mut pilot = Autopilot::new();
    let mut surface = Tessellator::new(settings.quality.circle_segments());
    let mut game = GameLoop::new(settings, &mut hud);

    let mut runs = 0u32;
    let mut best = 0u32;
    let mut last_phase = game.session.phase;

    for i in 0..cli.frames {
        pilot.observe(&game.session);
        let timestamp = i as f64 * FRAME_MS;
        game.frame(
            timestamp,
            &mut pilot,
            &mut Outputs::new(&mut audio, &mut hud),
            &mut surface,
        );

        let phase = game.session.phase;
        if phase != last_phase {
            log::debug!("Frame {}: {} -> {}", i, last_phase.as_str(), phase.as_str());
            match phase {
                GamePhase::Playing => runs += 1,
                GamePhase::GameOver | GamePhase::Win => best = best.max(game.session.score),
                GamePhase::Start => {}
            }
            last_phase = phase;
        }
    }

    log::info!(
        "Played {} runs over {} frames, best score {}, last frame {} triangles",
        runs,
        game.frames(),
        best.max(game.session.score),
        surface.triangle_count()
    );
    log::info!(
        "Cues: {} paddle, {} brick, {} wall, {} lost",
        audio.count(SoundCue::PaddleBounce),
        audio.count(SoundCue::BrickBreak),
        audio.count(SoundCue::WallBounce),
        audio.count(SoundCue::BallLost)
    );

    match serde_json::to_string_pretty(&game.session.snapshot()) {
        Ok(json) => log::info!("Final state:\n{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["neon-breakout"]).unwrap();
        assert_eq!(cli.settings, None);
        assert_eq!(cli.frames, 3600);
        assert!(!cli.mute);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "neon-breakout",
            "settings.json",
            "120",
            "--seed",
            "9",
            "--quality",
            "HIGH",
        ])
        .unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("settings.json")));
        assert_eq!(cli.frames, 120);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.quality, Some(QualityPreset::High));
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["neon-breakout", "settings.json", "lots"]).is_err());
        assert!(Cli::try_parse_from(["neon-breakout", "--quality", "ultra"]).is_err());
    }
}
