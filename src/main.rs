//! Brick Rally entry point
//!
//! Headless host: runs the round in demo mode at the fixed timestep, routes
//! cues to the audio manager and reports the HUD.
//!
//! Usage: `brick-rally [--tuning FILE] [--settings FILE] [--seed N] [--ticks N]`

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use anyhow::Result;
    use brick_rally::audio::AudioManager;
    use brick_rally::consts::*;
    use brick_rally::renderer::{HUD_ORIGIN, as_bytes, build_frame, hud_lines};
    use brick_rally::sim::{ArcadePhysics, Round, RoundPhase, TickInput, WorldBounds, tick};
    use brick_rally::{Settings, Tuning};
    use clap::Parser;

    /// Headless Brick Rally demo
    #[derive(Debug, Parser)]
    #[command(author, version, about, long_about = None)]
    pub struct Args {
        /// JSON file overriding the gameplay tuning
        #[arg(long, value_name = "FILE")]
        pub tuning: Option<String>,
        /// JSON file with player settings
        #[arg(long, value_name = "FILE")]
        pub settings: Option<String>,
        /// Seed for the round's random source
        #[arg(long, default_value_t = 0x5eed)]
        pub seed: u64,
        /// Number of simulation ticks to run
        #[arg(long, default_value_t = 7200)]
        pub ticks: u64,
    }

    /// Game instance holding all state
    struct Game {
        round: Round,
        physics: ArcadePhysics,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        input: TickInput,
        ball_losses: u32,
        game_overs: u32,
        level_clears: u32,
    }

    impl Game {
        fn new(tuning: Tuning, settings: Settings, seed: u64) -> Self {
            let physics = ArcadePhysics::new(WorldBounds::floor_open(
                tuning.field_width,
                tuning.field_height,
            ));
            let mut audio = AudioManager::default();
            audio.apply_settings(&settings);
            Self {
                round: Round::new(tuning, seed),
                physics,
                audio,
                settings,
                accumulator: 0.0,
                input: TickInput {
                    idle_mode: true,
                    ..Default::default()
                },
                ball_losses: 0,
                game_overs: 0,
                level_clears: 0,
            }
        }

        /// Run simulation ticks for one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let phase = tick(&mut self.round, &mut self.physics, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                match phase {
                    RoundPhase::Playing => {}
                    RoundPhase::BallLost => self.ball_losses += 1,
                    RoundPhase::GameOver => self.game_overs += 1,
                    RoundPhase::LevelClear => self.level_clears += 1,
                }

                // Clear one-shot inputs after processing
                self.input.pointer_up = false;

                self.audio.play_cues(self.round.drain_cues());
            }
        }

        /// Stand-in for drawing: build the frame and report the HUD
        fn render(&self) {
            if let Some(report) = self.frame_report() {
                log::info!("{}", report);
            }
        }

        /// HUD line for this tick, or `None` when the HUD is not due
        fn frame_report(&self) -> Option<String> {
            let ticks = self.round.time_ticks;
            let interval = self.settings.hud_log_interval;
            if !self.settings.show_hud || interval == 0 || ticks % interval != 0 {
                return None;
            }
            let vertices = build_frame(&self.round.snapshot());
            Some(format!(
                "[tick {}] {} at {:?} | {} vertices, {} bytes",
                ticks,
                hud_lines(&self.round.hud()).join(" "),
                HUD_ORIGIN,
                vertices.len(),
                as_bytes(&vertices).len()
            ))
        }
    }

    pub fn run(args: Args) -> Result<()> {
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let settings = args
            .settings
            .as_deref()
            .map(Settings::load)
            .unwrap_or_default();

        let mut game = Game::new(tuning, settings, args.seed);
        let frames = args.ticks;
        for _ in 0..frames {
            game.update(SIM_DT);
            game.render();
        }

        log::info!(
            "Finished {} ticks: {} balls lost, {} game overs, {} levels cleared",
            game.round.time_ticks,
            game.ball_losses,
            game.game_overs,
            game.level_clears
        );
        let hud = serde_json::to_string(&game.round.hud())?;
        println!("{}", hud);
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Result<Args, clap::Error> {
            Args::try_parse_from(std::iter::once("brick-rally").chain(list.iter().copied()))
        }

        #[test]
        fn test_parse_defaults() {
            let parsed = args(&[]).unwrap();
            assert!(parsed.tuning.is_none());
            assert_eq!(parsed.seed, 0x5eed);
            assert_eq!(parsed.ticks, 7200);
        }

        #[test]
        fn test_parse_values() {
            let parsed = args(&["--seed", "9", "--ticks", "10", "--tuning", "t.json"]).unwrap();
            assert_eq!(parsed.seed, 9);
            assert_eq!(parsed.ticks, 10);
            assert_eq!(parsed.tuning.as_deref(), Some("t.json"));
        }

        #[test]
        fn test_parse_errors() {
            assert!(args(&["--ticks"]).is_err());
            assert!(args(&["--seed", "abc"]).is_err());
            assert!(args(&["--bogus"]).is_err());
            assert!(args(&["stray"]).is_err());
        }

        #[test]
        fn test_missing_tuning_file_fails_run() {
            let parsed = args(&["--tuning", "/no/such/dir/tuning.json", "--ticks", "1"]).unwrap();
            assert!(run(parsed).is_err());
        }

        #[test]
        fn test_frame_report_packs_frame() {
            let game = Game::new(Tuning::default(), Settings::default(), 11);
            // 100 bricks + paddle as 6 vertices each, ball as 16 triangles
            let vertices = 101 * 6 + 16 * 3;
            assert_eq!(
                game.frame_report().unwrap(),
                format!(
                    "[tick 0] Level: 1 Lives: 3 Score: 0 at (50.0, 750.0) | {} vertices, {} bytes",
                    vertices,
                    vertices * 24
                )
            );

            let hidden = Game::new(
                Tuning::default(),
                Settings {
                    show_hud: false,
                    ..Settings::default()
                },
                11,
            );
            assert!(hidden.frame_report().is_none());
        }

        #[test]
        fn test_game_runs_headless() {
            let mut game = Game::new(Tuning::default(), Settings::default(), 11);
            for _ in 0..600 {
                game.update(SIM_DT);
            }
            assert!(game.round.time_ticks >= 599);
            assert!(game.round.cues().is_empty());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Brick Rally (headless) starting...");

    let args = host::Args::parse();
    host::run(args).inspect_err(|e| log::error!("{:#}", e))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive brick_rally::sim directly; nothing to do here
}
