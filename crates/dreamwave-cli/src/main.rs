//! Dreamwave CLI - Command-line interface for binaural and subliminal audio
//!
//! This binary renders Dreamwave assets to WAV files, runs JSON job files,
//! and inspects rendered audio.

use clap::{ArgAction, Args, Parser, Subcommand};
use dreamwave_spec::{
    AudioParameters, MaskingKind, RenderConfig, SubliminalParameters, DEFAULT_BINAURAL_GAIN_DBFS,
    DEFAULT_BLOCK_SECONDS, DEFAULT_MASKING_GAIN_DBFS, DEFAULT_SAMPLE_RATE,
    DEFAULT_SUBLIMINAL_GAIN_DBFS,
};
use std::path::Path;
use std::process::ExitCode;

// Use modules from the library crate
use dreamwave_cli::{commands, logging};

/// Dreamwave - Binaural Beat and Subliminal Audio Renderer
#[derive(Parser)]
#[command(name = "dreamwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Render configuration shared by the direct render commands.
#[derive(Args, Debug, Clone, Copy)]
struct RenderArgs {
    /// Output sample rate in Hz (22050, 44100, 48000, or 96000)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Render block length in seconds
    #[arg(long, default_value_t = DEFAULT_BLOCK_SECONDS)]
    block_seconds: f64,
}

impl From<RenderArgs> for RenderConfig {
    fn from(args: RenderArgs) -> Self {
        RenderConfig {
            sample_rate: args.sample_rate,
            block_seconds: args.block_seconds,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a binaural beat
    Binaural {
        /// Carrier frequency in Hz (20-20000)
        #[arg(short, long)]
        carrier: f64,

        /// Beat frequency in Hz (0.5-40)
        #[arg(short, long)]
        beat: f64,

        /// Duration in seconds (60-7200)
        #[arg(short, long)]
        duration: f64,

        /// Output gain in dBFS (at most 0)
        #[arg(long, default_value_t = DEFAULT_BINAURAL_GAIN_DBFS, allow_hyphen_values = true)]
        gain: f64,

        #[command(flatten)]
        render: RenderArgs,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },

    /// Mix a pre-rendered affirmation over a masking layer
    Subliminal {
        /// WAV file holding the spoken affirmation
        #[arg(short, long)]
        speech: String,

        /// Affirmation text (validated for length when given)
        #[arg(short, long)]
        affirmation: Option<String>,

        /// Masking layer (white-noise, ambient-tone)
        #[arg(short, long, default_value = "white-noise")]
        masking: MaskingKind,

        /// Duration in seconds (60-7200)
        #[arg(short, long)]
        duration: f64,

        /// Speech gain in dBFS (at most 0)
        #[arg(long, default_value_t = DEFAULT_SUBLIMINAL_GAIN_DBFS, allow_hyphen_values = true)]
        subliminal_gain: f64,

        /// Masking gain in dBFS (at most 0)
        #[arg(long, default_value_t = DEFAULT_MASKING_GAIN_DBFS, allow_hyphen_values = true)]
        masking_gain: f64,

        /// White-noise seed (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        #[command(flatten)]
        render: RenderArgs,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },

    /// Render the asset described by a JSON job file
    Render {
        /// Path to the job file
        #[arg(short, long)]
        job: String,

        /// Output path (default: the job's output, or the job path with .wav)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a JSON job file without rendering
    Validate {
        /// Path to the job file
        #[arg(short, long)]
        job: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Report format, levels, and dominant frequencies of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Binaural {
            carrier,
            beat,
            duration,
            gain,
            render,
            output,
        } => commands::binaural::run(
            &AudioParameters::new(carrier, beat, duration).with_gain(gain),
            render.into(),
            Path::new(&output),
        ),
        Commands::Subliminal {
            speech,
            affirmation,
            masking,
            duration,
            subliminal_gain,
            masking_gain,
            seed,
            render,
            output,
        } => {
            let params = SubliminalParameters::new(masking, duration)
                .with_gains(subliminal_gain, masking_gain)
                .with_seed(seed.unwrap_or_else(rand::random));
            commands::subliminal::run(
                &params,
                Path::new(&speech),
                affirmation.as_deref(),
                render.into(),
                Path::new(&output),
            )
        }
        Commands::Render { job, output } => commands::render::run(&job, output.as_deref()),
        Commands::Validate { job, json } => commands::validate::run(&job, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_binaural_with_defaults() {
        let cli = Cli::try_parse_from([
            "dreamwave",
            "binaural",
            "--carrier",
            "200",
            "--beat",
            "10",
            "--duration",
            "600",
            "-o",
            "theta.wav",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Binaural {
                carrier,
                beat,
                duration,
                gain,
                render,
                output,
            } => {
                assert_eq!(carrier, 200.0);
                assert_eq!(beat, 10.0);
                assert_eq!(duration, 600.0);
                assert_eq!(gain, -6.0);
                assert_eq!(render.sample_rate, 44_100);
                assert_eq!(render.block_seconds, 1.0);
                assert_eq!(output, "theta.wav");
            }
            _ => panic!("expected binaural command"),
        }
    }

    #[test]
    fn test_cli_parses_negative_gain() {
        let cli = Cli::try_parse_from([
            "dreamwave",
            "binaural",
            "-c",
            "432",
            "-b",
            "4",
            "-d",
            "60",
            "--gain",
            "-12.5",
            "--sample-rate",
            "48000",
            "-o",
            "out.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Binaural { gain, render, .. } => {
                assert_eq!(gain, -12.5);
                assert_eq!(RenderConfig::from(render).sample_rate, 48_000);
            }
            _ => panic!("expected binaural command"),
        }
    }

    #[test]
    fn test_cli_parses_subliminal() {
        let cli = Cli::try_parse_from([
            "dreamwave",
            "-vv",
            "subliminal",
            "--speech",
            "speech.wav",
            "--masking",
            "ambient-tone",
            "--duration",
            "300",
            "--seed",
            "7",
            "--output",
            "calm.wav",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Subliminal {
                masking,
                seed,
                subliminal_gain,
                masking_gain,
                affirmation,
                ..
            } => {
                assert_eq!(masking, MaskingKind::AmbientTone);
                assert_eq!(seed, Some(7));
                assert_eq!(subliminal_gain, -30.0);
                assert_eq!(masking_gain, -10.0);
                assert_eq!(affirmation, None);
            }
            _ => panic!("expected subliminal command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_masking() {
        let result = Cli::try_parse_from([
            "dreamwave",
            "subliminal",
            "-s",
            "speech.wav",
            "-m",
            "pink-noise",
            "-d",
            "300",
            "-o",
            "out.wav",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_validate_json() {
        let cli = Cli::try_parse_from(["dreamwave", "validate", "--job", "job.json", "--json"])
            .unwrap();
        match cli.command {
            Commands::Validate { job, json } => {
                assert_eq!(job, "job.json");
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_verify_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
