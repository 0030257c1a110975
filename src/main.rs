use anyhow::{Context, Result};
use ccde_filters::config::{CrossTalkConfig, EffectConfig};
use ccde_filters::signal_processing::CrossTalkCanceller;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EffectKind {
    Identity,
    Distortion,
    SimpleEcho,
    NaturalEcho,
    Reverb,
    Tremolo,
    Flanger,
    MovingAverage,
    LeakyIntegrator,
    CrossTalk,
}

#[derive(Parser, Debug)]
#[command(name = "ccde-demo")]
#[command(about = "Run a list of samples through one of the built-in filters")]
struct Args {
    /// Effect to apply, with default parameters
    #[arg(short, long, value_enum, default_value_t = EffectKind::MovingAverage)]
    effect: EffectKind,

    /// TOML effect preset (takes precedence over --effect)
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Input samples; read as interleaved L/R pairs for cross-talk
    #[arg(allow_negative_numbers = true, default_values_t = [2.0, 3.0, 4.0, 6.0])]
    samples: Vec<f64>,
}

fn load_preset(path: &PathBuf) -> Result<EffectConfig> {
    let content = fs::read_to_string(path).context("Failed to read preset file")?;
    toml::from_str(&content).context("Failed to parse preset file")
}

fn default_config(kind: EffectKind) -> Option<EffectConfig> {
    Some(match kind {
        EffectKind::Identity => EffectConfig::Coefficients(Default::default()),
        EffectKind::Distortion => EffectConfig::Distortion(Default::default()),
        EffectKind::SimpleEcho => EffectConfig::SimpleEcho(Default::default()),
        EffectKind::NaturalEcho => EffectConfig::NaturalEcho(Default::default()),
        EffectKind::Reverb => EffectConfig::Reverb(Default::default()),
        EffectKind::Tremolo => EffectConfig::Tremolo(Default::default()),
        EffectKind::Flanger => EffectConfig::Flanger(Default::default()),
        EffectKind::MovingAverage => EffectConfig::MovingAverage(Default::default()),
        EffectKind::LeakyIntegrator => EffectConfig::LeakyIntegrator(Default::default()),
        EffectKind::CrossTalk => return None,
    })
}

fn format_samples(samples: impl IntoIterator<Item = f64>) -> String {
    samples
        .into_iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.preset {
        Some(path) => Some(load_preset(path)?),
        None => default_config(args.effect),
    };

    match config {
        Some(config) => {
            log::info!("Applying {:?}", config);
            let mut filter = config.build().context("Invalid effect parameters")?;
            let output = filter.process_batch(&args.samples);
            println!("{}", format_samples(output));
        }
        None => {
            if !args.samples.len().is_multiple_of(2) {
                anyhow::bail!("Cross-talk input needs an even number of samples (L/R pairs)");
            }
            let mut canceller = CrossTalkCanceller::new(&CrossTalkConfig::default())
                .context("Invalid cross-talk responses")?;
            let mut buffer = args.samples.clone();
            canceller.process_interleaved(&mut buffer);
            for frame in buffer.chunks_exact(2) {
                println!("{}", format_samples(frame.iter().copied()));
            }
        }
    }

    Ok(())
}
