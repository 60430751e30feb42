//! Adds background noise to a WAV file.
//!
//! Usage:
//!
//! ```text
//! cargo run --example augment_wav -- <input.wav> <output.wav> <noise.lst> [config.json]
//! ```
//!
//! `noise.lst` lists one noise WAV path per line. The optional JSON config
//! overrides the effect settings; its `corpus_list_path` is replaced by the
//! list given on the command line. Set `RUST_LOG=debug` to see the effect's
//! configuration and `RUST_LOG=trace` for every mix.

use anyhow::{Context, Result, anyhow, bail};
use noisemix::{AdditiveNoise, AdditiveNoiseConfig, ClipLoader, MixOutcome, WavClipLoader};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: augment_wav <input.wav> <output.wav> <noise.lst> [config.json]");
    }
    let (input, output, list) = (&args[0], &args[1], &args[2]);

    let config = match args.get(3) {
        Some(path) => AdditiveNoiseConfig::from_json_file(path)?,
        None => AdditiveNoiseConfig::default().with_snr_range(5.0, 20.0),
    }
    .with_corpus_list_path(list);

    let spec = hound::WavReader::open(input)
        .with_context(|| format!("failed to open {input}"))?
        .spec();
    if spec.channels != 1 {
        bail!("{input} has {} channels, only mono is supported", spec.channels);
    }
    let mut signal = WavClipLoader::new()
        .load(input)
        .map_err(|e| anyhow!("failed to decode {input}: {e}"))?;

    let mut effect = AdditiveNoise::new(config)?;
    println!("{effect}");

    match effect.apply(&mut signal)? {
        MixOutcome::Skipped => println!("gate closed, writing input unchanged"),
        MixOutcome::Silent { noise_rms } => println!("selected noise is silent (rms={noise_rms})"),
        MixOutcome::Mixed {
            snr_db,
            clips,
            gain,
        } => {
            println!("mixed {clips} clips at {snr_db:.1} dB (gain {gain:.4})")
        }
    }

    let out_spec = hound::WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(output, out_spec)?;
    for sample in signal {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    println!("wrote {output}");

    Ok(())
}
