#![cfg(feature = "wav-loader")]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use noisemix::{
    AdditiveNoise, AdditiveNoiseConfig, DrawPolicy, MixOutcome, SfxError, SoundEffect,
    SoundEffectChain,
};
use tempfile::TempDir;

fn write_wav(path: &Path, samples: &[f32]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &sample in samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
}

/// Writes `clips` as WAV files plus a list file naming them, one per line
/// with blank lines in between.
fn noise_corpus(clips: &[(&str, Vec<f32>)]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let list_path = dir.path().join("noise.lst");
    let mut list = fs::File::create(&list_path).unwrap();
    for (name, samples) in clips {
        let path = dir.path().join(name);
        write_wav(&path, samples);
        writeln!(list, "{}", path.display()).unwrap();
        writeln!(list).unwrap();
    }
    (dir, list_path)
}

fn speech_like(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| 0.6 * (i as f32 * 0.05).sin() * (i as f32 * 0.003).cos())
        .collect()
}

fn hiss(len: usize, seed: u32) -> Vec<f32> {
    // Small LCG, good enough for a fixed test clip.
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 8) as f32 / (1u32 << 24) as f32 - 0.5
        })
        .collect()
}

#[test]
fn test_mixes_wav_corpus() {
    let (_dir, list) = noise_corpus(&[("hiss.wav", hiss(700, 1)), ("hum.wav", hiss(300, 2))]);
    let config = AdditiveNoiseConfig::new(&list)
        .with_snr_range(10.0, 10.0)
        .with_clip_range(1, 2)
        .with_mix_ratio(0.5)
        .with_random_seed(12);
    let mut effect = AdditiveNoise::new(config).unwrap();
    assert_eq!(effect.noise_list().len(), 2);

    let original = speech_like(4000);
    let mut signal = original.clone();
    let outcome = effect.apply(&mut signal).unwrap();
    assert!(outcome.is_mixed());

    // Only half of the buffer lies inside the noise window.
    let changed = signal.iter().zip(&original).filter(|(s, o)| s != o).count();
    assert!(changed <= 2000, "changed {changed} samples");
    assert!(changed > 1000, "changed {changed} samples");
}

#[test]
fn test_identical_instances_produce_identical_output() {
    let (_dir, list) = noise_corpus(&[
        ("a.wav", hiss(257, 3)),
        ("b.wav", hiss(1024, 4)),
        ("c.wav", hiss(61, 5)),
    ]);
    let config = AdditiveNoiseConfig::new(&list)
        .with_apply_probability(0.8)
        .with_snr_range(-5.0, 25.0)
        .with_clip_range(0, 3)
        .with_draw_policy(DrawPolicy::WithoutReplacement)
        .with_random_seed(77);
    let mut first = AdditiveNoise::new(config.clone()).unwrap();
    let mut second = AdditiveNoise::new(config).unwrap();

    for round in 0..20 {
        let mut a = speech_like(500 + round * 37);
        let mut b = a.clone();
        let outcome_a = first.apply(&mut a).unwrap();
        let outcome_b = second.apply(&mut b).unwrap();
        assert_eq!(outcome_a, outcome_b);
        assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let (_dir, list) = noise_corpus(&[("a.wav", hiss(400, 6)), ("b.wav", hiss(400, 7))]);
    let config = AdditiveNoiseConfig::new(&list);
    let first_config = config.clone().with_random_seed(1);
    let mut first = AdditiveNoise::new(first_config).unwrap();
    let mut second = AdditiveNoise::new(config.with_random_seed(2)).unwrap();

    let mut a = speech_like(800);
    let mut b = a.clone();
    first.apply(&mut a).unwrap();
    second.apply(&mut b).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_missing_list_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AdditiveNoise::new(AdditiveNoiseConfig::new(dir.path().join("none.lst")));
    assert!(matches!(result, Err(SfxError::CorpusOpen { .. })));
}

#[test]
fn test_blank_list_file() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("blank.lst");
    fs::write(&list, "\n\n\n").unwrap();
    let result = AdditiveNoise::new(AdditiveNoiseConfig::new(&list));
    assert!(matches!(result, Err(SfxError::EmptyCorpus { .. })));
}

#[test]
fn test_config_checked_before_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = AdditiveNoiseConfig::new(dir.path().join("none.lst"));
    let config = config.with_clip_range(3, 1);
    let result = AdditiveNoise::new(config);
    assert!(matches!(result, Err(SfxError::InvalidConfig(_))));
}

#[test]
fn test_undecodable_clip_leaves_signal_untouched() {
    let (dir, list) = noise_corpus(&[("good.wav", hiss(100, 8))]);
    let broken = dir.path().join("broken.wav");
    fs::write(&broken, b"not a wav file").unwrap();
    fs::write(
        &list,
        format!("{}\n{}\n", dir.path().join("good.wav").display(), broken.display()),
    )
    .unwrap();

    let config = AdditiveNoiseConfig::new(&list)
        .with_clip_range(2, 2)
        .with_draw_policy(DrawPolicy::Sequential);
    let mut effect = AdditiveNoise::new(config).unwrap();

    let mut signal = speech_like(256);
    let before = signal.clone();
    let err = effect.apply(&mut signal).unwrap_err();
    assert!(matches!(err, SfxError::NoiseLoad { .. }));
    assert!(err.to_string().contains("broken.wav"));
    assert_eq!(signal, before);
}

#[test]
fn test_json_config_end_to_end() {
    let (dir, list) = noise_corpus(&[("a.wav", hiss(128, 9))]);
    let config_path = dir.path().join("sfx.json");
    let json = serde_json::json!({
        "apply_probability": 1.0,
        "min_snr_db": 15.0,
        "max_snr_db": 15.0,
        "min_clips": 1,
        "max_clips": 1,
        "corpus_list_path": list,
        "draw_policy": "sequential",
        "random_seed": 5,
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config = AdditiveNoiseConfig::from_json_file(&config_path).unwrap();
    let mut effect = AdditiveNoise::new(config).unwrap();
    let mut signal = speech_like(1000);
    match effect.apply(&mut signal).unwrap() {
        MixOutcome::Mixed { snr_db, clips, .. } => {
            assert_eq!(snr_db, 15.0);
            assert_eq!(clips, 1);
        }
        other => panic!("expected mix, got {other:?}"),
    }
}

#[test]
fn test_runs_inside_chain() {
    let (_dir, list) = noise_corpus(&[("a.wav", hiss(128, 10))]);
    let config = AdditiveNoiseConfig::new(&list).with_random_seed(3);
    let effect = AdditiveNoise::new(config).unwrap();
    let mut chain = SoundEffectChain::new().with(effect);

    let mut signal = speech_like(600);
    let before = signal.clone();
    chain.apply(&mut signal).unwrap();
    assert_eq!(signal.len(), before.len());
    assert_ne!(signal, before);
    assert_eq!(chain.to_string(), "SoundEffectChain[additive_noise]");
}
