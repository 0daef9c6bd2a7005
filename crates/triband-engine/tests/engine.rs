//! End-to-end tests for the stereo engine.
//!
//! Drives the full prepare/update/process lifecycle with sine input and
//! checks the measured gain against the pure magnitude queries.

use triband_core::linear_to_db;
use triband_engine::{ChainSettings, EqParams, Param, Slope, StereoEngine};

const BLOCK: usize = 512;

/// Feed a continuous sine through the engine for `seconds` and return the
/// peak output amplitude observed over the final ten percent of the run.
fn measure_sine_gain(
    engine: &mut StereoEngine,
    params: &EqParams,
    freq: f32,
    sample_rate: f32,
    seconds: f32,
) -> f32 {
    let total = (sample_rate * seconds) as usize / BLOCK * BLOCK;
    let settle = total - total / 10;
    let mut peak = 0.0f32;

    let mut left = vec![0.0f32; BLOCK];
    let mut right = vec![0.0f32; BLOCK];
    for block_start in (0..total).step_by(BLOCK) {
        for (i, (l, r)) in left.iter_mut().zip(right.iter_mut()).enumerate() {
            let t = (block_start + i) as f32 / sample_rate;
            let x = (2.0 * std::f32::consts::PI * freq * t).sin();
            *l = x;
            *r = x;
        }
        engine.process_block(params, &mut left, &mut right).unwrap();
        if block_start >= settle {
            for &s in &left {
                peak = peak.max(s.abs());
            }
        }
    }
    peak
}

#[test]
fn flat_settings_pass_midband_sine_unchanged() {
    // Cuts parked at the band extremes, peak at 0 dB: a 1 kHz sine should
    // come through at unity within half a dB.
    let sample_rate = 44100.0;
    let params = EqParams::new(); // defaults: 20 Hz / 20 kHz, 0 dB, slope 12
    let mut engine = StereoEngine::new();
    engine.prepare(sample_rate, BLOCK);

    let peak = measure_sine_gain(&mut engine, &params, 1000.0, sample_rate, 1.0);
    let db = linear_to_db(peak);
    assert!(db.abs() < 0.5, "expected ~0 dB at 1 kHz, measured {db} dB");
}

#[test]
fn peak_boost_measures_twelve_db() {
    let sample_rate = 48000.0;
    let params = EqParams::new();
    params.set(Param::PeakFreq, 1000.0);
    params.set(Param::PeakGain, 12.0);
    params.set(Param::PeakQ, 1.0);

    let mut engine = StereoEngine::new();
    engine.prepare(sample_rate, BLOCK);

    let peak = measure_sine_gain(&mut engine, &params, 1000.0, sample_rate, 1.0);
    let db = linear_to_db(peak);
    assert!((db - 12.0).abs() < 0.5, "expected ~12 dB boost, measured {db} dB");
}

#[test]
fn peak_section_response_query() {
    // The pure query on the peak section: +12 dB at center, flat at the
    // audible extremes.
    let sample_rate = 48000.0;
    let settings = ChainSettings {
        peak_freq: 1000.0,
        peak_gain_db: 12.0,
        peak_q: 1.0,
        ..ChainSettings::default()
    };
    let mut engine = StereoEngine::new();
    engine.prepare(sample_rate, BLOCK);
    engine.update_filters(&settings).unwrap();

    let peak = engine.left().peak_coefficients();
    let center = linear_to_db(peak.magnitude_at(1000.0, sample_rate));
    assert!((center - 12.0).abs() < 0.2, "center: {center} dB");

    let low = linear_to_db(peak.magnitude_at(20.0, sample_rate));
    let high = linear_to_db(peak.magnitude_at(20000.0, sample_rate));
    assert!(low.abs() < 0.2, "20 Hz: {low} dB");
    assert!(high.abs() < 0.2, "20 kHz: {high} dB");
}

#[test]
fn stereo_channels_stay_identical() {
    let sample_rate = 48000.0;
    let params = EqParams::new();
    params.set(Param::LowCutFreq, 150.0);
    params.set(Param::LowCutSlope, 2.0);
    params.set(Param::PeakGain, -9.0);
    params.set(Param::HighCutFreq, 8000.0);

    let mut engine = StereoEngine::new();
    engine.prepare(sample_rate, BLOCK);

    let mut left = vec![0.0f32; BLOCK];
    let mut right = vec![0.0f32; BLOCK];
    for block in 0..32 {
        for i in 0..BLOCK {
            let t = (block * BLOCK + i) as f32 / sample_rate;
            let x = (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.7;
            left[i] = x;
            right[i] = x;
        }
        engine.process_block(&params, &mut left, &mut right).unwrap();
        assert_eq!(left, right, "channels diverged in block {block}");
    }
}

#[test]
fn slope_steepens_cut_rolloff() {
    // One octave below a 200 Hz low cut, each extra 12 dB/oct of slope must
    // buy a visibly steeper chain response.
    let sample_rate = 48000.0;
    let mut prev_db = f32::MAX;
    for slope in [Slope::Db12, Slope::Db24, Slope::Db36, Slope::Db48] {
        let settings = ChainSettings {
            low_cut_freq: 200.0,
            low_cut_slope: slope,
            ..ChainSettings::default()
        };
        let mut engine = StereoEngine::new();
        engine.prepare(sample_rate, BLOCK);
        engine.update_filters(&settings).unwrap();

        let db = linear_to_db(engine.left().magnitude_at(100.0, sample_rate));
        assert!(
            db < prev_db - 6.0,
            "{} dB/oct rolloff not steeper: {db} vs {prev_db}",
            slope.db_per_octave()
        );
        prev_db = db;
    }
}

#[test]
fn live_parameter_change_keeps_audio_finite() {
    // Sweep the peak band hard while audio flows; the click-free swap
    // contract means no resets and no blowups mid-stream.
    let sample_rate = 48000.0;
    let params = EqParams::new();
    let mut engine = StereoEngine::new();
    engine.prepare(sample_rate, BLOCK);

    let mut left = vec![0.0f32; BLOCK];
    let mut right = vec![0.0f32; BLOCK];
    for block in 0..64 {
        params.set(Param::PeakFreq, 100.0 + block as f32 * 250.0);
        params.set(Param::PeakGain, if block % 2 == 0 { 24.0 } else { -24.0 });
        params.set(Param::LowCutSlope, (block % 4) as f32);
        for i in 0..BLOCK {
            let t = (block * BLOCK + i) as f32 / sample_rate;
            let x = (2.0 * std::f32::consts::PI * 330.0 * t).sin();
            left[i] = x;
            right[i] = x;
        }
        engine.process_block(&params, &mut left, &mut right).unwrap();
        assert!(
            left.iter().chain(right.iter()).all(|s| s.is_finite()),
            "non-finite sample in block {block}"
        );
    }
}

#[test]
fn reprepare_adopts_new_sample_rate() {
    let params = EqParams::new();
    params.set(Param::PeakFreq, 1000.0);
    params.set(Param::PeakGain, 12.0);

    let mut engine = StereoEngine::new();
    engine.prepare(44100.0, BLOCK);
    engine.update_filters(&params.snapshot()).unwrap();
    let at_44k = engine.left().peak_coefficients();

    engine.prepare(96000.0, BLOCK);
    engine.update_filters(&params.snapshot()).unwrap();
    let at_96k = engine.left().peak_coefficients();

    assert_ne!(at_44k, at_96k, "coefficients must depend on sample rate");
    let center = linear_to_db(at_96k.magnitude_at(1000.0, 96000.0));
    assert!((center - 12.0).abs() < 0.2, "center after reprepare: {center} dB");
}
