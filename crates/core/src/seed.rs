//! Static seed curriculum: a six-week plan for building a Shazam-style
//! audio recognizer from first principles.
//!
//! The seed is the fallback whenever no persisted snapshot exists (or the
//! snapshot fails to parse). Ids are hierarchical and globally unique so any
//! level can be addressed directly.

use crate::model::{Day, DayId, Phase, PhaseId, Week, WeekId};

fn day(phase: u32, week: u32, number: u32, title: &str, description: &str) -> Day {
    Day::new(
        DayId::new(format!("phase-{phase}-week-{week}-day-{number}")),
        number,
        title,
        description,
    )
}

fn week(phase: u32, number: u32, title: &str, description: &str, days: Vec<Day>) -> Week {
    Week::new(
        WeekId::new(format!("phase-{phase}-week-{number}")),
        number,
        title,
        description,
        days,
    )
}

/// Builds the full seed tree with all derived fields already computed.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_curriculum() -> Vec<Phase> {
    vec![
        Phase::new(
            PhaseId::new("phase-1"),
            1,
            "Signal Foundations",
            "Digital audio from the ground up: sampling, spectra, and the FFT.",
            "Be able to read a spectrogram and explain every axis on it.",
            vec![
                week(
                    1,
                    1,
                    "Sampling & Quantization",
                    "How continuous sound becomes numbers.",
                    vec![
                        day(1, 1, 1, "Sound as a signal", "Pressure waves, amplitude, frequency, and phase."),
                        day(1, 1, 2, "Sampling theorem", "Nyquist rate, aliasing, and why 44.1 kHz.")
                            .with_math_content("f_s > 2 f_max  (Nyquist criterion)"),
                        day(1, 1, 3, "Quantization", "Bit depth, dynamic range, and quantization noise.")
                            .with_math_content("SNR ≈ 6.02 · bits + 1.76 dB"),
                        day(1, 1, 4, "Reading WAV files", "PCM layout, endianness, mono downmixing.")
                            .with_code_content("let samples: Vec<i16> = reader.samples().collect()?;"),
                    ],
                ),
                week(
                    1,
                    2,
                    "Frequency Domain",
                    "From samples to spectra.",
                    vec![
                        day(1, 2, 1, "The DFT", "Correlating a signal against complex exponentials.")
                            .with_math_content("X[k] = Σ_{n=0}^{N-1} x[n] · e^{-2πi kn/N}"),
                        day(1, 2, 2, "The FFT", "Why O(N log N) changed everything; radix-2 butterflies."),
                        day(1, 2, 3, "Windowing", "Spectral leakage and the Hann window.")
                            .with_math_content("w[n] = 0.5 · (1 − cos(2πn/(N−1)))"),
                        day(1, 2, 4, "Spectrograms", "STFT: hop size, overlap, and the time/frequency trade-off.")
                            .with_code_content("for frame in samples.windows(1024).step_by(512) { /* fft */ }"),
                    ],
                ),
            ],
        ),
        Phase::new(
            PhaseId::new("phase-2"),
            2,
            "Audio Fingerprinting",
            "Turning spectrograms into compact, searchable fingerprints.",
            "Fingerprint a song and recognize it from a 10-second clip.",
            vec![
                week(
                    2,
                    1,
                    "Peaks & Constellations",
                    "Finding the landmarks that survive noise.",
                    vec![
                        day(2, 1, 1, "Spectral peaks", "Local maxima, neighborhoods, and amplitude thresholds."),
                        day(2, 1, 2, "Constellation maps", "Why sparse peak maps are robust to noise and codecs."),
                        day(2, 1, 3, "Anchor points", "Pairing peaks inside a target zone."),
                        day(2, 1, 4, "Hashing pairs", "Packing (f1, f2, Δt) into a 32-bit hash.")
                            .with_code_content("let hash = (f1 << 20) | (f2 << 8) | dt as u32;"),
                    ],
                ),
                week(
                    2,
                    2,
                    "Matching",
                    "From hash hits to a confident match.",
                    vec![
                        day(2, 2, 1, "Inverted index", "Hash → (song, offset) postings lists."),
                        day(2, 2, 2, "Offset histograms", "Scoring a candidate by time-offset alignment."),
                        day(2, 2, 3, "Thresholds", "Separating true matches from coincidental hits."),
                        day(2, 2, 4, "End-to-end demo", "Clip in, title out: wiring the whole pipeline together."),
                    ],
                ),
            ],
        ),
        Phase::new(
            PhaseId::new("phase-3"),
            3,
            "Matching at Scale",
            "Making recognition fast over a large catalogue.",
            "Serve sub-second lookups against a ten-thousand-song index.",
            vec![
                week(
                    3,
                    1,
                    "Index Engineering",
                    "Storage layout and lookup cost.",
                    vec![
                        day(3, 1, 1, "Batch ingestion", "Fingerprinting a catalogue and bulk-loading the index."),
                        day(3, 1, 2, "Compact postings", "Delta encoding and sorted runs."),
                        day(3, 1, 3, "Memory vs disk", "What must stay resident for sub-second lookups."),
                        day(3, 1, 4, "Benchmarking", "Measuring recall and latency against a held-out clip set."),
                    ],
                ),
                week(
                    3,
                    2,
                    "Robustness",
                    "Surviving the real world.",
                    vec![
                        day(3, 2, 1, "Noise & distortion", "Testing against re-recorded and compressed clips."),
                        day(3, 2, 2, "Pitch & speed shifts", "Where plain constellation hashing breaks down."),
                        day(3, 2, 3, "Parameter tuning", "Peak density, target-zone size, and hash fan-out."),
                        day(3, 2, 4, "Retrospective", "What Shazam actually does differently, and why."),
                    ],
                ),
            ],
        ),
    ]
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
