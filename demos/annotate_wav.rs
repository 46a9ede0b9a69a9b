//! Example: annotate a WAV file and print the detected onsets
//!
//! Usage: cargo run --example annotate_wav -- <file.wav> [--chords]
//!
//! Decoding stays outside the engine; this example uses hound to read the
//! WAV and mixes stereo down to mono before handing samples over.

use chordscribe::{annotate_buffer, AnalysisConfig, Annotation, SampleBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: annotate_wav <file.wav> [--chords]")?;
    let chord_mode = args.any(|a| a == "--chords");

    let mut reader = hound::WavReader::open(&path)?;
    let spec = reader.spec();
    let samples: Vec<i16> = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;

    // Mix stereo down to mono
    let mono: Vec<i16> = if spec.channels == 2 {
        samples
            .chunks(2)
            .map(|pair| ((pair[0] as i32 + pair[1] as i32) / 2) as i16)
            .collect()
    } else {
        samples
    };

    let buffer = SampleBuffer::new(mono, spec.sample_rate)?;

    let mut config = AnalysisConfig::default();
    config.chord_mode = chord_mode;

    let result = annotate_buffer(&buffer, &config)?;

    println!("File: {}", path);
    println!("  Duration: {:.2} s", result.metadata.duration_seconds);
    println!("  Sample rate: {} Hz", result.metadata.sample_rate);
    println!("  Onsets: {}", result.metadata.onset_count);
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);
    println!();

    for frame in result.annotated_frames() {
        let time_ms = frame.time_seconds * 1000.0;
        match &frame.annotation {
            Some(Annotation::Note(name)) => {
                println!("{:>10.1} ms  [{}]  {}", time_ms, frame.index, name);
            }
            Some(Annotation::Chord { notes, label }) => {
                println!(
                    "{:>10.1} ms  [{}]  {}  ({})",
                    time_ms,
                    frame.index,
                    label,
                    notes.join(", ")
                );
            }
            None => {}
        }
    }

    Ok(())
}
