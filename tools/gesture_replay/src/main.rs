use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context as _, Result};
use clap::Parser;

use tapstrip::{
    config::DEFAULT_FLICK_VELOCITY_THRESHOLD,
    slider::{SliderCurve, SliderMap},
    GestureClassifier, GestureListener, PointerEvent, PointerPhase,
};

/// Replays a recorded pointer trace through the gesture classifier.
///
/// The trace holds one event per line, `<ms> <phase> <x> <y>`, where phase is
/// one of `down`, `move`, `up`, `cancel`. Blank lines and lines starting with
/// `#` are skipped. Recognized gestures are printed one per line, or compared
/// against an expectation file with the same format.
#[derive(Parser)]
#[command(name = "gesture_replay")]
struct Args {
    /// Pointer trace to replay.
    trace: PathBuf,

    /// Flick velocity threshold, position units per millisecond.
    #[arg(long, default_value_t = DEFAULT_FLICK_VELOCITY_THRESHOLD)]
    flick_threshold: f64,

    /// Strip width used to derive slider levels for slide gestures.
    #[arg(long, default_value_t = 1080.0)]
    width: f64,

    /// Use the logarithmic slider curve instead of the linear one.
    #[arg(long)]
    logarithmic: bool,

    /// Compare produced gesture lines against this file instead of printing.
    #[arg(long)]
    expect: Option<PathBuf>,
}

struct ReplayListener {
    slider: SliderMap,
    lines: Vec<String>,
}

impl ReplayListener {
    fn new(slider: SliderMap) -> Self {
        Self {
            slider,
            lines: Vec::new(),
        }
    }

    fn record(&mut self, event: PointerEvent, name: &str) {
        self.lines.push(format!("{} {name}", event.timestamp_ms));
    }

    fn record_slide(&mut self, event: PointerEvent, name: &str) {
        self.lines.push(format!(
            "{} {name} level={}",
            event.timestamp_ms,
            self.slider.level_for(event.x)
        ));
    }

    fn record_flick(&mut self, event: PointerEvent, name: &str, velocity: f64) {
        self.lines.push(format!(
            "{} {name} velocity={velocity:.3}",
            event.timestamp_ms
        ));
    }
}

impl GestureListener for ReplayListener {
    fn on_single_tap(&mut self, event: PointerEvent) {
        self.record(event, "single_tap");
    }

    fn on_double_tap(&mut self, event: PointerEvent) {
        self.record(event, "double_tap");
    }

    fn on_single_tap_confirmed(&mut self, event: PointerEvent) {
        self.record(event, "single_tap_confirmed");
    }

    fn on_double_tap_confirmed(&mut self, event: PointerEvent) {
        self.record(event, "double_tap_confirmed");
    }

    fn on_single_long_tap(&mut self, event: PointerEvent) {
        self.record(event, "single_long_tap");
    }

    fn on_double_long_tap(&mut self, event: PointerEvent) {
        self.record(event, "double_long_tap");
    }

    fn on_single_horizontal_slide(&mut self, event: PointerEvent) {
        self.record_slide(event, "single_horizontal_slide");
    }

    fn on_double_horizontal_slide(&mut self, event: PointerEvent) {
        self.record_slide(event, "double_horizontal_slide");
    }

    fn on_single_horizontal_flick(&mut self, event: PointerEvent, velocity: f64) {
        self.record_flick(event, "single_horizontal_flick", velocity);
    }

    fn on_double_horizontal_flick(&mut self, event: PointerEvent, velocity: f64) {
        self.record_flick(event, "double_horizontal_flick", velocity);
    }

    fn on_un_tap(&mut self, event: PointerEvent) {
        self.record(event, "un_tap");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let events = parse_trace(&args.trace)?;

    let curve = if args.logarithmic {
        SliderCurve::Logarithmic
    } else {
        SliderCurve::Linear
    };
    let listener = ReplayListener::new(SliderMap::new(args.width, curve));
    let mut classifier = GestureClassifier::with_flick_velocity_threshold(args.flick_threshold, listener);

    for event in events {
        classifier.handle_event(event);
    }

    let lines = classifier.into_listener().lines;
    match args.expect {
        Some(path) => verify(&lines, &path),
        None => {
            for line in &lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn parse_trace(path: &Path) -> Result<Vec<PointerEvent>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))?;

    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        events.push(
            parse_event(line).with_context(|| format!("trace line {}: `{line}`", index + 1))?,
        );
    }
    Ok(events)
}

fn parse_event(line: &str) -> Result<PointerEvent> {
    let mut fields = line.split_whitespace();
    let (Some(ms), Some(phase), Some(x), Some(y), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        bail!("expected `<ms> <phase> <x> <y>`");
    };

    let phase = match phase {
        "down" => PointerPhase::Down,
        "move" => PointerPhase::Move,
        "up" => PointerPhase::Up,
        "cancel" => PointerPhase::Cancel,
        other => bail!("unknown phase `{other}`"),
    };

    Ok(PointerEvent {
        timestamp_ms: ms.parse().context("bad timestamp")?,
        x: x.parse().context("bad x coordinate")?,
        y: y.parse().context("bad y coordinate")?,
        phase,
    })
}

fn verify(produced: &[String], expect_path: &Path) -> Result<()> {
    let text = fs::read_to_string(expect_path)
        .with_context(|| format!("reading expectation {}", expect_path.display()))?;
    let expected: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    for (index, (have, want)) in produced.iter().zip(&expected).enumerate() {
        if have != want {
            bail!("gesture {} mismatch: have `{have}`, want `{want}`", index + 1);
        }
    }
    if produced.len() != expected.len() {
        bail!(
            "gesture count mismatch: have {}, want {}",
            produced.len(),
            expected.len()
        );
    }

    println!("ok: {} gestures", produced.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let event = parse_event("120 move 45.5 3.0").unwrap();

        assert_eq!(event.timestamp_ms, 120);
        assert_eq!(event.phase, PointerPhase::Move);
        assert!((event.x - 45.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_event("120 move 45.5").is_err());
        assert!(parse_event("120 wiggle 45.5 3.0").is_err());
        assert!(parse_event("soon down 1.0 2.0").is_err());
        assert!(parse_event("120 down 1.0 2.0 extra").is_err());
    }

    #[test]
    fn replay_produces_expected_gesture_lines() {
        let trace = [
            "0 down 200.0 10.0",
            "60 move 200.0 10.0",
            "120 move 320.0 10.0",
            "160 up 320.0 10.0",
        ];
        let listener = ReplayListener::new(SliderMap::new(1080.0, SliderCurve::Linear));
        let mut classifier = GestureClassifier::with_flick_velocity_threshold(
            DEFAULT_FLICK_VELOCITY_THRESHOLD,
            listener,
        );
        for line in trace {
            classifier.handle_event(parse_event(line).unwrap());
        }

        // dx = 120 over 120 ms is exactly 1.0 units/ms, not above the default
        // threshold, so the gesture resolves as a slide.
        assert_eq!(
            classifier.into_listener().lines,
            vec![
                "0 single_tap".to_string(),
                "120 single_horizontal_slide level=63".to_string(),
                "160 un_tap".to_string(),
            ]
        );
    }
}
