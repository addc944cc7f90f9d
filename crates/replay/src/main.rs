//! Operator Alertness Replay - Main Entry Point
//!
//! Stands in for the live frame-acquisition loop: feeds a recorded landmark
//! trace through the monitor one frame at a time and drives the alarm sink
//! with the resulting drowsy flag.

mod trace;

use alarm_sink::{AlarmSink, TracingAlarmSink};
use alertness::{AlertnessConfig, AlertnessMonitor};
use anyhow::{bail, Result};
use std::path::PathBuf;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== Operator Alertness Replay v{} ===", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: alertness-replay <trace.json> [--realtime]");
    };
    let realtime = args.next().as_deref() == Some("--realtime");

    let frames = trace::load(&PathBuf::from(&path))?;
    info!("loaded {} frames from {}", frames.len(), path);

    let mut monitor = AlertnessMonitor::new(AlertnessConfig::default());
    let mut alarm = TracingAlarmSink::new();

    let mut drowsy_frames = 0u64;
    let mut blink_high_water = 0u32;
    let mut last_t = None;

    for frame in &frames {
        if realtime {
            if let Some(prev) = last_t {
                sleep(Duration::from_millis(frame.t_ms.saturating_sub(prev))).await;
            }
        }
        last_t = Some(frame.t_ms);

        let face = frame.face();
        let analysis = monitor.step(face.as_ref(), frame.t_ms);
        alarm.set_active(analysis.drowsy);

        if analysis.drowsy {
            drowsy_frames += 1;
        }
        blink_high_water = blink_high_water.max(analysis.blinks_per_minute);

        debug!(
            t_ms = frame.t_ms,
            ear = analysis.ear,
            blinks = analysis.blinks_per_minute,
            "{} | {}",
            analysis.eye_status,
            analysis.emotion
        );
    }

    alarm.set_active(false);
    info!(
        "replay complete: {} frames, {} drowsy, peak {} blinks/min",
        frames.len(),
        drowsy_frames,
        blink_high_water
    );

    Ok(())
}
