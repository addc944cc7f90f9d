//! Drowsiness Alarm Sink
//!
//! Contract between the alertness core and whatever plays the warning: the
//! sink receives the current drowsy flag once per frame and must tolerate
//! repeated identical calls.

mod sink;

pub use sink::{AlarmSink, NullAlarmSink, TracingAlarmSink};
