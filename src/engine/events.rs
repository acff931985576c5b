use crate::domain::Mode;

/// Notification emitted by the engine, in the order operations ran
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// Remaining time or its baseline changed (tick, reset, mode switch)
    Tick { display: String, percent: f64 },
    /// The countdown reached zero
    SessionComplete(Mode),
    /// The engine entered (`true`) or left (`false`) the running state
    RunningChanged(bool),
}
