//! Session-complete alerts: terminal bell and desktop notification.
//! Desktop notifications are currently only implemented on macOS.

use crate::domain::Mode;
use std::io::{self, Write};

#[cfg(target_os = "macos")]
use std::process::Command;

/// Alarm text shown when a session finishes
pub fn session_finished_message(mode: Mode) -> String {
    format!("{} session finished!", mode.to_tag().to_uppercase())
}

/// Ring the terminal bell
pub fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

/// Send a desktop notification when a session finishes
pub fn notify_session_complete(mode: Mode) {
    let message = session_finished_message(mode);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Pomodoro""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        tracing::debug!(%message, "desktop notifications unsupported on this platform");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_finished_message() {
        assert_eq!(session_finished_message(Mode::Focus), "FOCUS session finished!");
        assert_eq!(session_finished_message(Mode::Short), "SHORT session finished!");
        assert_eq!(session_finished_message(Mode::Long), "LONG session finished!");
    }
}
