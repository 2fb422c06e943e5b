//! Terminal rendering of form effects.

use reel_form::{Notice, NoticeKind, Presenter};
use reel_validator::ValidationError;

/// Prints notices and field errors to stdout. Enable/disable toggles have
/// nothing to show on a terminal and are only logged.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn notice(&self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        };
        println!("[{tag}] {}", notice.message);
    }

    fn field_error(&self, field: &str, error: Option<&ValidationError>) {
        if let Some(error) = error {
            println!("  {field}: {}", error.message);
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::debug!(enabled, "submit trigger toggled");
    }
}
