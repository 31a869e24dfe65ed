/// Host-side effects a feed entry can trigger.
///
/// Implementations are best-effort: failures stay inside the host and are
/// not reported back to the entry.
pub trait Shell {
    /// Opens `url` in the system browser.
    fn open_external(&self, url: &str);
    /// Replaces the clipboard contents with `text`.
    fn write_clipboard(&self, text: &str);
    /// Shows a desktop notification.
    fn notify(&self, title: &str, body: &str);
}
