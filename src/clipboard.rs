/// System clipboard access behind a trait so the history logic can be driven
/// by an in-memory fake in tests.
pub trait Clipboard {
    /// Current clipboard text, if any is available.
    fn read(&mut self) -> Option<String>;
    /// Place `text` on the clipboard.
    fn write(&mut self, text: &str);
}

/// Real clipboard backed by `arboard`. Failure to open the clipboard is
/// logged once and all subsequent calls become no-ops.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::error!("failed to init clipboard: {e}");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Option<String> {
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("clipboard read error: {e}");
                None
            }
        }
    }

    fn write(&mut self, text: &str) {
        let Some(clipboard) = self.inner.as_mut() else {
            return;
        };
        if let Err(e) = clipboard.set_text(text.to_string()) {
            tracing::error!("clipboard write error: {e}");
        }
    }
}

/// In-memory stand-in used by tests.
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn write(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }
}
