use copypasta::{ClipboardContext as CopyPastaClipboardContext, ClipboardProvider};

/// Manages access to the system clipboard.
pub struct Clipboard {
    context: CopyPastaClipboardContext,
}

impl Clipboard {
    /// Return a new clipboard.
    pub fn new() -> Self {
        let context = CopyPastaClipboardContext::new().unwrap();
        Self { context }
    }

    /// Set the contents of the clipboard.
    pub fn copy(&mut self, contents: String) {
        #[cfg(feature = "logging")]
        log::debug!("Setting the clipboard contents to \"{}\"...", contents);

        self.context.set_contents(contents).unwrap();

        // NOTE: Reading the contents back makes the write stick on some X11 clipboard
        // managers. See https://github.com/alacritty/copypasta/issues/49
        let _ = self.context.get_contents().unwrap();
    }
}
