use std::io::Write;

use tracing::warn;

use crate::error::Result;

/// Where a copied receipt goes (clipboard, stdout, a file).
pub trait TextSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.inner.flush()?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Fire-and-forget copy; failures only show up in the outcome and the log.
pub fn copy_to(sink: &mut dyn TextSink, text: &str) -> CopyOutcome {
    match sink.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "copy failed");
            CopyOutcome::Failed
        }
    }
}
