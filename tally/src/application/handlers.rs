use std::io::Write;
use std::path::PathBuf;

use tally_core::error::Result;
use tally_core::format_receipt;
use tally_core::sink::{CopyOutcome, TextSink, copy_to};

use super::session::Session;

/// Writes the whole memo in one go; a failure is reported as a failed copy.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TextSink for FileSink {
    fn write_text(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

pub fn handle_menu(session: &Session, out: &mut dyn Write) -> Result<()> {
    let cur = &session.config.labels.currency;
    writeln!(out, "{:<10} {:>6} {:>5}  name", "id", "price", "count")?;
    // plates first, then side items, as on the counter screen
    for item in session.catalog.plates().chain(session.catalog.sides()) {
        writeln!(
            out,
            "{:<10} {:>6} {:>5}  {}",
            item.id,
            format!("{cur}{}", item.unit_price),
            session.store.get(&item.id),
            item.display_name
        )?;
    }
    Ok(())
}

/// Unknown ids are rejected here, before they reach the store.
pub fn handle_adjust(
    session: &mut Session,
    item: &str,
    delta: i64,
    out: &mut dyn Write,
) -> Result<()> {
    let name = session.item(item)?.display_name.clone();
    let next = session.store.adjust(item, delta);
    writeln!(out, "{name}: {next}")?;
    Ok(())
}

pub fn handle_show(session: &Session, service: bool, out: &mut dyn Write) -> Result<()> {
    let labels = &session.config.labels;
    let cur = &labels.currency;
    let s = session.summary(service);
    writeln!(
        out,
        "{}: {cur}{}  ({} {})",
        labels.total, s.grand_total, s.total_item_count, labels.item_count
    )?;
    if service {
        writeln!(
            out,
            "  {}: {cur}{}  {}: {cur}{}",
            labels.subtotal, s.subtotal, labels.service_charge, s.service_charge
        )?;
    }
    for line in &s.line_items {
        writeln!(out, "  {} x{}  {cur}{}", line.name, line.quantity, line.line_total)?;
    }
    Ok(())
}

/// Render the memo and hand it to `sink`. The outcome is the copy indicator.
pub fn handle_receipt(session: &Session, service: bool, sink: &mut dyn TextSink) -> CopyOutcome {
    let summary = session.summary(service);
    let text = format_receipt(&summary, service, &session.config.labels);
    copy_to(sink, &text)
}

/// Two-step reset: without `yes`, `confirm` decides whether to clear.
pub fn handle_reset(
    session: &mut Session,
    yes: bool,
    confirm: impl FnOnce() -> bool,
    out: &mut dyn Write,
) -> Result<bool> {
    if !yes && !confirm() {
        writeln!(out, "reset: cancelled")?;
        return Ok(false);
    }
    session.store.reset();
    writeln!(out, "reset: cleared")?;
    Ok(true)
}
