use crate::LineAlignment;
use crate::areas::session::Session;
use crate::artifacts::core::PagerWriter;
use crate::artifacts::diff::lcs::AlignLimits;
use crate::artifacts::diff::pairing::pair_lines;
use crate::artifacts::diff::row::{Row, RowSummary};
use crate::artifacts::document::html::HtmlDocument;
use crate::artifacts::document::terminal::TerminalPreview;
use crate::errors::DiffError;
use minus::Pager;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub old: PathBuf,
    pub new: PathBuf,
    pub output: PathBuf,
    pub alignment: LineAlignment,
    pub limits: AlignLimits,
    pub preview: bool,
    pub page: bool,
}

impl Session {
    pub fn compare(&self, opts: &CompareOptions) -> anyhow::Result<RowSummary> {
        debug!(root = %self.path().display(), ?opts, "starting comparison");

        // both inputs are read before the output is created, so a bad input
        // never truncates an existing report
        let old_lines = self.workspace().read_lines(&opts.old)?;
        let new_lines = self.workspace().read_lines(&opts.new)?;

        let rows = pair_lines(&old_lines, &new_lines, opts.alignment, opts.limits)?;
        let summary = RowSummary::of(&rows);

        self.write_document(opts, &rows)?;
        info!(%summary, output = %opts.output.display(), "wrote diff document");

        if opts.preview {
            self.print_preview(opts, &rows)?;
        }

        writeln!(self.writer(), "Diff saved to {}", opts.output.display())?;

        Ok(summary)
    }

    fn write_document(&self, opts: &CompareOptions, rows: &[Row]) -> anyhow::Result<()> {
        let old_label = opts.old.to_string_lossy();
        let new_label = opts.new.to_string_lossy();
        let mut output = self.workspace().create_file(&opts.output)?;

        HtmlDocument::new(&old_label, &new_label)
            .write(&mut output, rows)
            .and_then(|_| output.flush())
            .map_err(|e| DiffError::io(&opts.output, e))?;

        Ok(())
    }

    fn print_preview(&self, opts: &CompareOptions, rows: &[Row]) -> anyhow::Result<()> {
        let preview = TerminalPreview::for_rows(rows);

        if opts.page {
            let pager = Pager::new();
            pager.set_prompt(format!(
                "{} (old) | {} (new)",
                opts.old.display(),
                opts.new.display()
            ))?;
            preview.write(&mut PagerWriter::new(pager.clone()), rows)?;
            minus::page_all(pager)?;
        } else {
            preview.write(&mut **self.writer(), rows)?;
        }

        Ok(())
    }
}
