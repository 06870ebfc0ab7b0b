//! Stat command implementation.

use clap::Args;

use crate::cli::{GlobalArgs, OutputSink, Result};
use crate::viewfs::{EntryKind, ViewFs};

/// Arguments for the stat command.
#[derive(Args, Debug)]
pub struct StatArgs {
    /// Path within the namespace (empty for the root).
    #[arg(default_value = "")]
    pub path: String,

    #[command(flatten)]
    pub output: OutputSink,
}

impl StatArgs {
    pub async fn run(self, view: &ViewFs, global: &GlobalArgs) -> Result<()> {
        let attributes = view.get_attributes(&self.path).await?;

        if global.json {
            self.output.write_json(&attributes).await?;
        } else {
            let kind = match attributes.kind {
                EntryKind::Dir => "directory",
                EntryKind::File => "file",
            };
            let size = attributes
                .size
                .map(|s| format!(" {}", s))
                .unwrap_or_default();
            self.output
                .write_str(&format!("{} {:o}{}", kind, attributes.permissions, size))
                .await?;
        }

        Ok(())
    }
}
