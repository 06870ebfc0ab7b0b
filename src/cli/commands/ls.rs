//! Ls command implementation.

use clap::Args;

use crate::cli::{GlobalArgs, OutputSink, Result};
use crate::viewfs::{EntryKind, ViewFs};

/// Arguments for the ls command.
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Path within the namespace (empty for the root).
    #[arg(default_value = "")]
    pub path: String,

    /// Append `/` to directories and `*` to executables.
    #[arg(short = 'F', long)]
    pub classify: bool,

    #[command(flatten)]
    pub output: OutputSink,
}

impl LsArgs {
    pub async fn run(self, view: &ViewFs, global: &GlobalArgs) -> Result<()> {
        let listing = view.list_directory(&self.path).await?;

        if global.json {
            self.output.write_json(&listing).await?;
            return Ok(());
        }

        let mut lines = Vec::with_capacity(listing.len());
        for entry in &listing {
            let size = entry
                .size
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let suffix = if self.classify {
                match entry.kind {
                    EntryKind::Dir => "/",
                    EntryKind::File if entry.permissions & 0o111 != 0 => "*",
                    EntryKind::File => "",
                }
            } else {
                ""
            };
            lines.push(format!(
                "{:o} {:>8} {}{}",
                entry.permissions, size, entry.name, suffix
            ));
        }
        self.output.write_str(&lines.join("\n")).await?;

        Ok(())
    }
}
