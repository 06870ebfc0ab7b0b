//! Cat command implementation.

use clap::Args;

use crate::cli::{GlobalArgs, OutputSink, Result};
use crate::viewfs::ViewFs;

/// Arguments for the cat command.
#[derive(Args, Debug)]
pub struct CatArgs {
    /// Path of the file within the namespace.
    pub path: String,

    #[command(flatten)]
    pub output: OutputSink,
}

impl CatArgs {
    pub async fn run(self, view: &ViewFs, _global: &GlobalArgs) -> Result<()> {
        let data = view.read_file(&self.path).await?;
        self.output.write_bytes(&data).await?;
        Ok(())
    }
}
