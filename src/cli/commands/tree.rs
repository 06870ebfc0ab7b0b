//! Tree command implementation.
//!
//! Prints the entire namespace: directories as `name/`, files as
//! `name[*] [size] preview`, where the preview is a bounded printable head
//! of text files and `(binary)` for binary ones.

use std::future::Future;
use std::pin::Pin;

use clap::Args;

use crate::cli::{GlobalArgs, Result};
use crate::namespace::{DirNode, FileNode, Node};
use crate::viewfs::ViewFs;

/// Arguments for the tree command.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Maximum preview length in characters (0 disables previews).
    #[arg(long, default_value_t = 40)]
    pub preview: usize,
}

impl TreeArgs {
    pub async fn run(self, view: &ViewFs, _global: &GlobalArgs) -> Result<()> {
        let Node::Dir(root) = view.root() else {
            return Ok(());
        };
        print_children(root, 0, self.preview).await
    }
}

fn print_children<'a>(
    dir: &'a DirNode,
    depth: usize,
    preview_len: usize,
) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
    Box::pin(async move {
        let children = dir.children().await?;

        let indent = "  ".repeat(depth);
        for (name, child) in &children {
            match child {
                Node::Dir(child_dir) => {
                    println!("{}{}/", indent, name);
                    print_children(child_dir, depth + 1, preview_len).await?;
                }
                Node::File(file) => {
                    let suffix = if file.executable() { "*" } else { "" };
                    let preview = file_preview(file, preview_len).await?;
                    println!("{}{}{} [{}]{}", indent, name, suffix, file.size(), preview);
                }
            }
        }
        Ok(())
    })
}

async fn file_preview(file: &FileNode, max_len: usize) -> Result<String> {
    if max_len == 0 {
        return Ok(String::new());
    }
    if file.binary() {
        return Ok(" (binary)".to_string());
    }
    let data = file.read().await?;
    Ok(format!(" \"{}\"", bounded_preview(&data, max_len)))
}

/// Reduce `data` to a bounded single-line preview: whitespace collapses to
/// spaces, other non-printable characters become the replacement character,
/// and overlong content is abridged with an ellipsis.
fn bounded_preview(data: &[u8], max_len: usize) -> String {
    let text = String::from_utf8_lossy(data);
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        if i == max_len {
            out.pop();
            out.push('…');
            break;
        }
        out.push(if c.is_whitespace() {
            ' '
        } else if c.is_control() {
            '\u{FFFD}'
        } else {
            c
        });
    }
    out
}
