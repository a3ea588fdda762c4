use std::io::Write;

use colored::*;
use serde::Serialize;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: "knetctl::print", "{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn summary(nodes: usize, links: usize, skipped: usize) {
    let nodes: ColoredString = format!("{nodes} nodes").bold().green();
    let links: ColoredString = format!("{links} links").bold().green();
    if skipped == 0 {
        print(&format!("Mapped {nodes} and {links}"));
    } else {
        let skipped: ColoredString = format!("{skipped} skipped").bold().yellow();
        print(&format!("Mapped {nodes} and {links} ({skipped})"));
    }
}

/// Writes every item as its own YAML document, each introduced by `---`.
pub fn write_documents<W, T>(out: &mut W, items: &[T]) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    for item in items {
        writeln!(out, "---")?;
        out.write_all(serde_yaml::to_string(item)?.as_bytes())?;
    }
    Ok(())
}
