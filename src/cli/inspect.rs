//! `inspect` command: read widget options back out of markup.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::json;

use super::common::{read_input, write_output};
use crate::embed::{InspectedTag, inspect};

pub fn inspect_markup(input: &Path, json: bool) -> Result<()> {
    let markup = read_input(input)?;
    let tags = inspect(&markup)?;
    let report = if json { to_json(&tags)? } else { to_text(&tags) };
    write_output(None, &report, "inspect")
}

fn to_json(tags: &[InspectedTag]) -> Result<String> {
    let tags: Vec<_> = tags
        .iter()
        .map(|tag| json!({ "src": tag.src, "options": tag.options }))
        .collect();
    Ok(serde_json::to_string_pretty(&tags)?)
}

fn to_text(tags: &[InspectedTag]) -> String {
    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "widget {} ({})", i + 1, tag.src);
        for (name, value) in tag.options.to_attributes() {
            let _ = writeln!(out, "  {:<20} {value}", name.trim_start_matches("data-"));
        }
    }
    out.trim_end().to_string()
}
