//! Human-readable rendering of folder lists.

use anyhow::Result;
use folder_hub_core::Folder;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

pub fn render<'a>(folders: impl IntoIterator<Item = &'a Folder>, format: Format) -> Result<String> {
    let folders: Vec<&Folder> = folders.into_iter().collect();
    match format {
        Format::Table => Ok(table(&folders)),
        Format::Json => Ok(serde_json::to_string_pretty(&folders)?),
    }
}

fn table(folders: &[&Folder]) -> String {
    if folders.is_empty() {
        return "(no folders)\n".to_string();
    }
    let name_width = column_width("NAME", folders.iter().map(|f| f.name.as_str()));
    let path_width = column_width("PATH", folders.iter().map(|f| f.path.as_str()));

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {:<path_width$}  ORG", "NAME", "PATH");
    for folder in folders {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<path_width$}  {}",
            folder.name, folder.path, folder.org_id
        );
    }
    let _ = writeln!(out, "{} folder(s)", folders.len());
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).max().unwrap_or(0).max(header.len())
}
