//! Interactive menu over a folder repository.

use crate::present::{render, Format};
use anyhow::Result;
use folder_hub_core::{FolderRepository, OrgId};
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "
Select an option:
1. List all folders
2. List folders by OrgID
3. List child folders
4. Move a folder
5. Exit";

pub struct Shell<R, W> {
    repo: FolderRepository,
    org: OrgId,
    format: Format,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(repo: FolderRepository, org: OrgId, format: Format, input: R, output: W) -> Self {
        Self {
            repo,
            org,
            format,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends. Returns the repository with
    /// every move applied.
    pub fn run(mut self) -> Result<FolderRepository> {
        writeln!(self.output, "\n---------------------")?;
        writeln!(self.output, "CLI Folder Explorer")?;
        writeln!(self.output, "---------------------")?;
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("\nEnter your choice: ")? else {
                break;
            };
            debug!(%choice, "menu choice");
            match choice.as_str() {
                "1" => {
                    let out = render(self.repo.folders(), self.format)?;
                    write!(self.output, "{out}")?;
                }
                "2" => self.list_by_org()?,
                "3" => self.child_folders()?,
                "4" => self.move_folder()?,
                "5" => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option, please try again.")?,
            }
        }
        Ok(self.repo)
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for an org id; blank keeps the current one.
    fn read_org(&mut self) -> Result<Option<OrgId>> {
        let Some(input) = self.prompt("Enter OrgID (or press Enter for current): ")? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(self.org));
        }
        match input.parse() {
            Ok(org) => {
                self.org = org;
                Ok(Some(org))
            }
            Err(err) => {
                writeln!(self.output, "Invalid OrgID `{input}`: {err}")?;
                Ok(None)
            }
        }
    }

    fn list_by_org(&mut self) -> Result<()> {
        let Some(org) = self.read_org()? else {
            return Ok(());
        };
        let out = render(self.repo.folders_by_org(org), self.format)?;
        writeln!(self.output, "\nFolders for orgID: {org}")?;
        write!(self.output, "{out}")?;
        Ok(())
    }

    fn child_folders(&mut self) -> Result<()> {
        let Some(org) = self.read_org()? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter the folder name: ")? else {
            return Ok(());
        };
        match self.repo.child_folders(org, &name) {
            Ok(children) => {
                let out = render(children, self.format)?;
                writeln!(self.output, "\nChild folders of {name}:")?;
                write!(self.output, "{out}")?;
            }
            Err(err) => writeln!(self.output, "Error listing child folders: {err}")?,
        }
        Ok(())
    }

    fn move_folder(&mut self) -> Result<()> {
        let Some(source) = self.prompt("Enter the name of the folder to move: ")? else {
            return Ok(());
        };
        let Some(destination) = self.prompt("Enter the destination folder name: ")? else {
            return Ok(());
        };
        match self.repo.move_folder(&source, &destination) {
            Ok(folders) => {
                let out = render(folders, self.format)?;
                writeln!(
                    self.output,
                    "Folder {source} moved to {destination} successfully!"
                )?;
                write!(self.output, "{out}")?;
            }
            Err(err) => writeln!(self.output, "Error moving folder: {err}")?,
        }
        Ok(())
    }
}
