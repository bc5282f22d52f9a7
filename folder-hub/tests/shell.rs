use folder_hub::{present::Format, shell::Shell};
use folder_hub_core::{Folder, FolderRepository, OrgId};
use std::io::Cursor;

fn repo(org: OrgId, other: OrgId) -> FolderRepository {
    FolderRepository::new(vec![
        Folder::new("alpha", "alpha", org),
        Folder::new("bravo", "alpha.bravo", org),
        Folder::new("charlie", "alpha.bravo.charlie", org),
        Folder::new("delta", "alpha.delta", org),
        Folder::new("foxtrot", "foxtrot", other),
    ])
}

/// Feed `script` to a shell and return the final repository and transcript.
fn run(repo: FolderRepository, org: OrgId, script: &str) -> (FolderRepository, String) {
    let mut output = Vec::new();
    let shell = Shell::new(repo, org, Format::Table, Cursor::new(script.to_string()), &mut output);
    let repo = shell.run().unwrap();
    (repo, String::from_utf8(output).unwrap())
}

#[test]
fn move_through_shell_updates_repository() {
    let org = OrgId::new_v4();
    let (repo, out) = run(repo(org, OrgId::new_v4()), org, "4\nbravo\ndelta\n5\n");
    assert!(out.contains("Folder bravo moved to delta successfully!"));
    assert!(out.contains("alpha.delta.bravo.charlie"));
    assert!(out.contains("Exiting."));
    let charlie = repo.folders().iter().find(|f| f.name == "charlie").unwrap();
    assert_eq!(charlie.path, "alpha.delta.bravo.charlie");
}

#[test]
fn failed_move_is_reported_and_loop_continues() {
    let org = OrgId::new_v4();
    let original = repo(org, OrgId::new_v4());
    let (repo, out) = run(original.clone(), org, "4\nbravo\ncharlie\n1\n5\n");
    assert!(out.contains("Error moving folder: cannot move folder `bravo` into its own descendant `charlie`"));
    assert!(out.contains("5 folder(s)"));
    assert_eq!(repo.folders(), original.folders());
}

#[test]
fn child_folders_uses_current_org_on_blank_input() {
    let org = OrgId::new_v4();
    let (_, out) = run(repo(org, OrgId::new_v4()), org, "3\n\nALPHA\n5\n");
    assert!(out.contains("Child folders of ALPHA:"));
    assert!(out.contains("3 folder(s)"));
}

#[test]
fn child_folders_reports_lookup_errors() {
    let org = OrgId::new_v4();
    let (_, out) = run(repo(org, OrgId::new_v4()), org, "3\n\nfoxtrot\n5\n");
    assert!(out.contains("Error listing child folders: folder `foxtrot` does not exist in organization"));
}

#[test]
fn list_by_org_switches_current_org() {
    let org = OrgId::new_v4();
    let other = OrgId::new_v4();
    let script = format!("2\n{other}\n2\n\n5\n");
    let (_, out) = run(repo(org, other), org, &script);
    assert_eq!(out.matches(&format!("Folders for orgID: {other}")).count(), 2);
    assert_eq!(out.matches("1 folder(s)").count(), 2);
}

#[test]
fn invalid_input_is_tolerated() {
    let org = OrgId::new_v4();
    let (_, out) = run(repo(org, OrgId::new_v4()), org, "9\n2\nnot-an-org\n");
    assert!(out.contains("Invalid option, please try again."));
    assert!(out.contains("Invalid OrgID `not-an-org`"));
    assert!(!out.contains("Exiting."));
}
