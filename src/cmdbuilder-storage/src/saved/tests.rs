//! Tests for saved command storage.

use tempfile::tempdir;

use cmdbuilder_core::{Command, ParamType, Parameter};

use super::storage::next_id;
use crate::error::StorageError;
use crate::paths::StoragePaths;
use crate::saved::{SavedCommand, SavedCommandStore};
use crate::store::{COMMANDS_KEY, LocalStore};

fn store_in(dir: &std::path::Path) -> SavedCommandStore {
    let paths = StoragePaths::from_root(dir.to_path_buf());
    SavedCommandStore::new(LocalStore::with_paths(paths))
}

fn heal() -> Command {
    let mut cmd = Command::new("example:heal", "Heals a player");
    cmd.mandatory_parameters
        .push(Parameter::new("target", ParamType::PlayerSelector));
    cmd
}

#[test]
fn test_saved_command_crud() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    assert!(store.list().unwrap().is_empty());

    // Save
    let saved = store.save(heal()).unwrap();
    assert!(saved.id.parse::<i64>().is_ok());

    // Get
    let retrieved = store.get(&saved.id).unwrap();
    assert_eq!(retrieved, saved);

    // Update
    let mut edited = heal();
    edited.description = "Heals everyone".to_string();
    let updated = store.update(&saved.id, edited).unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(store.get(&saved.id).unwrap().command.description, "Heals everyone");

    // Remove
    assert!(store.remove(&saved.id).unwrap());
    assert!(!store.remove(&saved.id).unwrap());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_save_preserves_order_and_unique_ids() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let first = store.save(Command::new("a:one", "")).unwrap();
    let second = store.save(Command::new("a:two", "")).unwrap();
    let third = store.save(Command::new("a:three", "")).unwrap();

    let list = store.list().unwrap();
    let names: Vec<_> = list.iter().map(|c| c.command.name.as_str()).collect();
    assert_eq!(names, vec!["a:one", "a:two", "a:three"]);

    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
    assert_ne!(first.id, third.id);
}

#[test]
fn test_next_id_bumps_collisions() {
    let existing = vec![
        SavedCommand::with_id("100", Command::default()),
        SavedCommand::with_id("101", Command::default()),
    ];

    assert_eq!(next_id(&existing, 100), "102");
    assert_eq!(next_id(&existing, 99), "99");
    assert_eq!(next_id(&[], 100), "100");
}

#[test]
fn test_update_missing_command() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let result = store.update("missing", heal());
    assert!(matches!(result, Err(StorageError::CommandNotFound(id)) if id == "missing"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_malformed_list_loads_empty() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    store.store().set_item(COMMANDS_KEY, "{not valid json").unwrap();
    assert!(store.list().unwrap().is_empty());

    // A save after a failed load starts a fresh list.
    store.save(heal()).unwrap();
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_reads_list_written_by_browser_tool() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let raw = r#"[{
        "id": "1717171717171",
        "name": "example:tp",
        "description": "Teleport",
        "cheatsRequired": true,
        "permissionLevel": "2",
        "enums": [{"name": "example:dim", "values": ["overworld", "nether"]}],
        "mandatoryParameters": [{"name": "dim", "type": "Enum", "enumName": "example:dim", "description": ""}],
        "optionalParameters": []
    }]"#;
    store.store().set_item(COMMANDS_KEY, raw).unwrap();

    let list = store.list().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "1717171717171");
    assert_eq!(list[0].command.enums[0].values, vec!["overworld", "nether"]);
    assert_eq!(
        list[0].command.mandatory_parameters[0].enum_name.as_deref(),
        Some("example:dim")
    );
}
