use std::fs;

use kgzcfg_common::account::AccountId;
use kgzcfg_common::network::mac::normalize_and_classify;
use kgzcfg_core::error::SourceError;
use kgzcfg_core::sources::{read_account_list, read_mac_list};
use kgzcfg_core::workspace::Workspace;

#[test]
fn list_files_feed_the_batch() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;
    workspace.prepare()?;

    fs::write(
        &workspace.mac_path,
        "# phones for floor 2\n000B82000001\n\n00-0b-82-00-00-02  # reception\nnot-a-mac\n",
    )?;
    fs::write(&workspace.account_path, "501\n502\nx\n")?;

    let tokens = read_mac_list(&workspace.mac_path)?;
    let (valid, invalid) = normalize_and_classify(&tokens);
    assert_eq!(valid.len(), 2);
    assert_eq!(valid[1].to_string(), "000B82000002");
    assert_eq!(invalid, vec!["not-a-mac".to_string()]);

    let accounts = read_account_list(&workspace.account_path)?;
    assert_eq!(accounts.accounts, vec![AccountId::new(501), AccountId::new(502)]);
    assert_eq!(accounts.skipped, vec!["x".to_string()]);
    Ok(())
}

#[test]
fn mac_list_accepts_inventory_pastes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;
    workspace.prepare()?;
    fs::write(
        &workspace.mac_path,
        "Phone 1: 00:0B:82:11:22:33\n000B82112234 000B82112235\n",
    )?;

    let tokens = read_mac_list(&workspace.mac_path)?;
    let (valid, invalid) = normalize_and_classify(&tokens);
    let valid: Vec<String> = valid.iter().map(|mac| mac.to_string()).collect();

    assert_eq!(valid, vec!["000B82112233", "000B82112234", "000B82112235"]);
    assert!(invalid.is_empty());
    Ok(())
}

#[test]
fn missing_list_files_are_absent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;

    assert!(matches!(
        read_mac_list(&workspace.mac_path),
        Err(SourceError::FileAbsent { .. })
    ));
    assert!(matches!(
        read_account_list(&workspace.account_path),
        Err(SourceError::FileAbsent { .. })
    ));
    Ok(())
}

#[test]
fn directory_in_place_of_list_is_unreadable() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;
    fs::create_dir_all(&workspace.mac_path)?;

    assert!(matches!(
        read_mac_list(&workspace.mac_path),
        Err(SourceError::FileUnreadable { .. })
    ));
    Ok(())
}
