use std::fs;
use std::net::Ipv4Addr;

use kgzcfg_common::account::{AccountId, generate_account_ids};
use kgzcfg_common::error::ProvisionError;
use kgzcfg_common::network::mac::normalize_and_classify;
use kgzcfg_common::network::mode::NetworkMode;
use kgzcfg_common::network::range::generate_ip_range;
use kgzcfg_core::batch::assign_and_render;
use kgzcfg_core::export::{append_deployment, append_records};
use kgzcfg_core::record::SectionKind;
use kgzcfg_core::workspace::Workspace;

use crate::util::{dhcp_params, macs, model, static_params};

/// Operator input `aa:bb:cc:dd:ee:ff, 111111111111` in DHCP mode yields one
/// phone; the degenerate address is rejected.
#[test]
fn dhcp_batch_from_operator_input() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;
    workspace.prepare()?;

    let (valid, invalid) = normalize_and_classify("aa:bb:cc:dd:ee:ff, 111111111111".split(','));
    assert_eq!(invalid, vec!["111111111111".to_string()]);

    let accounts = generate_account_ids(AccountId::new(2000), valid.len())?;
    let (records, assignments) = assign_and_render(
        &valid,
        &accounts,
        None,
        model("GRP2601P"),
        NetworkMode::Dhcp,
        &dhcp_params(Ipv4Addr::new(192, 168, 1, 10)),
    )?;

    append_records(&workspace.export_path, &records)?;
    append_deployment(&workspace.deployment_path, &assignments)?;

    let export = fs::read_to_string(&workspace.export_path)?;
    assert!(export.contains(
        "AABBCCDDEEFF,GRP2601P,0.0.0.0,https://192.168.1.10:8089/zccgi/,1.0.5.58,Grandstream,,,,8,0,5060,no,2024-07-27 16:08:27\r\n"
    ));
    assert!(export.contains("AABBCCDDEEFF,Account,1,AccountChoice,2000\r\n"));
    assert!(!export.contains("Advanced Settings"));

    assert_eq!(
        fs::read_to_string(&workspace.deployment_path)?,
        "MAC Address,AABBCCDDEEFF,Account,2000\n"
    );
    Ok(())
}

#[test]
fn static_batch_is_appended_in_mac_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "branch")?;
    workspace.prepare()?;

    let phones = macs(&["000B82000001", "000B82000002", "000B82000003"]);
    let accounts = generate_account_ids(AccountId::new(501), phones.len())?;
    let ips = generate_ip_range(Ipv4Addr::new(10, 0, 0, 5), phones.len())?;

    let (records, assignments) = assign_and_render(
        &phones,
        &accounts,
        Some(&ips[..]),
        model("GXP2170"),
        NetworkMode::Static,
        &static_params(
            Ipv4Addr::new(10, 0, 0, 2),
            "255.255.255.0",
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(8, 8, 8, 8),
        ),
    )?;

    assert!(records.iter().all(|r| r.section(SectionKind::AdvancedSettings).is_some()));

    append_records(&workspace.export_path, &records)?;
    append_deployment(&workspace.deployment_path, &assignments)?;

    let export = fs::read_to_string(&workspace.export_path)?;
    assert_eq!(export.matches("======== Device Start ========").count(), 3);
    assert!(export.contains("000B82000003,GXP2170,10.0.0.7,"));
    assert!(export.contains("000B82000003,IPAddressMode,1,StaticIP_4,7\r\n"));
    assert!(export.contains("000B82000001,IPAddressMode,1,DNSServer2_4,1\r\n"));

    let first = export.find("000B82000001,GXP2170").unwrap();
    let last = export.find("000B82000003,GXP2170").unwrap();
    assert!(first < last);

    assert_eq!(
        fs::read_to_string(&workspace.deployment_path)?,
        "MAC Address,000B82000001,IP,10.0.0.5,Account,501\n\
         MAC Address,000B82000002,IP,10.0.0.6,Account,502\n\
         MAC Address,000B82000003,IP,10.0.0.7,Account,503\n"
    );
    Ok(())
}

#[test]
fn count_mismatch_writes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;
    workspace.prepare()?;

    let phones = macs(&["000B82000001", "000B82000002", "000B82000003"]);
    let accounts = vec![AccountId::new(501), AccountId::new(502)];

    let result = assign_and_render(
        &phones,
        &accounts,
        None,
        model("GRP2601P"),
        NetworkMode::Dhcp,
        &dhcp_params(Ipv4Addr::new(10, 0, 0, 2)),
    );

    assert_eq!(result, Err(ProvisionError::CountMismatch { macs: 3, accounts: 2 }));
    assert!(fs::read_to_string(&workspace.export_path)?.is_empty());
    assert!(fs::read_to_string(&workspace.deployment_path)?.is_empty());
    Ok(())
}

#[test]
fn ip_range_past_last_octet_is_rejected() {
    let result = generate_ip_range(Ipv4Addr::new(10, 0, 0, 250), 10);
    assert!(matches!(result, Err(ProvisionError::OctetOverflow { .. })));
}

#[test]
fn reruns_append_to_the_same_site() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let phones = macs(&["000B82000001"]);
    let params = dhcp_params(Ipv4Addr::new(10, 0, 0, 2));

    for start in [100, 200] {
        let workspace = Workspace::new(dir.path(), "hq")?;
        workspace.prepare()?;
        let accounts = generate_account_ids(AccountId::new(start), 1)?;
        let (records, assignments) =
            assign_and_render(&phones, &accounts, None, model("GRP2601P"), NetworkMode::Dhcp, &params)?;
        append_records(&workspace.export_path, &records)?;
        append_deployment(&workspace.deployment_path, &assignments)?;
    }

    let workspace = Workspace::new(dir.path(), "hq")?;
    assert_eq!(
        fs::read_to_string(&workspace.deployment_path)?,
        "MAC Address,000B82000001,Account,100\nMAC Address,000B82000001,Account,200\n"
    );
    Ok(())
}

#[test]
fn listed_accounts_keep_their_digits() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let workspace = Workspace::new(dir.path(), "hq")?;
    workspace.prepare()?;
    fs::write(&workspace.account_path, "0100\n")?;

    let accounts = kgzcfg_core::sources::read_account_list(&workspace.account_path)?.accounts;
    let ips = generate_ip_range(Ipv4Addr::new(10, 0, 0, 5), 1)?;
    let (records, assignments) = assign_and_render(
        &macs(&["000B82000001"]),
        &accounts,
        Some(&ips[..]),
        model("GRP2601P"),
        NetworkMode::Static,
        &static_params(
            Ipv4Addr::new(10, 0, 0, 2),
            "255.255.255.0",
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(8, 8, 8, 8),
        ),
    )?;
    append_records(&workspace.export_path, &records)?;

    let export = fs::read_to_string(&workspace.export_path)?;
    assert!(export.contains("000B82000001,Account,1,AccountChoice,0100\r\n"));
    assert_eq!(assignments[0].summary_line(), "MAC Address,000B82000001,IP,10.0.0.5,Account,0100");
    Ok(())
}
