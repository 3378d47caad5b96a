use chrono::{TimeZone, Utc};
use collector::classifier::WalletLists;
use collector::error::PullError;
use collector::writer::write_lists;

fn stamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 45).unwrap()
}

fn lists(
    complete: &[&str],
    by_chain: &[(&str, &[&str])],
    unrecognized: &[&str],
) -> WalletLists {
    WalletLists {
        complete: complete.iter().map(|s| s.to_string()).collect(),
        by_chain: by_chain
            .iter()
            .map(|(chain, addresses)| {
                (
                    chain.to_string(),
                    addresses.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect(),
        unrecognized: unrecognized.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn header_then_blank_line_then_addresses() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_lists(
        dir.path(),
        &lists(&["1a", "0xb"], &[("Bitcoin", &["1a"])], &[]),
        stamp(),
    )
    .expect("write");

    let complete =
        std::fs::read_to_string(dir.path().join("1_Complete_Sanctioned_Wallet_List.txt"))
            .expect("complete file");
    assert_eq!(complete, "# Last Updated: 2026-08-06 12:30:45 UTC\n\n1a\n0xb\n");
}

#[test]
fn chain_files_are_numbered_from_two_in_first_seen_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = write_lists(
        dir.path(),
        &lists(
            &["Ta", "1b", "zz"],
            &[("Tron", &["Ta"]), ("Bitcoin", &["1b"])],
            &["zz"],
        ),
        stamp(),
    )
    .expect("write");

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "1_Complete_Sanctioned_Wallet_List.txt",
            "2_Tron_Sanctioned_Wallet_List.txt",
            "3_Bitcoin_Sanctioned_Wallet_List.txt",
            "4_Unrecognized_Blockchain_Sanctioned_Wallet_List.txt",
        ]
    );
    for name in &names {
        assert!(dir.path().join(name).exists(), "{name} missing on disk");
    }
}

#[test]
fn no_unrecognized_file_when_every_wallet_classified() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_lists(dir.path(), &lists(&["1a"], &[("Bitcoin", &["1a"])], &[]), stamp())
        .expect("write");

    assert!(!dir
        .path()
        .join("3_Unrecognized_Blockchain_Sanctioned_Wallet_List.txt")
        .exists());
}

#[test]
fn rerun_overwrites_previous_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_lists(dir.path(), &lists(&["old"], &[], &[]), stamp()).expect("first write");
    write_lists(dir.path(), &lists(&["new"], &[], &[]), stamp()).expect("second write");

    let complete =
        std::fs::read_to_string(dir.path().join("1_Complete_Sanctioned_Wallet_List.txt"))
            .expect("complete file");
    assert!(complete.contains("new"));
    assert!(!complete.contains("old"));
}

#[test]
fn missing_output_directory_is_a_write_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = write_lists(
        &dir.path().join("does-not-exist"),
        &lists(&["1a"], &[], &[]),
        stamp(),
    )
    .expect_err("missing directory must fail");

    assert!(matches!(err, PullError::Write { .. }));
}
