//! Black-box tests for the list/create command surface, asserting the
//! exact output lines captured by `MockLog`.

mod common;

use avdkit::commands::{CreateAvdCommand, ListAvdCommand, ListTargetsCommand};
use avdkit_avd::{AvdError, CreateAvdRequest, DeviceConfigStore, ScriptedInput};
use avdkit_sdk::{MockLog, SdkRepository};

use common::FakeSdk;

async fn list_targets(repo: &SdkRepository, compact: bool) -> Vec<String> {
    let log = MockLog::new();
    ListTargetsCommand { compact }.execute(repo, &log);
    log.entries()
}

async fn list_avd(fixture: &FakeSdk, repo: &SdkRepository, compact: bool) -> Vec<String> {
    let log = MockLog::new();
    let store = DeviceConfigStore::new(fixture.avd_root());
    ListAvdCommand { compact }
        .execute(repo, &store, &log)
        .await
        .unwrap();
    log.entries()
}

async fn create_avd(
    fixture: &FakeSdk,
    repo: &SdkRepository,
    target: Option<&str>,
    name: Option<&str>,
    tag: Option<&str>,
    abi: Option<&str>,
) -> (Vec<String>, Result<(), AvdError>) {
    let log = MockLog::new();
    let store = DeviceConfigStore::new(fixture.avd_root());
    let input = ScriptedInput::new(["no"]);
    let request = CreateAvdRequest {
        target: target.map(String::from),
        name: name.map(String::from),
        tag: tag.map(String::from),
        abi: abi.map(String::from),
    };
    let result = CreateAvdCommand { request }
        .execute(repo, &store, &log, &input)
        .await;
    (log.entries(), result)
}

fn creation_lines(name: &str, processor: &str) -> Vec<String> {
    vec![
        "P Android 0.0 is a basic Android platform.".to_string(),
        "P Do you wish to create a custom hardware profile [no]".to_string(),
        format!("P Created AVD '{name}' based on Android 0.0, {processor} processor"),
    ]
}

#[tokio::test]
async fn list_targets_full_and_compact() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    assert_eq!(
        list_targets(&repo, false).await,
        vec![
            "P Available Android targets:",
            "P ----------",
            "P id: 1 or \"android-0\"",
            "P      Name: Android 0.0",
            "P      Type: Platform",
            "P      API level: 0",
            "P      Revision: 1",
            "P      Skins: HVGA (default), Tag1ArmSkin, Tag1X86Skin",
            "P  Tag/ABIs : default/armeabi, tag-1/armeabi, tag-1/x86",
        ]
    );

    assert_eq!(list_targets(&repo, true).await, vec!["P android-0"]);
}

#[tokio::test]
async fn list_avd_is_initially_empty() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    assert_eq!(
        list_avd(&fixture, &repo, false).await,
        vec!["P Available Android Virtual Devices:"]
    );
    assert!(list_avd(&fixture, &repo, true).await.is_empty());
}

#[tokio::test]
async fn create_avd_resolves_tags_and_round_trips_through_list() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let (lines, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("my-avd"),
        None,
        Some("armeabi"),
    )
    .await;
    result.unwrap();
    assert_eq!(lines, creation_lines("my-avd", "ARM (armeabi)"));

    let (lines, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("my-avd2"),
        None,
        Some("default/armeabi"),
    )
    .await;
    result.unwrap();
    assert_eq!(lines, creation_lines("my-avd2", "ARM (armeabi)"));

    let (lines, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("avd-for-tag1"),
        None,
        Some("tag-1/armeabi"),
    )
    .await;
    result.unwrap();
    assert_eq!(lines, creation_lines("avd-for-tag1", "Tag 1 ARM (armeabi)"));

    let (lines, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("avd-for-tag2"),
        Some("tag-1"),
        Some("armeabi"),
    )
    .await;
    result.unwrap();
    assert_eq!(lines, creation_lines("avd-for-tag2", "Tag 1 ARM (armeabi)"));

    // The listing is sorted by name and shows each record verbatim.
    let mut expected = vec!["P Available Android Virtual Devices:".to_string()];
    for (i, (name, tag_abi)) in [
        ("avd-for-tag1", "tag-1/armeabi"),
        ("avd-for-tag2", "tag-1/armeabi"),
        ("my-avd", "default/armeabi"),
        ("my-avd2", "default/armeabi"),
    ]
    .iter()
    .enumerate()
    {
        if i > 0 {
            expected.push("P ---------".to_string());
        }
        expected.push(format!("P     Name: {name}"));
        expected.push(format!(
            "P     Path: {}",
            fixture.avd_root().join(format!("{name}.avd")).display()
        ));
        expected.push("P   Target: Android 0.0 (API level 0)".to_string());
        expected.push(format!("P  Tag/ABI: {tag_abi}"));
        expected.push("P     Skin: HVGA".to_string());
    }
    assert_eq!(list_avd(&fixture, &repo, false).await, expected);

    assert_eq!(
        list_avd(&fixture, &repo, true).await,
        vec![
            "P avd-for-tag1",
            "P avd-for-tag2",
            "P my-avd",
            "P my-avd2",
        ]
    );
}

#[tokio::test]
async fn create_avd_error_matrix() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let cases: &[(Option<&str>, Option<&str>, Option<&str>, Option<&str>, &str)] = &[
        (
            None,
            Some("my-avd"),
            None,
            Some("armeabi"),
            "The parameter --target must be defined for action 'create avd'",
        ),
        (
            Some("android-0"),
            None,
            None,
            Some("armeabi"),
            "The parameter --name must be defined for action 'create avd'",
        ),
        (
            Some("android-0"),
            Some("my-avd"),
            None,
            None,
            "This platform has more than one ABI. Please specify one using --abi",
        ),
        (
            Some("android-0"),
            Some("my-avd"),
            None,
            Some("abi/too/long"),
            "Invalid --abi abi/too/long: expected format 'abi' or 'tag/abi'",
        ),
        (
            Some("android-0"),
            Some("my-avd"),
            Some("tag-1"),
            Some("other-tag/armeabi"),
            "--tag tag-1 conflicts with --abi other-tag/armeabi",
        ),
        (
            Some("android-0"),
            Some("my-avd"),
            Some("not-a-tag"),
            Some("armeabi"),
            "Invalid --tag not-a-tag for the selected target",
        ),
        (
            Some("android-0"),
            Some("my-avd"),
            Some("tag-1"),
            Some("not-an-abi"),
            "Invalid --abi not-an-abi for the selected target",
        ),
        (
            Some("android-9"),
            Some("my-avd"),
            None,
            Some("armeabi"),
            "Invalid --target android-9: use 'list targets' to get the target ids",
        ),
    ];

    for (target, name, tag, abi, expected) in cases {
        let (lines, result) = create_avd(&fixture, &repo, *target, *name, *tag, *abi).await;
        let err = result.unwrap_err();
        assert_eq!(&err.to_string(), expected);
        assert!(lines.is_empty(), "no output expected before {expected:?}");
    }

    // Nothing was persisted by any failed attempt.
    assert_eq!(
        list_avd(&fixture, &repo, false).await,
        vec!["P Available Android Virtual Devices:"]
    );
}

#[tokio::test]
async fn single_variant_target_creates_without_abi() {
    let fixture = FakeSdk::basic().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let (lines, result) =
        create_avd(&fixture, &repo, Some("android-0"), Some("solo"), None, None).await;
    result.unwrap();
    assert_eq!(lines, creation_lines("solo", "ARM (armeabi)"));

    let listed = list_avd(&fixture, &repo, true).await;
    assert_eq!(listed, vec!["P solo"]);
}

#[tokio::test]
async fn skinless_avd_lists_without_a_skin_line() {
    let fixture = FakeSdk::skinless().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let (lines, result) =
        create_avd(&fixture, &repo, Some("android-0"), Some("bare"), None, None).await;
    result.unwrap();
    assert_eq!(lines, creation_lines("bare", "ARM (armeabi)"));

    assert_eq!(
        list_avd(&fixture, &repo, false).await,
        vec![
            "P Available Android Virtual Devices:".to_string(),
            "P     Name: bare".to_string(),
            format!("P     Path: {}", fixture.avd_root().join("bare.avd").display()),
            "P   Target: Android 0.0 (API level 0)".to_string(),
            "P  Tag/ABI: default/armeabi".to_string(),
        ]
    );
}

#[tokio::test]
async fn listing_shows_the_stored_id_when_the_target_is_gone() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let (_, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("orphan"),
        None,
        Some("armeabi"),
    )
    .await;
    result.unwrap();

    // Rescan an SDK that no longer carries the platform.
    let empty = tempfile::tempdir().unwrap();
    let bare_repo = SdkRepository::scan(empty.path()).await.unwrap();

    assert_eq!(
        list_avd(&fixture, &bare_repo, false).await,
        vec![
            "P Available Android Virtual Devices:".to_string(),
            "P     Name: orphan".to_string(),
            format!(
                "P     Path: {}",
                fixture.avd_root().join("orphan.avd").display()
            ),
            "P   Target: android-0".to_string(),
            "P  Tag/ABI: default/armeabi".to_string(),
            "P     Skin: HVGA".to_string(),
        ]
    );
}

#[tokio::test]
async fn recreating_an_existing_name_is_rejected() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let (_, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("my-avd"),
        None,
        Some("armeabi"),
    )
    .await;
    result.unwrap();

    let (lines, result) = create_avd(
        &fixture,
        &repo,
        Some("android-0"),
        Some("My-AVD"),
        None,
        Some("armeabi"),
    )
    .await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "AVD 'My-AVD' already exists");
    assert!(lines.is_empty());
}

#[tokio::test]
async fn numeric_target_index_is_accepted() {
    let fixture = FakeSdk::new().await;
    let repo = SdkRepository::scan(fixture.sdk_root()).await.unwrap();

    let (lines, result) =
        create_avd(&fixture, &repo, Some("1"), Some("by-index"), None, Some("armeabi")).await;
    result.unwrap();
    assert_eq!(lines, creation_lines("by-index", "ARM (armeabi)"));
}
