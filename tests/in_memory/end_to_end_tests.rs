//! Full invocation flows from host event to operator-facing output.

use super::helpers::{
    TestPlatform, build_platform, eden_dataset, eventually, init_tracing, permissive_platform,
};
use manometer::heap::adapters::memory::{InMemoryHeapCapture, RecordingPublisher};
use manometer::host::adapters::memory::InMemoryPermissions;
use manometer::host::domain::InvocationSource;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn memory_command_renders_the_region_report(
    permissive_platform: TestPlatform,
) -> Result<(), eyre::Report> {
    let invocation = permissive_platform.invocation(InvocationSource::Console, "/manometer memory");

    permissive_platform.adapter.handle_invocation(&invocation);

    let delivered =
        eventually(|| permissive_platform.server.console_messages().len() >= 2).await;
    eyre::ensure!(delivered, "report should arrive on the console");
    let messages = permissive_platform.server.console_messages();
    assert_eq!(
        messages.first(),
        Some(&"[manometer] Memory usage:".to_owned())
    );
    let report = messages
        .get(1)
        .ok_or_else(|| eyre::eyre!("report body should follow the header"))?;
    assert!(report.contains(">> Heap"));
    assert!(report.contains("Used: 1.0 MB"));
    assert!(report.contains("Max: 4.0 GB"));
    assert!(report.contains("Type: HEAP"));
    assert!(report.contains("Managers: [Scavenge]"));
    assert!(report.contains("Scavenge --> [Eden Space]"));
    assert!(report.contains("Init: undefined"));
    Ok(())
}

#[rstest]
#[case::primary_alias("/manometer heapdump")]
#[case::short_alias("/manometer heap")]
#[tokio::test(flavor = "multi_thread")]
async fn heap_dump_publishes_and_links_the_viewer(
    permissive_platform: TestPlatform,
    #[case] input: &str,
) {
    let invocation = permissive_platform.invocation(InvocationSource::Console, input);

    permissive_platform.adapter.handle_invocation(&invocation);

    let delivered =
        eventually(|| permissive_platform.server.console_messages().len() >= 3).await;
    assert!(delivered, "heap dump output should arrive on the console");
    let messages = permissive_platform.server.console_messages();
    assert_eq!(
        messages.first(),
        Some(&"[manometer] Creating a new heap dump, please wait...".to_owned())
    );
    assert_eq!(
        messages.get(1),
        Some(&"[manometer] Heap dump output:".to_owned())
    );
    assert_eq!(
        messages.get(2),
        Some(&"https://view.manometer.dev/#aBcD12".to_owned())
    );

    assert_eq!(permissive_platform.publisher.publish_count(), 1);
    assert_eq!(
        permissive_platform.publisher.last_content_type(),
        Some("application/octet-stream".to_owned())
    );
    let payload = permissive_platform
        .publisher
        .last_payload()
        .expect("publisher should record the payload");
    let restored =
        zstd::decode_all(payload.as_slice()).expect("payload should be a valid zstd frame");
    assert_eq!(restored, b"heap contents");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn capture_failure_reports_without_reaching_the_publisher() {
    init_tracing();
    let platform = build_platform(
        eden_dataset(),
        InMemoryHeapCapture::failing("inspection rejected"),
        RecordingPublisher::with_key("aBcD12"),
        InMemoryPermissions::allow_all(),
    );
    let invocation = platform.invocation(InvocationSource::Console, "/manometer heapdump");

    platform.adapter.handle_invocation(&invocation);

    let delivered = eventually(|| platform.server.console_messages().len() >= 2).await;
    assert!(delivered, "failure reply should arrive");
    let messages = platform.server.console_messages();
    assert_eq!(
        messages.get(1),
        Some(&"[manometer] An error occurred whilst inspecting the heap.".to_owned())
    );
    assert_eq!(platform.publisher.publish_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn upload_failure_reports_with_upload_wording() {
    init_tracing();
    let platform = build_platform(
        eden_dataset(),
        InMemoryHeapCapture::with_payload(b"heap contents".to_vec()),
        RecordingPublisher::failing("service unavailable"),
        InMemoryPermissions::allow_all(),
    );
    let invocation = platform.invocation(InvocationSource::Console, "/manometer heapdump");

    platform.adapter.handle_invocation(&invocation);

    let delivered = eventually(|| platform.server.console_messages().len() >= 2).await;
    assert!(delivered, "failure reply should arrive");
    let messages = platform.server.console_messages();
    assert_eq!(
        messages.get(1),
        Some(&"[manometer] An error occurred whilst uploading the data.".to_owned())
    );
    assert_eq!(platform.capture.capture_count(), 1);
    assert_eq!(platform.publisher.publish_count(), 1);
}
