//! Instance gating, prefix parsing, and permission checks at the adapter.

use super::helpers::{TestPlatform, eventually, permissive_platform, restrictive_platform};
use manometer::host::domain::{HostIdentity, HostInstanceId, HostInvocation, InvocationSource};
use manometer::host::ports::HostPlayer;
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_instance_invocation_is_a_silent_no_op(permissive_platform: TestPlatform) {
    let foreign = HostInvocation::new(
        HostInstanceId::new(),
        InvocationSource::Console,
        "/manometer heapdump",
    );

    permissive_platform.adapter.handle_invocation(&foreign);

    // The gate rejects before dispatch, so nothing is spawned to wait for.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(permissive_platform.server.console_messages().is_empty());
    assert_eq!(permissive_platform.capture.capture_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn input_without_the_platform_prefix_is_ignored(permissive_platform: TestPlatform) {
    let invocation =
        permissive_platform.invocation(InvocationSource::Console, "/othertool heapdump");

    permissive_platform.adapter.handle_invocation(&invocation);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(permissive_platform.server.console_messages().is_empty());
    assert_eq!(permissive_platform.capture.capture_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_subcommand_draws_exactly_one_message(permissive_platform: TestPlatform) {
    let invocation = permissive_platform.invocation(InvocationSource::Console, "/manometer bogus");

    permissive_platform.adapter.handle_invocation(&invocation);

    let delivered = eventually(|| !permissive_platform.server.console_messages().is_empty()).await;
    assert!(delivered, "unknown-command reply should arrive");
    let messages = permissive_platform.server.console_messages();
    assert_eq!(messages, vec!["[manometer] Unknown command.".to_owned()]);
    assert_eq!(permissive_platform.capture.capture_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sender_without_the_node_is_denied_before_dispatch(restrictive_platform: TestPlatform) {
    let invocation =
        restrictive_platform.invocation(InvocationSource::Console, "/manometer heapdump");

    restrictive_platform.adapter.handle_invocation(&invocation);

    let delivered = eventually(|| !restrictive_platform.server.console_messages().is_empty()).await;
    assert!(delivered, "denial reply should arrive");
    let messages = restrictive_platform.server.console_messages();
    assert_eq!(
        messages,
        vec!["[manometer] You do not have permission to use this command.".to_owned()]
    );
    assert_eq!(restrictive_platform.capture.capture_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn granted_player_passes_the_permission_gate(restrictive_platform: TestPlatform) {
    let player = restrictive_platform
        .server
        .connect_player("Luna", uuid::Uuid::new_v4());
    restrictive_platform.grant_use(HostIdentity::Player(player.unique_id()));
    let invocation = restrictive_platform.invocation(
        InvocationSource::Player(player.clone()),
        "/manometer memory",
    );

    restrictive_platform.adapter.handle_invocation(&invocation);

    let delivered = eventually(|| !player.messages().is_empty()).await;
    assert!(delivered, "report reply should arrive");
    assert!(
        player
            .messages()
            .first()
            .is_some_and(|m| m.contains("Memory usage:"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_are_gated_by_instance(permissive_platform: TestPlatform) {
    let foreign = HostInvocation::new(
        HostInstanceId::new(),
        InvocationSource::Console,
        "/manometer he",
    );

    let candidates = permissive_platform.adapter.suggest(&foreign).await;

    assert!(candidates.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_complete_alias_prefixes(permissive_platform: TestPlatform) {
    let invocation = permissive_platform.invocation(InvocationSource::Console, "/manometer he");

    let candidates = permissive_platform.adapter.suggest(&invocation).await;

    assert_eq!(candidates, vec!["heap".to_owned(), "heapdump".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_are_empty_without_permission(restrictive_platform: TestPlatform) {
    let invocation = restrictive_platform.invocation(InvocationSource::Console, "/manometer he");

    let candidates = restrictive_platform.adapter.suggest(&invocation).await;

    assert!(candidates.is_empty());
}
