//! Sender enumeration through the permission filter.

use super::helpers::{TestPlatform, permissive_platform, restrictive_platform};
use manometer::command::ports::CommandSender;
use manometer::config::DEFAULT_PERMISSION_NODE;
use manometer::host::domain::HostIdentity;
use manometer::host::ports::HostPlayer;
use rstest::rstest;
use uuid::Uuid;

fn sender_names(platform: &TestPlatform) -> Vec<String> {
    let mut names: Vec<String> = platform
        .adapter
        .senders_with_permission(DEFAULT_PERMISSION_NODE)
        .iter()
        .map(|sender| sender.name())
        .collect();
    names.sort();
    names
}

#[rstest]
fn only_granted_players_are_enumerated(restrictive_platform: TestPlatform) {
    let luna = restrictive_platform
        .server
        .connect_player("Luna", Uuid::new_v4());
    restrictive_platform
        .server
        .connect_player("Milo", Uuid::new_v4());
    restrictive_platform.grant_use(HostIdentity::Player(luna.unique_id()));

    assert_eq!(sender_names(&restrictive_platform), vec!["Luna".to_owned()]);
}

#[rstest]
fn console_is_included_when_it_holds_the_node(restrictive_platform: TestPlatform) {
    restrictive_platform.grant_use(HostIdentity::Console);

    assert_eq!(
        sender_names(&restrictive_platform),
        vec!["Console".to_owned()]
    );
}

#[rstest]
fn permissive_store_enumerates_everyone(permissive_platform: TestPlatform) {
    permissive_platform
        .server
        .connect_player("Luna", Uuid::new_v4());
    permissive_platform
        .server
        .connect_player("Milo", Uuid::new_v4());

    assert_eq!(
        sender_names(&permissive_platform),
        vec!["Console".to_owned(), "Luna".to_owned(), "Milo".to_owned()]
    );
}

#[rstest]
fn enumeration_reflects_a_live_player_snapshot(permissive_platform: TestPlatform) {
    let luna = permissive_platform
        .server
        .connect_player("Luna", Uuid::new_v4());
    permissive_platform
        .server
        .connect_player("Milo", Uuid::new_v4());

    permissive_platform.server.disconnect_player(luna.unique_id());

    assert_eq!(
        sender_names(&permissive_platform),
        vec!["Console".to_owned(), "Milo".to_owned()]
    );
}
