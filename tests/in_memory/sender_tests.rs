//! Sender naming, identity, and equality semantics.

use manometer::command::ports::CommandSender;
use manometer::host::adapters::memory::{InMemoryHostServer, InMemoryPermissions};
use manometer::host::domain::{HostIdentity, HostInstanceId};
use manometer::host::ports::{HostServer, PermissionLookup};
use manometer::host::services::HostSender;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

fn server() -> Arc<InMemoryHostServer> {
    Arc::new(InMemoryHostServer::new())
}

fn permissive() -> Arc<dyn PermissionLookup> {
    Arc::new(InMemoryPermissions::allow_all())
}

#[test]
fn console_sender_has_the_console_name_and_no_unique_id() {
    let server = server();
    let sender = HostSender::console(Arc::clone(&server) as Arc<dyn HostServer>, permissive());

    assert_eq!(sender.name(), "Console");
    assert_eq!(sender.unique_id(), None);
    assert_eq!(sender.identity(), HostIdentity::Console);
}

#[test]
fn console_sender_delivers_through_the_server_console() {
    let server = server();
    let sender = HostSender::console(Arc::clone(&server) as Arc<dyn HostServer>, permissive());

    sender.send_message("report ready");

    assert_eq!(server.console_messages(), vec!["report ready".to_owned()]);
}

#[test]
fn player_sender_exposes_the_player_name_and_id() {
    let server = server();
    let id = Uuid::new_v4();
    let luna = server.connect_player("Luna", id);
    let sender = HostSender::player(server.instance_id(), luna.clone(), permissive());

    assert_eq!(sender.name(), "Luna");
    assert_eq!(sender.unique_id(), Some(id));

    sender.send_message("hello");
    assert_eq!(luna.messages(), vec!["hello".to_owned()]);
}

#[test]
fn unaddressable_sender_synthesizes_a_name_and_drops_messages() {
    let sender = HostSender::unaddressable(HostInstanceId::new(), "CommandBlock", permissive());

    assert_eq!(sender.name(), "unknown:CommandBlock");
    assert_eq!(sender.unique_id(), None);
    // Delivery is suppressed rather than failing.
    sender.send_message("dropped");
}

#[test]
fn senders_wrapping_the_same_player_are_equal() {
    let server = server();
    let luna = server.connect_player("Luna", Uuid::new_v4());
    let instance = server.instance_id();

    let first = HostSender::player(instance, luna.clone(), permissive());
    let second = HostSender::player(instance, luna, permissive());

    assert_eq!(first, second);
}

#[test]
fn senders_with_the_same_name_but_different_players_differ() {
    let server = server();
    let first_luna = server.connect_player("Luna", Uuid::new_v4());
    let second_luna = server.connect_player("Luna", Uuid::new_v4());
    let instance = server.instance_id();

    let first = HostSender::player(instance, first_luna, permissive());
    let second = HostSender::player(instance, second_luna, permissive());

    assert_ne!(first, second);
}

#[test]
fn identical_identities_on_different_instances_differ() {
    let id = Uuid::new_v4();
    let first_server = server();
    let second_server = server();
    let first_player = first_server.connect_player("Luna", id);
    let second_player = second_server.connect_player("Luna", id);

    let first = HostSender::player(first_server.instance_id(), first_player, permissive());
    let second = HostSender::player(second_server.instance_id(), second_player, permissive());

    assert_ne!(first, second);
}

#[test]
fn sender_hashing_follows_equality() {
    let server = server();
    let luna = server.connect_player("Luna", Uuid::new_v4());
    let instance = server.instance_id();

    let mut seen = HashSet::new();
    seen.insert(HostSender::player(instance, luna.clone(), permissive()));
    seen.insert(HostSender::player(instance, luna, permissive()));
    seen.insert(HostSender::console(
        Arc::clone(&server) as Arc<dyn HostServer>,
        permissive(),
    ));

    assert_eq!(seen.len(), 2);
}
