//! Shared test helpers wiring a full in-memory diagnostics platform.

use manometer::command::modules::MemoryModule;
use manometer::command::services::{CommandDispatcher, CommandModule, CommandRegistry};
use manometer::config::{DEFAULT_PERMISSION_NODE, DiagnosticsConfig};
use manometer::heap::adapters::memory::{InMemoryHeapCapture, RecordingPublisher};
use manometer::heap::services::HeapDumpService;
use manometer::host::adapters::memory::{InMemoryHostServer, InMemoryPermissions};
use manometer::host::domain::{HostIdentity, HostInstanceId, HostInvocation, InvocationSource};
use manometer::host::ports::{HostServer, PermissionLookup};
use manometer::host::services::HostCommandAdapter;
use manometer::memory::adapters::memory::InMemoryRegionSource;
use manometer::memory::domain::{
    MemoryCounters, MemoryManager, MemoryOverview, MemoryRegion, RegionKind,
};
use manometer::memory::services::MemoryReportService;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use std::time::Duration;

/// A fully wired in-memory diagnostics platform.
pub struct TestPlatform {
    /// The host server instance the adapter is bound to.
    pub server: Arc<InMemoryHostServer>,
    /// The permission store backing every sender.
    pub permissions: Arc<InMemoryPermissions>,
    /// The heap capture collaborator.
    pub capture: Arc<InMemoryHeapCapture>,
    /// The recording publish collaborator.
    pub publisher: Arc<RecordingPublisher>,
    /// The adapter under test.
    pub adapter: HostCommandAdapter,
}

impl TestPlatform {
    /// Returns the adapter's own instance identifier.
    pub fn instance(&self) -> HostInstanceId {
        self.server.instance_id()
    }

    /// Builds an invocation event addressed to this platform's instance.
    pub fn invocation(&self, source: InvocationSource, input: &str) -> HostInvocation {
        HostInvocation::new(self.instance(), source, input)
    }

    /// Grants the diagnostics permission node to an identity.
    pub fn grant_use(&self, identity: HostIdentity) {
        self.permissions.grant(identity, DEFAULT_PERMISSION_NODE);
    }
}

/// Region dataset with a single heap region managed by one manager.
pub fn eden_dataset() -> InMemoryRegionSource {
    let usage = MemoryCounters::new(1_048_576, 1_048_576, 2_097_152, 4_294_967_296);
    let peak = MemoryCounters::new(1_048_576, 2_097_152, 2_097_152, 4_294_967_296);
    InMemoryRegionSource::new(
        MemoryOverview::new(usage, MemoryCounters::partial(524_288, 1_048_576)),
        vec![MemoryManager::new(
            "Scavenge",
            vec!["Eden Space".to_owned()],
        )],
        vec![MemoryRegion::new(
            "Eden Space",
            RegionKind::Heap,
            vec!["Scavenge".to_owned()],
            usage,
            peak,
        )],
    )
}

/// Wires a platform over explicit collaborators.
pub fn build_platform(
    source: InMemoryRegionSource,
    capture: InMemoryHeapCapture,
    publisher: RecordingPublisher,
    permissions: InMemoryPermissions,
) -> TestPlatform {
    let config = DiagnosticsConfig::default();

    let report = MemoryReportService::new(Arc::new(source), Arc::new(DefaultClock));
    let capture = Arc::new(capture);
    let publisher = Arc::new(publisher);
    let heap = HeapDumpService::new(
        Arc::clone(&capture),
        Arc::clone(&publisher),
        config.viewer_base_url.clone(),
    );
    let module = MemoryModule::new(
        Arc::new(report),
        Arc::new(heap),
        config.message_prefix.clone(),
    );

    let mut registry = CommandRegistry::new();
    module
        .register_commands(&mut registry)
        .expect("module registration should succeed");
    let dispatcher = CommandDispatcher::new(
        Arc::new(registry),
        config.permission_node.clone(),
        config.message_prefix.clone(),
    );

    let server = Arc::new(InMemoryHostServer::new());
    let permissions = Arc::new(permissions);
    let adapter = HostCommandAdapter::new(
        Arc::clone(&server) as Arc<dyn HostServer>,
        Arc::clone(&permissions) as Arc<dyn PermissionLookup>,
        Arc::new(dispatcher),
        config.command_prefix.clone(),
    );

    TestPlatform {
        server,
        permissions,
        capture,
        publisher,
        adapter,
    }
}

/// Provides a platform with the eden dataset and permissive permissions.
#[fixture]
pub fn permissive_platform() -> TestPlatform {
    build_platform(
        eden_dataset(),
        InMemoryHeapCapture::with_payload(b"heap contents".to_vec()),
        RecordingPublisher::with_key("aBcD12"),
        InMemoryPermissions::allow_all(),
    )
}

/// Provides a platform with the eden dataset and an empty permission store.
#[fixture]
pub fn restrictive_platform() -> TestPlatform {
    build_platform(
        eden_dataset(),
        InMemoryHeapCapture::with_payload(b"heap contents".to_vec()),
        RecordingPublisher::with_key("aBcD12"),
        InMemoryPermissions::new(),
    )
}

/// Initialises test-writer tracing output once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Polls a condition until it holds or a short deadline expires.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0_u32..400 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
