//! Memory diagnostics commands: `heapdump`/`heap` and `memory`.

use crate::command::domain::{Command, CommandExecutionError, CommandExecutor};
use crate::command::ports::{CommandSender, send_prefixed};
use crate::command::services::{CommandModule, CommandModuleError, CommandRegistry};
use crate::heap::ports::{HeapCapture, SnapshotPublisher};
use crate::heap::services::{HeapDumpError, HeapDumpService};
use crate::memory::ports::MemoryRegionSource;
use crate::memory::services::MemoryReportService;
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

const HEAP_DUMP_STARTED: &str = "Creating a new heap dump, please wait...";
const HEAP_DUMP_OUTPUT: &str = "Heap dump output:";
const CAPTURE_FAILED: &str = "An error occurred whilst inspecting the heap.";
const COMPRESSION_FAILED: &str = "An error occurred whilst compressing the heap dump.";
const UPLOAD_FAILED: &str = "An error occurred whilst uploading the data.";

/// Command module bundling the memory diagnostics commands.
///
/// Registered once at bootstrap; the aliases are `heapdump`/`heap` for the
/// snapshot pipeline and `memory` for the region report.
pub struct MemoryModule<S, K, C, P>
where
    S: MemoryRegionSource + 'static,
    K: Clock + Send + Sync + 'static,
    C: HeapCapture + 'static,
    P: SnapshotPublisher + 'static,
{
    report: Arc<MemoryReportService<S, K>>,
    heap: Arc<HeapDumpService<C, P>>,
    message_prefix: String,
}

impl<S, K, C, P> MemoryModule<S, K, C, P>
where
    S: MemoryRegionSource + 'static,
    K: Clock + Send + Sync + 'static,
    C: HeapCapture + 'static,
    P: SnapshotPublisher + 'static,
{
    /// Creates the module over its two services.
    pub fn new(
        report: Arc<MemoryReportService<S, K>>,
        heap: Arc<HeapDumpService<C, P>>,
        message_prefix: impl Into<String>,
    ) -> Self {
        Self {
            report,
            heap,
            message_prefix: message_prefix.into(),
        }
    }
}

impl<S, K, C, P> CommandModule for MemoryModule<S, K, C, P>
where
    S: MemoryRegionSource + 'static,
    K: Clock + Send + Sync + 'static,
    C: HeapCapture + 'static,
    P: SnapshotPublisher + 'static,
{
    fn register_commands(&self, registry: &mut CommandRegistry) -> Result<(), CommandModuleError> {
        registry.register(
            Command::builder()
                .aliases(["heapdump", "heap"])
                .executor(Arc::new(HeapDumpExecutor {
                    service: Arc::clone(&self.heap),
                    message_prefix: self.message_prefix.clone(),
                }))
                .build()?,
        )?;

        registry.register(
            Command::builder()
                .aliases(["memory"])
                .executor(Arc::new(MemoryReportExecutor {
                    service: Arc::clone(&self.report),
                    message_prefix: self.message_prefix.clone(),
                }))
                .build()?,
        )?;

        Ok(())
    }
}

struct HeapDumpExecutor<C, P>
where
    C: HeapCapture,
    P: SnapshotPublisher,
{
    service: Arc<HeapDumpService<C, P>>,
    message_prefix: String,
}

#[async_trait]
impl<C, P> CommandExecutor for HeapDumpExecutor<C, P>
where
    C: HeapCapture + 'static,
    P: SnapshotPublisher + 'static,
{
    async fn run(
        &self,
        sender: Arc<dyn CommandSender>,
        _args: &[String],
    ) -> Result<(), CommandExecutionError> {
        send_prefixed(&*sender, &self.message_prefix, HEAP_DUMP_STARTED);

        match self.service.capture_and_publish().await {
            Ok(link) => {
                send_prefixed(&*sender, &self.message_prefix, HEAP_DUMP_OUTPUT);
                sender.send_message(link.as_str());
            }
            Err(HeapDumpError::Capture(error)) => {
                tracing::error!(error = %error, "heap capture failed");
                send_prefixed(&*sender, &self.message_prefix, CAPTURE_FAILED);
            }
            Err(HeapDumpError::Compression(error)) => {
                tracing::error!(error = %error, "heap snapshot compression failed");
                send_prefixed(&*sender, &self.message_prefix, COMPRESSION_FAILED);
            }
            Err(HeapDumpError::Upload(error)) => {
                tracing::error!(error = %error, "heap snapshot upload failed");
                send_prefixed(&*sender, &self.message_prefix, UPLOAD_FAILED);
            }
        }
        Ok(())
    }
}

struct MemoryReportExecutor<S, K>
where
    S: MemoryRegionSource,
    K: Clock + Send + Sync,
{
    service: Arc<MemoryReportService<S, K>>,
    message_prefix: String,
}

#[async_trait]
impl<S, K> CommandExecutor for MemoryReportExecutor<S, K>
where
    S: MemoryRegionSource + 'static,
    K: Clock + Send + Sync + 'static,
{
    async fn run(
        &self,
        sender: Arc<dyn CommandSender>,
        _args: &[String],
    ) -> Result<(), CommandExecutionError> {
        let report = self
            .service
            .generate_report()
            .map_err(CommandExecutionError::new)?;
        send_prefixed(&*sender, &self.message_prefix, "Memory usage:");
        sender.send_message(&report);
        Ok(())
    }
}
