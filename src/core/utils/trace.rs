use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Registry;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt};

/// Console output plus daily rolling trace & output logs under `./logs`
///
/// Keep the returned guards alive for as long as logs should be flushed.
pub fn setup_tracing() -> (WorkerGuard, WorkerGuard) {
   let trace_appender = tracing_appender::rolling::daily("./logs", "trace.log");
   let output_appender = tracing_appender::rolling::daily("./logs", "output.log");

   let (trace_writer, trace_guard) = tracing_appender::non_blocking(trace_appender);
   let (output_writer, output_guard) = tracing_appender::non_blocking(output_appender);

   // RUST_LOG overrides the console filter only
   let console_filter = EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("zeus_activity=warn,zeus_eth=warn"));
   let trace_filter = EnvFilter::new("zeus_activity=trace,zeus_eth=trace");
   let output_filter = EnvFilter::new("zeus_activity=info,zeus_eth=info");

   let console_layer = fmt::layer()
      .with_writer(std::io::stderr)
      .with_filter(console_filter);

   let trace_layer = fmt::layer()
      .with_writer(trace_writer)
      .with_ansi(false)
      .with_filter(trace_filter);

   let output_layer = fmt::layer()
      .with_writer(output_writer)
      .with_ansi(false)
      .with_filter(output_filter);

   Registry::default()
      .with(trace_layer)
      .with(console_layer)
      .with(output_layer)
      .init();

   (trace_guard, output_guard)
}
