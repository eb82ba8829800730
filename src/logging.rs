use tracing::subscriber::SetGlobalDefaultError;

/// Installs a compact `fmt` subscriber as the global default.
///
/// Only binaries should call this; the library just emits events.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
