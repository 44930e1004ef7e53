/// Inbound adapters - hosts that drive a resolution
mod manifest_consumer;

pub use manifest_consumer::ManifestConsumer;
