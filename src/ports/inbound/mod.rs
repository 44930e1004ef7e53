/// Inbound ports (Driving ports) - Host integration interfaces
///
/// These ports define what a host build environment must offer the
/// resolution core.
pub mod resolution_consumer;

pub use resolution_consumer::ResolutionConsumer;
