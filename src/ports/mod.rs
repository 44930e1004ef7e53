/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - what a host build
/// offers the resolver) and outbound ports (driven ports - infrastructure
/// interfaces the resolver depends on).
pub mod inbound;
pub mod outbound;
