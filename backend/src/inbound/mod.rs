//! Inbound adapters translating external requests into domain service calls.
//!
//! Framework details stay at this edge; handlers only see driving ports.

pub mod http;
