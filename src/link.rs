//! Link Control Logic
//!
//! State machines and business logic for the radio link.
//! Implements the functional core of both nodes: the transmitter's
//! send-or-hold decision and the receiver's connection-loss failsafe.

pub mod policy;
pub mod receiver;
