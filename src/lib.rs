//! Negotiation Sparring - Structured negotiation preparation coaching.
//!
//! Users draft a five-block negotiation preparation, receive deterministic
//! rule-based coaching feedback, execute the negotiation, debrief, and close
//! the case with a synthesized memo.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
