//! Embedded word lists
//!
//! Hardcoded lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/fallback.rs"));
include!(concat!(env!("OUT_DIR"), "/denylist_additions.rs"));
include!(concat!(env!("OUT_DIR"), "/denylist_exemptions.rs"));
