//! Embedded word sets
//!
//! Word sets compiled into the binary at build time.

// Include generated word sets from build script
include!(concat!(env!("OUT_DIR"), "/starter.rs"));
include!(concat!(env!("OUT_DIR"), "/animals.rs"));
include!(concat!(env!("OUT_DIR"), "/everyday.rs"));
