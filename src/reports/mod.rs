//! Record serialization.
//!
//! One serialized line per scored URL, consumed by whatever feeds this tool.

pub mod ndjson;
