//! Store adapters for the employee repository port.
//!
//! Two backends: a process-local in-memory store and a JSON-file store that
//! reloads its contents on open. Both assign UUID identifiers and maintain
//! the record timestamps; neither offers durability guarantees beyond a
//! whole-file write.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;
