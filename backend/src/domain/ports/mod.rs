//! Domain ports.
//!
//! Driven ports (the store contract) and driving ports (the use-cases inbound
//! adapters call) live here so the domain never imports adapter concerns.

pub mod directory;
pub mod employee_repository;

pub use directory::{DirectoryCommand, DirectoryQuery};
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
