//! Domain types, validation, and use-cases for the employee directory.
//!
//! Everything here is transport and storage agnostic: inbound adapters map
//! [`Error`] onto their own envelopes, and store adapters implement the ports
//! under [`ports`].

pub mod directory_service;
pub mod employee;
pub mod error;
pub mod ports;
pub mod search;
pub mod validation;

pub use self::directory_service::DirectoryService;
pub use self::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeIdError, EmployeeUpdate};
pub use self::error::{Error, ErrorCode};
pub use self::search::filter_directory;
pub use self::validation::{
    EmployeeField, NO_CHANGES_MESSAGE, ValidationReport, validate, validate_field,
};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
