//! OpenAPI document for the employee directory API.

use utoipa::OpenApi;

use crate::domain::{Employee, Error, ErrorCode};
use crate::inbound::http::employees::{AckResponse, CreateEmployeeRequest, UpdateEmployeeRequest};

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory API",
        description = "CRUD and search over a small directory of employee records."
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Employee,
        CreateEmployeeRequest,
        UpdateEmployeeRequest,
        AckResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "employees", description = "Employee directory operations"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;
