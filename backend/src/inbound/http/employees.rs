//! Employee CRUD handlers.
//!
//! ```text
//! GET    /api/employees[?search=term]
//! POST   /api/employees
//! PUT    /api/employees/{id}
//! DELETE /api/employees/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, EmployeeUpdate, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/employees`.
///
/// Fields are optional at the serde level so a missing field surfaces as a
/// structured "required" validation message instead of an opaque
/// deserialisation failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Full name of the employee.
    pub name: Option<String>,
    /// Job role or designation.
    pub role: Option<String>,
    /// Department the employee works in.
    pub department: Option<String>,
}

impl From<CreateEmployeeRequest> for EmployeeDraft {
    fn from(value: CreateEmployeeRequest) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            role: value.role.unwrap_or_default(),
            department: value.department.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/employees/{id}`; omitted fields keep their
/// persisted values.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// Replacement name, if supplied.
    pub name: Option<String>,
    /// Replacement role, if supplied.
    pub role: Option<String>,
    /// Replacement department, if supplied.
    pub department: Option<String>,
}

impl From<UpdateEmployeeRequest> for EmployeeUpdate {
    fn from(value: UpdateEmployeeRequest) -> Self {
        Self {
            name: value.name,
            role: value.role,
            department: value.department,
        }
    }
}

/// Acknowledgement envelope returned by update and delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

impl AckResponse {
    fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
        }
    }
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListEmployeesParams {
    /// Optional case-insensitive search over name and department.
    pub search: Option<String>,
}

fn parse_id(raw: &str) -> Result<EmployeeId, Error> {
    EmployeeId::parse(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_id",
        }))
    })
}

/// List employees, optionally filtered by a search term.
#[utoipa::path(
    get,
    path = "/api/employees",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring matched against name and department")
    ),
    responses(
        (status = 200, description = "Employees", body = [Employee]),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    params: web::Query<ListEmployeesParams>,
) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state
        .directory_query
        .list_employees(params.search.as_deref())
        .await?;
    Ok(web::Json(employees))
}

/// Create a new employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Created employee", body = Employee),
        (status = 400, description = "Validation failure", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .directory
        .create_employee(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Apply a partial update to an existing employee.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    request_body = UpdateEmployeeRequest,
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Update acknowledged", body = AckResponse),
        (status = 400, description = "Validation failure or no changes", body = Error),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> ApiResult<web::Json<AckResponse>> {
    let id = parse_id(&path.into_inner())?;
    state
        .directory
        .update_employee(&id, payload.into_inner().into())
        .await?;
    Ok(web::Json(AckResponse::new("Employee updated successfully")))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = AckResponse),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown employee", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AckResponse>> {
    let id = parse_id(&path.into_inner())?;
    state.directory.delete_employee(&id).await?;
    Ok(web::Json(AckResponse::new("Employee deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn missing_create_fields_become_empty_strings() {
        let request = CreateEmployeeRequest {
            name: None,
            role: Some("Manager".to_owned()),
            department: None,
        };

        let draft = EmployeeDraft::from(request);
        assert_eq!(draft.name, "");
        assert_eq!(draft.role, "Manager");
        assert_eq!(draft.department, "");
    }

    #[rstest]
    fn malformed_ids_are_rejected_with_details() {
        let error = parse_id("not-a-uuid").expect_err("invalid id");
        assert_eq!(error.code, ErrorCode::InvalidRequest);
        let details = error.details.expect("details");
        assert_eq!(details["field"], "id");
        assert_eq!(details["code"], "invalid_id");
    }

    #[rstest]
    fn ack_envelope_matches_the_wire_shape() {
        let ack = AckResponse::new("Employee updated successfully");
        let value = serde_json::to_value(&ack).expect("serialise ack");
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Employee updated successfully");
    }
}
