//! Server construction and wiring.

mod config;

pub use config::{DirectorySettings, StorageBackend};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::RequestTrace;
use backend::domain::DirectoryService;
use backend::domain::ports::EmployeeRepository;
use backend::inbound::http::employees::{
    create_employee, delete_employee, list_employees, update_employee,
};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{InMemoryEmployeeRepository, JsonFileEmployeeRepository};

/// Build the store adapter selected by configuration.
///
/// # Errors
/// Returns an error when the file backend cannot load its data file.
pub fn build_repository(
    settings: &DirectorySettings,
) -> color_eyre::Result<Arc<dyn EmployeeRepository>> {
    Ok(match settings.storage() {
        StorageBackend::Memory => Arc::new(InMemoryEmployeeRepository::new()),
        StorageBackend::File => Arc::new(JsonFileEmployeeRepository::open(settings.data_file())?),
    })
}

/// Assemble the HTTP state over a store adapter.
pub fn build_http_state(repository: Arc<dyn EmployeeRepository>) -> HttpState {
    let service = Arc::new(DirectoryService::new(repository));
    HttpState::new(service.clone(), service)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_employees)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestTrace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct and spawn the HTTP server.
///
/// Readiness flips once the listener is bound, so orchestration probes only
/// pass when the store adapter has been wired successfully.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn run(
    settings: &DirectorySettings,
    repository: Arc<dyn EmployeeRepository>,
) -> std::io::Result<Server> {
    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(build_http_state(repository));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind((settings.host(), settings.port()))?
    .run();

    health_state.mark_ready();
    Ok(server)
}
