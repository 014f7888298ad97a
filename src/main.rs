#[macro_use]
extern crate rocket;

mod catchers;
mod cli;
mod emptiness;
mod error;
mod fairings;
mod routes;
mod telemetry;
#[cfg(test)]
mod test_helpers;
mod types;

use clap::Parser;
use rocket_cors::{AllowedHeaders, AllowedMethods, AllowedOrigins, CorsOptions};
use std::collections::HashSet;
use std::net::IpAddr;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::info::get_info,
        routes::health::get_health,
        routes::check::post_check_empty,
        routes::check::get_empty,
    ),
    components(),
    tags(
        (name = "Info", description = "Service metadata endpoints"),
        (name = "Health", description = "Health check endpoints"),
        (name = "Check", description = "Emptiness classification endpoints"),
    ),
    info(
        title = "empty-check-api",
        version = "1.0.0",
        description = "REST API that reports whether a submitted JSON value is empty",
    )
)]
struct ApiDoc;

fn configure_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = ["Get", "Post", "Options"]
        .iter()
        .map(|s| std::str::FromStr::from_str(s).unwrap())
        .collect();

    let expose_headers: HashSet<String> = ["X-Request-Id", "X-Process-Time", "X-Service"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        allowed_methods,
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: false,
        expose_headers,
        ..Default::default()
    }
}

fn rocket(config: rocket::Config) -> Result<rocket::Rocket<rocket::Build>, rocket_cors::Error> {
    let cors = configure_cors().to_cors()?;

    Ok(rocket::custom(config)
        .mount("/", routes::info::routes())
        .mount("/api", routes::health::routes())
        .mount("/api", routes::check::routes())
        .mount(
            "/",
            SwaggerUi::new("/swagger/<tail..>").url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .register("/", catchers::catchers())
        .attach(fairings::RequestLogger)
        .attach(cors))
}

async fn serve(address: IpAddr, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = rocket::Config {
        address,
        port,
        log_level: rocket::config::LogLevel::Normal,
        ..rocket::Config::default()
    };

    rocket(config)?.launch().await?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    match cli::Cli::parse().command {
        Some(cli::Command::Serve { address, port }) => serve(address, port).await,
        None => {
            cli::print_usage();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use rocket::local::blocking::Client;

    fn client() -> Client {
        let rocket = rocket(rocket::Config::default()).expect("valid rocket instance");
        Client::tracked(rocket).expect("valid client")
    }

    #[test]
    fn test_health_endpoint() {
        let client = client();
        let response = client.get("/api/health").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_info_endpoint() {
        let client = client();
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["service"], "empty-check-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_unknown_route_returns_404_body() {
        let client = client();
        let response = client.get("/does-not-exist").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_openapi_document_is_served() {
        let client = client();
        let response = client.get("/api-doc/openapi.json").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert!(body["openapi"].as_str().unwrap().starts_with('3'));
        assert!(body["paths"]["/api/check-empty"].is_object());
        assert!(body["paths"]["/api/empty"].is_object());
    }
}
