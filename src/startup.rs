use crate::configuration::Settings;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(
    listener: TcpListener,
    pool: SqlitePool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pool = web::Data::new(pool);

    // A non-numeric {id} is a lookup miss, and even extractor failures must
    // answer with the JSON envelope.
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Failed to parse path parameter: {}", err);
        JsonResponse::<models::Product>::not_found("product not found")
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::index::index)
            .service(
                web::scope("/products")
                    .service(routes::product::add::item)
                    .service(routes::product::get::list)
                    .service(routes::product::get::item)
                    .service(routes::product::update::item)
                    .service(routes::product::delete::item),
            )
            .service(web::scope("/search").service(routes::product::search::list))
            .service(web::scope("/reset").service(routes::reset::item))
            .default_service(web::route().to(routes::not_found::handler))
            .app_data(path_config.clone())
            .app_data(pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
