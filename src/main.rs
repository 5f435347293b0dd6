use product_api::configuration::get_configuration;
use product_api::db;
use product_api::startup::run;
use product_api::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("product-api".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        db_path = %settings.database.database_path,
        "Opening SQLite database"
    );

    let pool = db::store::connect(&settings.database)
        .await
        .expect("Failed to connect to database.");

    db::store::setup(&pool)
        .await
        .expect("Failed to set up database schema.");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, pool, settings)?.await
}
