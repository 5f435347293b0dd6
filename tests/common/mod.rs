use product_api::configuration::get_configuration;
use product_api::db;
use sqlx::SqlitePool;

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    // keeps the per-test database directory alive for the app's lifetime
    _db_dir: tempfile::TempDir,
}

// we have to run the server in another task
pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");

    // every test gets its own database file
    let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
    configuration.database.database_path = db_dir.path().join("products.db").display().to_string();

    let db_pool = db::store::connect(&configuration.database)
        .await
        .expect("Failed to connect to database");
    db::store::setup(&db_pool)
        .await
        .expect("Failed to set up database schema");

    let server = product_api::startup::run(listener, db_pool.clone(), configuration)
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        db_pool,
        _db_dir: db_dir,
    }
}
