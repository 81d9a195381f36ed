use clap::Parser;

mod app_context;
mod cli;
mod geo;
mod health;
mod http;
mod locations;
mod logging;
mod scoring;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let locations = locations::init(&args).expect("Failed to initialize the location provider.");
    let app_context =
        app_context::init(&args, locations).expect("Invalid default session configuration.");
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(address = %args.listen_address, "Listening for HTTP requests.");
    axum::serve(listener, router)
        .await
        .expect("Failed to start the server.");
}
