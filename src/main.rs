use tokio::net::TcpListener;

use http_forwarder::config::{Cli, ForwarderConfig};
use http_forwarder::observability::logging;
use http_forwarder::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config: ForwarderConfig = Cli::parse_args().into();

    let listener = TcpListener::bind(config.bind_address()).await?;

    println!(
        "Listening on port {}, forwarded to {}",
        config.port, config.target
    );

    HttpServer::new(config).run(listener).await?;
    Ok(())
}
