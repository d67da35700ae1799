use mock_wunderbase::{MockWunderbase, ResponseMode};
use std::net::SocketAddr;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("mock_wunderbase=debug,tower_http=info")
        .init();

    tokio::task::spawn(async { mock_wunderbase::request_rate_task().await });

    let addr: SocketAddr = "0.0.0.0:4466".parse().unwrap();
    mock_wunderbase::run(addr, MockWunderbase::new(ResponseMode::Seeded)).await;
}
