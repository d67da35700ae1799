use balter::prelude::*;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing_subscriber::FmtSubscriber;
use wunderbench::{checks, scenario};

const GOAL_TPS: u32 = 500;
const RUN_DURATION: Duration = Duration::from_secs(120);

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("wunderbench=info,balter=info")
        .init();

    PrometheusBuilder::new()
        .with_http_listener("0.0.0.0:8002".parse::<SocketAddr>().unwrap())
        .install()
        .unwrap();

    let stats = scenario::all_posts()
        .tps(NonZeroU32::new(GOAL_TPS).unwrap().into())
        .duration(RUN_DURATION)
        .await;

    println!("{stats:?}");
    for check in checks::report() {
        println!(
            "check '{}': {} passed, {} failed",
            check.name, check.passes, check.fails
        );
    }
}
