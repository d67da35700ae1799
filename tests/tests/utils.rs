use metrics_exporter_prometheus::PrometheusBuilder;
use mock_wunderbase::{MockWunderbase, ResponseMode};
use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

static MOCK: OnceLock<MockWunderbase> = OnceLock::new();
static SERIAL: Mutex<()> = Mutex::const_new(());

/// One-time logging/metrics/mock setup; returns a handle to the shared mock.
///
/// The mock runs on its own runtime thread so it outlives the per-test
/// runtimes `#[tokio::test]` creates.
#[allow(unused)]
pub async fn init() -> MockWunderbase {
    let wait = MOCK.get().is_none();

    let mock = MOCK
        .get_or_init(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                default_panic(info);
                error!("Panic occurred: {info:?}");
                std::process::exit(1);
            }));

            FmtSubscriber::builder()
                .with_max_level(Level::DEBUG)
                .with_env_filter("balter=info,mock_wunderbase=debug,axum::rejection=trace")
                .init();

            PrometheusBuilder::new()
                .with_http_listener("0.0.0.0:8002".parse::<SocketAddr>().unwrap())
                .install()
                .unwrap();

            let mock = MockWunderbase::new(ResponseMode::Seeded);
            let server = mock.clone();
            std::thread::spawn(move || {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .unwrap();
                rt.block_on(async move {
                    let addr: SocketAddr = "0.0.0.0:4466".parse().unwrap();
                    mock_wunderbase::run(addr, server).await;
                });
            });

            mock
        })
        .clone();

    if wait {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    mock
}

/// The mock's response mode and the check registry are process-global; every
/// test holds this lock for its whole body.
#[allow(unused)]
pub async fn lock() -> MutexGuard<'static, ()> {
    SERIAL.lock().await
}
