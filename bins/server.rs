use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT 生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "site_registry", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "site_registry",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "site_registry", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    // 构建 Tokio 运行时（线程数来自配置）
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "site_registry", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "site_registry",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "site registry starting"
    );

    // 优雅停机由 run_with_config 内部监听 Ctrl+C / SIGTERM
    match rt.block_on(server::startup::run_with_config(cfg)) {
        Ok(()) => {
            info!(service = "site_registry", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "site_registry", event = "run_failed", error = %e, "server exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}
