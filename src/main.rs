use anyhow::Result;
use clap::Parser;
use log::info;
use swb_status_line::driver;
use swb_status_line::registry::StatusRegistry;
use swb_status_line::sink::XRootSink;

/// 状态栏文本聚合器
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志系统
    init_logger(&args.log_level);

    info!("状态栏文本聚合器启动中...");
    info!(
        "刷新间隔: {} 秒，显示接收端: xsetroot",
        driver::UPDATE_INTERVAL.as_secs()
    );

    // 注册表显式构造后移交给主循环，进程退出前一直存活
    let registry = StatusRegistry::new();
    let sink = XRootSink::new();

    driver::run(registry, sink).await
}

/// 初始化日志系统
fn init_logger(level: &str) {
    use std::env;

    // 设置默认日志格式
    unsafe {
        env::set_var("RUST_LOG", level);
    }

    // 初始化 env_logger
    match env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .try_init()
    {
        Ok(_) => info!("日志系统初始化成功，级别: {level}"),
        Err(e) => {
            eprintln!("日志系统初始化失败: {e}，使用默认设置");
            // 设置基本的日志输出
            env_logger::init();
        }
    }
}
