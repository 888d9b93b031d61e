use crate::metrics;
use crate::registry::StatusRegistry;
use crate::sink::DisplaySink;
use anyhow::Result;
use log::{debug, info};
use std::time::Duration;

/// 稳态循环的刷新间隔，构建期固定
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// 各状态块名称，按固定的渲染顺序排列
const CPU_BLOCK: &str = "cpu";
const MEMORY_BLOCK: &str = "memory";
const BATTERY_BLOCK: &str = "battery";
const DATE_BLOCK: &str = "date";

/// 初始化：按固定顺序采集四项指标并插入注册表
///
/// 除末尾块外统一使用 " | " 分隔，末尾块分隔符为空。
/// 指标采集失败（来源缺失除外）直接上抛。
pub async fn initialize(registry: &mut StatusRegistry) -> Result<()> {
    registry.insert(CPU_BLOCK, metrics::cpu_load().await?, " | ");
    registry.insert(MEMORY_BLOCK, metrics::memory_usage().await?, " | ");
    registry.insert(BATTERY_BLOCK, metrics::battery_percentage().await?, " | ");
    registry.insert(DATE_BLOCK, metrics::local_datetime(), "");

    Ok(())
}

/// 稳态刷新：按初始化时的同一顺序重新采集并更新各块
pub async fn refresh(registry: &mut StatusRegistry) -> Result<()> {
    registry.upsert(CPU_BLOCK, metrics::cpu_load().await?);
    registry.upsert(MEMORY_BLOCK, metrics::memory_usage().await?);
    registry.upsert(BATTERY_BLOCK, metrics::battery_percentage().await?);
    registry.upsert(DATE_BLOCK, metrics::local_datetime());

    Ok(())
}

/// 主循环：初始化并推送一帧，然后每秒刷新、推送，永不返回
///
/// 注册表由调用方显式构造并移交所有权，循环内不存在全局状态。
/// 任何采集或推送错误都会终止循环并上抛，由进程退出收尾；
/// 不做重试，也不跳过失败的指标。
pub async fn run<S: DisplaySink>(mut registry: StatusRegistry, sink: S) -> Result<()> {
    initialize(&mut registry).await?;
    registry.publish(&sink).await?;
    info!("状态行已初始化，共 {} 个状态块", registry.len());

    loop {
        tokio::time::sleep(UPDATE_INTERVAL).await;
        refresh(&mut registry).await?;
        registry.publish(&sink).await?;
        debug!("状态行已刷新: {}", registry.render());
    }
}
