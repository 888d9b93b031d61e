use std::io::ErrorKind;
use std::path::Path;

use tokio::io::AsyncReadExt;

/// 系统负载来源
const LOADAVG_PATH: &str = "/proc/loadavg";
/// 内存信息来源
const MEMINFO_PATH: &str = "/proc/meminfo";
/// 电池电量来源
const BATTERY_PATH: &str = "/sys/class/power_supply/BAT0/capacity";

/// 各伪文件的读取上限（字节）：只需要前导字段，截断可以接受
const LOADAVG_READ_CAP: usize = 256;
const MEMINFO_READ_CAP: usize = 2048;
const BATTERY_READ_CAP: usize = 64;

/// 指标获取错误类型
#[derive(Debug)]
pub enum MetricError {
    Io(std::io::Error),
    Parse(String),
}

impl From<std::io::Error> for MetricError {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        MetricError::Io(error)
    }
}

impl std::fmt::Display for MetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricError::Io(e) => write!(f, "IO 错误: {e}"),
            MetricError::Parse(s) => write!(f, "解析错误: {s}"),
        }
    }
}

impl std::error::Error for MetricError {}

pub type Result<T> = std::result::Result<T, MetricError>;

/// 有界读取：最多读取 cap 字节，来源不存在时返回 None
///
/// 伪文件长度不定，但各指标只消费前导字段，所以按上限截断读取，
/// 不做无界流式读取。除"不存在"之外的 IO 错误原样上抛。
async fn read_bounded(path: impl AsRef<Path>, cap: usize) -> Result<Option<String>> {
    let mut file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut buf = Vec::with_capacity(cap);
    file.take(cap as u64).read_to_end(&mut buf).await?;

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// 解析负载均值的第一个字段
#[inline]
fn parse_first_load_field(content: &str) -> Option<&str> {
    content.split_whitespace().next()
}

/// 从内存信息文本计算已用内存百分比（向下取整）
///
/// 已用率 = (总量 - 可用量) * 100 / 总量；总量为 0 或无法解析时返回 0。
fn parse_memory_percent(content: &str) -> u64 {
    let mut total: u64 = 0;
    let mut available: u64 = 0;

    for line in content.lines() {
        let mut parts = line.split_whitespace();
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            match key {
                "MemTotal:" => total = value.parse().unwrap_or(0),
                "MemAvailable:" => available = value.parse().unwrap_or(0),
                _ => {}
            }
        }
    }

    if total == 0 {
        return 0;
    }

    total.saturating_sub(available) * 100 / total
}

/// 获取 CPU 负载显示文本
///
/// 读取一分钟负载均值；来源不存在时返回占位文本。
pub async fn cpu_load() -> Result<String> {
    let Some(content) = read_bounded(LOADAVG_PATH, LOADAVG_READ_CAP).await? else {
        return Ok("CPU: unknown".to_string());
    };

    let field = parse_first_load_field(&content)
        .ok_or_else(|| MetricError::Parse(format!("无法解析 {LOADAVG_PATH}")))?;

    Ok(format!("CPU: {field}"))
}

/// 获取内存占用显示文本
pub async fn memory_usage() -> Result<String> {
    let Some(content) = read_bounded(MEMINFO_PATH, MEMINFO_READ_CAP).await? else {
        return Ok("MEM: unknown".to_string());
    };

    Ok(format!("MEM: {}%", parse_memory_percent(&content)))
}

/// 获取电池电量显示文本
///
/// 无电池的设备没有电量文件，返回占位文本而不是报错。
pub async fn battery_percentage() -> Result<String> {
    let Some(content) = read_bounded(BATTERY_PATH, BATTERY_READ_CAP).await? else {
        return Ok("No battery".to_string());
    };

    Ok(format!("BAT: {}%", content.trim()))
}

/// 获取本地日期时间显示文本（零填充 24 小时制，不含秒）
#[inline]
pub fn local_datetime() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M").to_string()
}
