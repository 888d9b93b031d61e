//! 状态栏文本聚合器库
//!
//! 这个库提供了一个极简的状态栏文本聚合器：按固定顺序采集系统指标，
//! 聚合为一行文本后推送到显示接收端。

pub mod driver;
pub mod metrics;
pub mod registry;
pub mod sink;

// 重新导出主要的公共类型
pub use registry::{Block, DEFAULT_SEPARATOR, RegistryError, StatusRegistry};
pub use sink::{DisplaySink, MemorySink, XRootSink};
