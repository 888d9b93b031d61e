use anyhow::{Result, bail};
use log::error;
use std::sync::Mutex;
use tokio::process::Command;

/// 显示接收端：接收完整渲染好的状态行
///
/// 核心只依赖"接收字符串并报告成功与否"，不关心文本如何展示。
#[allow(async_fn_in_trait)]
pub trait DisplaySink {
    /// 推送一帧状态行
    async fn set_root(&self, text: &str) -> Result<()>;
}

/// X 根窗口接收端：每帧调用一次 xsetroot 子进程
#[derive(Debug, Default)]
pub struct XRootSink;

impl XRootSink {
    /// 创建接收端实例
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySink for XRootSink {
    async fn set_root(&self, text: &str) -> Result<()> {
        let status = Command::new("xsetroot")
            .arg("-name")
            .arg(text)
            .status()
            .await
            .map_err(|e| {
                error!("无法启动 xsetroot: {e}");
                anyhow::anyhow!("无法启动 xsetroot: {e}")
            })?;

        if !status.success() {
            error!("xsetroot 退出状态异常: {status}");
            bail!("xsetroot 退出状态异常: {status}");
        }

        Ok(())
    }
}

/// 内存接收端：按顺序记录收到的每一帧，供测试和基准使用
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Mutex<Vec<String>>,
}

impl MemorySink {
    /// 创建空的内存接收端
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出目前记录的所有帧
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }
}

impl DisplaySink for MemorySink {
    async fn set_root(&self, text: &str) -> Result<()> {
        self.frames.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink_records_frames() {
        let sink = MemorySink::new();
        assert!(sink.frames().is_empty());

        sink.set_root("第一帧").await.unwrap();
        sink.set_root("第二帧").await.unwrap();

        assert_eq!(
            sink.frames(),
            vec!["第一帧".to_string(), "第二帧".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_subprocess_is_failure() {
        // 不存在的外部程序应报告失败而不是静默成功
        let status = Command::new("swb-status-line-no-such-program")
            .arg("-name")
            .arg("x")
            .status()
            .await;
        assert!(status.is_err());
    }
}
