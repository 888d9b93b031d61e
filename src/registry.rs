use crate::sink::DisplaySink;
use anyhow::Result;

/// 缺省分隔符：`upsert` 回退插入新块时使用
pub const DEFAULT_SEPARATOR: &str = " | ";

/// 状态块：一段带名称和分隔符的显示文本
#[derive(Debug, Clone)]
pub struct Block {
    /// 块名称，仅用于查找，不参与渲染
    pub name: String,
    /// 当前显示文本，更新时整体替换
    pub content: String,
    /// 渲染时追加在文本之后的分隔符，创建后不再变化
    pub separator: String,
}

/// 状态注册表操作错误类型
#[derive(Debug)]
pub enum RegistryError {
    /// 严格更新时目标块不存在
    BlockNotFound(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::BlockNotFound(name) => write!(f, "状态块不存在: {name}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// 状态注册表：按插入顺序排列的状态块集合
///
/// 顺序即渲染顺序，块只增不减；所有操作都是同步单线程的。
#[derive(Debug, Default)]
pub struct StatusRegistry {
    blocks: Vec<Block>,
}

impl StatusRegistry {
    /// 创建空注册表
    #[inline]
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// 块数量
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// 注册表是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// 在末尾追加新块，注册表取得内容所有权
    ///
    /// 调用方须保证名称未被占用；重名插入会产生两个同名块。
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        separator: impl Into<String>,
    ) {
        self.blocks.push(Block {
            name: name.into(),
            content: content.into(),
            separator: separator.into(),
        });
    }

    /// 更新或插入：存在则原位替换内容，不存在则以缺省分隔符追加新块
    ///
    /// 回退插入是显式策略：调用方不需要单独的"确保存在"操作，
    /// 代价是拼错名称会静默产生一个尾部新块。需要报错的场景
    /// 请使用 [`StatusRegistry::update_existing`]。
    pub fn upsert(&mut self, name: &str, content: impl Into<String>) {
        match self.blocks.iter_mut().find(|b| b.name == name) {
            Some(block) => block.content = content.into(),
            None => self.insert(name, content, DEFAULT_SEPARATOR),
        }
    }

    /// 严格更新：目标块不存在时返回错误而不是插入
    pub fn update_existing(
        &mut self,
        name: &str,
        content: impl Into<String>,
    ) -> std::result::Result<(), RegistryError> {
        match self.blocks.iter_mut().find(|b| b.name == name) {
            Some(block) => {
                block.content = content.into();
                Ok(())
            }
            None => Err(RegistryError::BlockNotFound(name.to_string())),
        }
    }

    /// 渲染：按插入顺序拼接每个块的内容和分隔符
    ///
    /// 纯函数，无副作用；空注册表渲染为空串。
    pub fn render(&self) -> String {
        // 预估各块长度，预分配容量
        let capacity = self
            .blocks
            .iter()
            .map(|b| b.content.len() + b.separator.len())
            .sum();
        let mut line = String::with_capacity(capacity);

        for block in &self.blocks {
            line.push_str(&block.content);
            line.push_str(&block.separator);
        }

        line
    }

    /// 渲染并推送到显示接收端
    pub async fn publish<S: DisplaySink>(&self, sink: &S) -> Result<()> {
        sink.set_root(&self.render()).await
    }
}
