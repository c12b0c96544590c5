// ==========================================
// 航线网络利润模拟 - 运行时属性加载
// ==========================================
// 格式: key=value / key: value, # 或 ! 开头为注释
// 规则: 文件名为 default.properties 时直接使用内置默认值
// 规则: 自定义文件不可读时回退内置默认值，不中断运行
// ==========================================

use super::defaults::DEFAULT_PROPERTIES;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// 内置默认属性文件名
pub const DEFAULT_PROPERTIES_FILE: &str = "default.properties";

// ==========================================
// RuntimeProperties - 运行时属性
// ==========================================
// 键有序，保证快照与日志输出稳定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeProperties {
    values: BTreeMap<String, String>,
}

impl RuntimeProperties {
    /// 解析属性文本
    pub fn parse(text: &str) -> Self {
        let mut values = BTreeMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = match line.find(|c| c == '=' || c == ':') {
                Some(pos) => (line[..pos].trim(), line[pos + 1..].trim()),
                None => (line, ""),
            };
            if key.is_empty() {
                continue;
            }
            values.insert(key.to_string(), value.to_string());
        }

        Self { values }
    }

    /// 从文件读取
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 将 self 叠加在 base 之上（self 的键优先）
    pub fn layered_over(self, base: RuntimeProperties) -> RuntimeProperties {
        let mut values = base.values;
        values.extend(self.values);
        Self { values }
    }

    /// 配置快照（JSON）
    ///
    /// # 用途
    /// - 模拟报告中记录本次运行使用的配置
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.values)
    }
}

// ==========================================
// 加载入口
// ==========================================

/// 内置默认属性
pub fn load_default_properties() -> RuntimeProperties {
    debug!("已加载内置默认属性");
    RuntimeProperties::parse(DEFAULT_PROPERTIES)
}

/// 读取自定义属性文件并叠加在默认值之上
///
/// 文件不可读时回退为默认属性
pub fn create_runtime_properties(path: &Path) -> RuntimeProperties {
    match RuntimeProperties::load(path) {
        Ok(custom) => {
            debug!("已加载属性文件 {}", path.display());
            custom.layered_over(load_default_properties())
        }
        Err(e) => {
            warn!("无法使用 {}, 回退默认属性: {}", path.display(), e);
            load_default_properties()
        }
    }
}

/// 决定使用默认属性还是自定义属性文件
pub fn load_runtime_properties(path: &Path) -> RuntimeProperties {
    let is_default = path
        .file_name()
        .map(|name| name == DEFAULT_PROPERTIES_FILE)
        .unwrap_or(false);

    if is_default {
        load_default_properties()
    } else {
        create_runtime_properties(path)
    }
}
