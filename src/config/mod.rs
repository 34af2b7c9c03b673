use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{CompileError, CompileResult};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub compiler: CompilerConfig,
    pub partition: PartitionConfig,
}

/// 日志输出配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphview".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 查询编译配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompilerConfig {
    /// 顶点文档中出边数组的字段
    pub edge_field: String,
    /// 顶点文档中入边数组的字段
    pub reverse_edge_field: String,
    /// `id` 和 `label` 之外的标量属性
    pub flat_properties: Vec<String>,
    /// JsonServer 集合名
    pub collection_name: Option<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            edge_field: "_edge".to_string(),
            reverse_edge_field: "_reverse_edge".to_string(),
            flat_properties: Vec::new(),
            collection_name: None,
        }
    }
}

/// 分区执行配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PartitionConfig {
    pub key: String,
    pub parallelism: usize,
    /// 保存工作进程序号的环境变量
    pub worker_index_env: String,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            key: "name".to_string(),
            parallelism: 1,
            worker_index_env: "AZ_BATCH_TASK_ID".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> CompileResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.log.dir = Config::resolve_log_dir(&config.log.dir)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CompileResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 展开以 `~` 开头的日志目录，其余路径原样保留
    fn resolve_log_dir(log_dir: &str) -> CompileResult<String> {
        let Some(relative_path) = log_dir.strip_prefix('~') else {
            return Ok(log_dir.to_string());
        };
        let home_dir = env::var_os("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| CompileError::Config("无法获取用户主目录".to_string()))?;
        let relative_path = relative_path.trim_start_matches(['/', '\\']);
        Ok(home_dir.join(relative_path).to_string_lossy().into_owned())
    }
}
