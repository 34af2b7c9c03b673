// 日志工具模块
//
// 按 LogConfig 启动 flexi_logger 文件日志，并保留句柄以便退出前 flush

use crate::config::LogConfig;
use crate::core::error::{CompileError, CompileResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

fn logger_error(err: flexi_logger::FlexiLoggerError) -> CompileError {
    CompileError::Config(format!("日志初始化失败: {}", err))
}

/// 初始化日志系统
///
/// 重复调用时保留第一次的配置，直接返回成功
///
/// # Examples
/// ```no_run
/// use graphview::config::Config;
/// use graphview::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> CompileResult<()> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .map_err(|_| CompileError::Config("日志句柄锁已损坏".to_string()))?;
    if guard.is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(&config.level)
        .map_err(logger_error)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(logger_error)?;
    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 阻塞到异步日志线程写完为止
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
