// ==========================================
// 日志输出
// ==========================================
// stdout 只放模拟结果，日志一律写 stderr
// 过滤优先级: RUST_LOG > -v > 默认 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤: 只看流程节点与告警
pub const DEFAULT_DIRECTIVE: &str = "info";

/// -v: 本 crate 打开 debug（逐航班核算、配置快照），依赖仍为 info
pub const VERBOSE_DIRECTIVE: &str = "airline_network=debug,info";

fn directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose)))
}

/// 命令行入口调用一次
///
/// 设置了 RUST_LOG 时忽略 `verbose`。
pub fn init(verbose: bool) {
    fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_line_number(verbose)
        .without_time()
        .init();
}

/// 测试用，可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(VERBOSE_DIRECTIVE))
        .with_test_writer()
        .try_init();
}
