// ==========================================
// 航线网络利润模拟 - 命令行入口
// ==========================================
// 用法:
//   airline-network [-p 属性文件] [-g 航线图文件] [-d 航班数据文件]
//                   [--json] [--print-graph] [-v] [-h]
// 无 -d: 图驱动模式；有 -d: 记录驱动模式
// ==========================================

use airline_network::config::{
    load_runtime_properties, DefaultPaths, DefaultsLoader, SimulationConfig, DEFAULTS_DIR_NAME,
};
use airline_network::importer::{load_flight_records, load_route_descriptions};
use airline_network::{
    format_currency, logging, AirlineSimulationBuilder, AirportNetworkGraph, RecordingEventSink,
};
use anyhow::{bail, Context};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    properties: Option<PathBuf>,
    graph: Option<PathBuf>,
    data: Option<PathBuf>,
    json: bool,
    print_graph: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "--properties" => {
                cli.properties = Some(args.next().context("-p 缺少文件参数")?.into());
            }
            "-g" | "--graph" => {
                cli.graph = Some(args.next().context("-g 缺少文件参数")?.into());
            }
            "-d" | "--data" => {
                cli.data = Some(args.next().context("-d 缺少文件参数")?.into());
            }
            "--json" => cli.json = true,
            "--print-graph" => cli.print_graph = true,
            "-v" | "--verbose" => cli.verbose = true,
            "-h" | "--help" => cli.help = true,
            other => bail!("未知参数: {}", other),
        }
    }

    Ok(cli)
}

fn print_usage() {
    println!(
        "usage: airline-network [-p properties] [-g graph] [-d data] [--json] [--print-graph] [-v] [-h]\n\
         \n  -p, --properties   属性文件\
         \n  -g, --graph        航线图文件 (source|destination|distance)\
         \n  -d, --data         航班数据文件（指定后使用记录驱动模式）\
         \n      --json         以 JSON 输出完整模拟报告\
         \n      --print-graph  输出航线图邻接表\
         \n  -v, --verbose      输出调试日志（RUST_LOG 优先）\
         \n  -h, --help         显示帮助"
    );
}

fn main() -> anyhow::Result<()> {
    let cli = parse_args(std::env::args().skip(1))?;
    if cli.help {
        print_usage();
        return Ok(());
    }
    logging::init(cli.verbose);

    tracing::info!("{} v{}", airline_network::APP_NAME, airline_network::VERSION);

    // 默认资源落盘（失败不影响运行）
    let defaults_dir = std::env::current_dir()?.join(DEFAULTS_DIR_NAME);
    let default_paths = DefaultsLoader::create_defaults_in(&defaults_dir).unwrap_or_else(|e| {
        tracing::warn!("无法写入默认文件到 {}: {}", defaults_dir.display(), e);
        DefaultPaths::in_dir(&defaults_dir)
    });

    let properties_path = cli.properties.unwrap_or(default_paths.properties);
    let properties = load_runtime_properties(&properties_path);
    tracing::debug!("运行配置: {}", properties.snapshot_json()?);
    let config = SimulationConfig::from_properties(&properties);

    let builder = AirlineSimulationBuilder::from_config(&config);
    let mut sink = RecordingEventSink::new();

    let simulation = match cli.data {
        Some(data_path) => {
            let report = load_flight_records(&data_path)
                .with_context(|| format!("无法读取航班数据 {}, 模拟终止", data_path.display()))?;
            if !report.is_clean() {
                tracing::warn!("航班数据中有 {} 行被拒绝", report.rejected_count());
            }
            builder.run_from_records(report.records, &mut sink)
        }
        None => {
            let graph_path = cli.graph.unwrap_or(default_paths.graph);
            let report = load_route_descriptions(&graph_path)
                .with_context(|| format!("无法读取航线图 {}, 模拟终止", graph_path.display()))?;
            if !report.is_clean() {
                tracing::warn!("航线图中有 {} 行被拒绝", report.rejected_count());
            }

            let mut graph = AirportNetworkGraph::new();
            AirlineSimulationBuilder::populate_graph(&mut graph, &report.records, &mut sink);
            if cli.print_graph {
                print!("{}", graph.print_graph());
            }

            builder.run_from_graph(
                &graph,
                &config.flight_template,
                config.edge_order,
                &mut sink,
            )
        }
    };

    let rejected_edges = sink.rejected_edges().len();
    if rejected_edges > 0 {
        tracing::warn!("{} 条航线被网络图拒绝", rejected_edges);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&simulation)?);
    } else {
        println!("Total Profit = {}", format_currency(simulation.total_profit()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args_flags() {
        let cli = parse_args(args(&["-v", "-d", "flights.txt", "--json"])).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.data, Some(PathBuf::from("flights.txt")));
        assert!(cli.graph.is_none());

        assert!(!parse_args(args(&[])).unwrap().verbose);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["-g"])).is_err());
        assert!(parse_args(args(&["--quiet"])).is_err());
    }
}
