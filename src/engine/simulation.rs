// ==========================================
// 航线网络利润模拟 - 模拟运行编排
// ==========================================
// 流程: 空目录 -> 填充（图驱动 / 记录驱动）-> 汇总 -> 报告
// 图驱动: 每条航线边按模板生成一个航班
// 记录驱动: 直接使用外部航班记录，绕过图
// 红线: 两种模式汇入同一套目录与利润汇总逻辑
// 红线: 单个航线/航班失败只上报，不中断运行
// ==========================================

use super::economics::{route_label, EconomicsError, FlightEconomicsEngine, FlightProfit};
use super::events::{SimulationEvent, SimulationEventSink};
use super::pilot_builder::PilotBuilder;
use super::strategy::EdgeOrder;
use crate::config::simulation_config::{FlightTemplate, SimulationConfig};
use crate::domain::airport::Airport;
use crate::domain::flight::{FlightCatalog, FlightRecord};
use crate::domain::route::RouteDescription;
use crate::graph::{AirportNetworkGraph, Edge};
use crate::perf::PerfGuard;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

/// 模拟模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    GraphDriven,
    RecordDriven,
}

// ==========================================
// AirlineSimulation - 模拟汇总结果
// ==========================================
// 只由引擎在一次运行中生成，之后只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirlineSimulation {
    mode: SimulationMode,
    flights: Vec<FlightProfit>,
    total_revenue: Decimal,
    total_cost: Decimal,
    total_profit: Decimal,
}

impl AirlineSimulation {
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// 各航班核算结果（目录顺序）
    pub fn flights(&self) -> &[FlightProfit] {
        &self.flights
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    pub fn total_profit(&self) -> Decimal {
        self.total_profit
    }
}

// 运行累计值
#[derive(Debug, Clone, Copy, Default)]
struct RunTotals {
    revenue: Decimal,
    cost: Decimal,
    profit: Decimal,
}

impl RunTotals {
    /// 计入一个航班；任一累计值溢出时返回错误，自身不变
    fn add(&self, flight: &FlightProfit, record: &FlightRecord) -> Result<Self, EconomicsError> {
        let overflow = |total: &'static str| EconomicsError::TotalOverflow {
            route: route_label(record),
            total,
        };
        Ok(Self {
            revenue: self
                .revenue
                .checked_add(flight.revenue)
                .ok_or_else(|| overflow("收入"))?,
            cost: self
                .cost
                .checked_add(flight.cost)
                .ok_or_else(|| overflow("成本"))?,
            profit: self
                .profit
                .checked_add(flight.profit)
                .ok_or_else(|| overflow("利润"))?,
        })
    }
}

// ==========================================
// AirlineSimulationBuilder - 模拟编排器
// ==========================================
// 不保存跨运行状态，每次运行从空目录开始
pub struct AirlineSimulationBuilder {
    engine: FlightEconomicsEngine,
}

impl AirlineSimulationBuilder {
    pub fn new(engine: FlightEconomicsEngine) -> Self {
        Self { engine }
    }

    /// 按配置中的薪资档位构建
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(FlightEconomicsEngine::new(PilotBuilder::new(config.pilot_pay)))
    }

    pub fn engine(&self) -> &FlightEconomicsEngine {
        &self.engine
    }

    // ==========================================
    // 图填充
    // ==========================================

    /// 按图描述填充网络图
    ///
    /// # 返回
    /// 成功建立的航线数；被拒航线通过 sink 上报
    pub fn populate_graph(
        graph: &mut AirportNetworkGraph,
        routes: &[RouteDescription],
        sink: &mut dyn SimulationEventSink,
    ) -> usize {
        let mut accepted = 0;

        for route in routes {
            for name in [&route.source, &route.destination] {
                if !graph.is_airport_in_graph(name) {
                    graph.add_airport(Airport::new(name.as_str()));
                }
            }

            match graph.try_create_edge(&route.source, &route.destination, route.distance) {
                Ok(_) => accepted += 1,
                Err(reason) => {
                    debug!(%reason, "非法航线输入，已忽略");
                    sink.publish(SimulationEvent::EdgeRejected { reason });
                }
            }
        }

        debug!(
            "图填充完成: 航线 {} 条, 接受 {} 条, 机场 {} 个",
            routes.len(),
            accepted,
            graph.airport_count()
        );
        accepted
    }

    // ==========================================
    // 航班生成
    // ==========================================

    /// 由图边按模板生成航班目录
    pub fn materialize_flights(
        graph: &AirportNetworkGraph,
        template: &FlightTemplate,
        order: EdgeOrder,
        sink: &mut dyn SimulationEventSink,
    ) -> FlightCatalog {
        let edges: Vec<&Edge> = match order {
            EdgeOrder::Sorted => graph.get_sorted_list_of_edges(),
            EdgeOrder::Insertion => graph.edges().collect(),
        };

        let mut catalog = FlightCatalog::new();
        for edge in edges {
            match template.materialize(&edge.source, &edge.destination, edge.distance) {
                Ok(flight) => {
                    sink.publish(SimulationEvent::FlightMaterialized {
                        source: edge.source.clone(),
                        destination: edge.destination.clone(),
                        distance: edge.distance,
                    });
                    catalog.add_flight(flight);
                }
                Err(e) => {
                    sink.publish(SimulationEvent::FlightRejected {
                        source: edge.source.clone(),
                        destination: edge.destination.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        catalog
    }

    // ==========================================
    // 运行入口
    // ==========================================

    /// 图驱动模式
    pub fn run_from_graph(
        &self,
        graph: &AirportNetworkGraph,
        template: &FlightTemplate,
        order: EdgeOrder,
        sink: &mut dyn SimulationEventSink,
    ) -> AirlineSimulation {
        let mut perf = PerfGuard::new("run_from_graph");
        let catalog = Self::materialize_flights(graph, template, order, sink);
        perf.set_items(catalog.len());
        self.evaluate(&catalog, SimulationMode::GraphDriven, sink)
    }

    /// 记录驱动模式
    pub fn run_from_records<I>(
        &self,
        records: I,
        sink: &mut dyn SimulationEventSink,
    ) -> AirlineSimulation
    where
        I: IntoIterator<Item = FlightRecord>,
    {
        let mut perf = PerfGuard::new("run_from_records");
        let catalog: FlightCatalog = records.into_iter().collect();
        perf.set_items(catalog.len());
        self.evaluate(&catalog, SimulationMode::RecordDriven, sink)
    }

    /// 汇总目录内全部航班
    ///
    /// 核算失败或会使累计值溢出的航班以 FlightRejected 上报并跳过
    pub fn evaluate(
        &self,
        catalog: &FlightCatalog,
        mode: SimulationMode,
        sink: &mut dyn SimulationEventSink,
    ) -> AirlineSimulation {
        let mut flights: Vec<FlightProfit> = Vec::with_capacity(catalog.len());
        let mut totals = RunTotals::default();

        for flight in catalog.iter() {
            let accepted = self
                .engine
                .evaluate_flight(flight)
                .and_then(|profit| totals.add(&profit, flight).map(|next| (profit, next)));
            match accepted {
                Ok((profit, next)) => {
                    totals = next;
                    flights.push(profit);
                }
                Err(e) => {
                    warn!(%e, "航班核算失败，已跳过");
                    sink.publish(SimulationEvent::FlightRejected {
                        source: flight.source().to_string(),
                        destination: flight.destination().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let RunTotals {
            revenue: total_revenue,
            cost: total_cost,
            profit: total_profit,
        } = totals;

        info!(
            mode = ?mode,
            flight_count = flights.len(),
            %total_profit,
            "模拟完成"
        );
        sink.publish(SimulationEvent::SimulationCompleted {
            flight_count: flights.len(),
            total_profit,
        });

        AirlineSimulation {
            mode,
            flights,
            total_revenue,
            total_cost,
            total_profit,
        }
    }
}
