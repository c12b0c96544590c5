// ==========================================
// 航线网络利润模拟 - 引擎层诊断事件
// ==========================================
// 职责: 定义诊断事件与事件接收端 trait
// 说明: 引擎不持有全局日志单例，诊断通过调用方传入的 sink 上报
// ==========================================

use crate::domain::types::Distance;
use crate::graph::EdgeRejection;
use rust_decimal::Decimal;
use serde::Serialize;

// ==========================================
// 诊断事件
// ==========================================

/// 一次模拟运行中产生的诊断事件
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimulationEvent {
    /// 图描述中的航线被网络图拒绝
    EdgeRejected { reason: EdgeRejection },
    /// 航线无法生成合法航班
    FlightRejected {
        source: String,
        destination: String,
        reason: String,
    },
    /// 由图边生成了航班
    FlightMaterialized {
        source: String,
        destination: String,
        distance: Distance,
    },
    /// 模拟运行完成
    SimulationCompleted {
        flight_count: usize,
        total_profit: Decimal,
    },
}

impl SimulationEvent {
    /// 事件标识
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationEvent::EdgeRejected { .. } => "EdgeRejected",
            SimulationEvent::FlightRejected { .. } => "FlightRejected",
            SimulationEvent::FlightMaterialized { .. } => "FlightMaterialized",
            SimulationEvent::SimulationCompleted { .. } => "SimulationCompleted",
        }
    }
}

// ==========================================
// 事件接收端 Trait
// ==========================================

/// 诊断事件接收端
///
/// 单线程使用，由调用方持有并传入引擎
pub trait SimulationEventSink {
    /// 上报事件
    fn publish(&mut self, event: SimulationEvent);
}

/// 空操作接收端
///
/// 仅写 debug 日志，用于不关心诊断的场景
#[derive(Debug, Clone, Default)]
pub struct NoOpEventSink;

impl SimulationEventSink for NoOpEventSink {
    fn publish(&mut self, event: SimulationEvent) {
        tracing::debug!("NoOpEventSink: 丢弃事件 {}", event.as_str());
    }
}

/// 记录型接收端：按顺序保留全部事件
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Vec<SimulationEvent>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    /// 被拒绝的航线
    pub fn rejected_edges(&self) -> Vec<&EdgeRejection> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SimulationEvent::EdgeRejected { reason } => Some(reason),
                _ => None,
            })
            .collect()
    }

    pub fn into_events(self) -> Vec<SimulationEvent> {
        self.events
    }
}

impl SimulationEventSink for RecordingEventSink {
    fn publish(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rejected(source: &str) -> SimulationEvent {
        SimulationEvent::FlightRejected {
            source: source.to_string(),
            destination: "Z".to_string(),
            reason: "航班总收入超出可表示范围".to_string(),
        }
    }

    #[test]
    fn test_recording_sink_keeps_publish_order() {
        let mut sink = RecordingEventSink::new();
        sink.publish(rejected("A"));
        sink.publish(SimulationEvent::SimulationCompleted {
            flight_count: 0,
            total_profit: dec!(0),
        });
        assert!(sink.rejected_edges().is_empty());

        let events = sink.into_events();
        let names: Vec<&str> = events.iter().map(SimulationEvent::as_str).collect();
        assert_eq!(names, vec!["FlightRejected", "SimulationCompleted"]);
        assert_eq!(events[0], rejected("A"));
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let json = serde_json::to_value(rejected("A")).unwrap();
        assert_eq!(json["event"], "flight_rejected");
        assert_eq!(json["source"], "A");
    }
}
