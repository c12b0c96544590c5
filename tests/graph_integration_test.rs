// ==========================================
// AirportNetworkGraph 集成测试
// ==========================================
// 测试目标: 验证网络图不变量在任意操作序列下保持
// 覆盖范围: 建边拒绝、删除级联、排序、清空、图描述填充
// ==========================================

mod test_helpers;

use airline_network::engine::{AirlineSimulationBuilder, RecordingEventSink, SimulationEvent};
use airline_network::importer::parse_route_descriptions;
use airline_network::{Airport, AirportNetworkGraph, EdgeRejection};
use test_helpers::create_test_graph;

// ==========================================
// 建边不变量
// ==========================================

#[test]
fn test_valid_edges_are_symmetric() {
    let pairs = [("A", "B", 1), ("B", "C", 20), ("C", "A", 300), ("D", "A", 4000)];
    let graph = create_test_graph(&pairs);

    for (source, destination, distance) in pairs {
        assert!(graph.are_airports_connected(source, destination));
        assert!(graph.are_airports_connected(destination, source));
        assert_eq!(graph.get_distance(source, destination), distance);
        assert_eq!(graph.get_distance(destination, source), distance);
    }
    assert_eq!(graph.edge_count(), pairs.len());
}

#[test]
fn test_invalid_edges_leave_graph_unchanged() {
    let mut graph = create_test_graph(&[("A", "B", 500)]);
    let before = graph.print_graph();

    assert!(!graph.create_edge("A", "A", 100));
    assert!(!graph.create_edge("A", "B", 10));
    assert!(!graph.create_edge("B", "A", 10));
    assert!(!graph.create_edge("A", "B", 0));
    assert!(!graph.create_edge("B", "C", -1));

    assert_eq!(graph.print_graph(), before);
    assert_eq!(graph.airport_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

// ==========================================
// 删除
// ==========================================

#[test]
fn test_remove_hub_airport() {
    let mut graph = create_test_graph(&[
        ("HUB", "A", 1),
        ("HUB", "B", 2),
        ("C", "HUB", 3),
        ("A", "B", 4),
    ]);

    graph.remove_airport("HUB");

    assert!(!graph.is_airport_in_graph("HUB"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_sorted_list_of_edges().len(), 1);
    for other in ["A", "B", "C"] {
        assert!(!graph.are_airports_connected("HUB", other));
        assert!(graph.is_airport_in_graph(other));
    }

    // 同名机场重新加入后为孤立顶点
    graph.add_airport(Airport::new("HUB"));
    assert!(!graph.are_airports_connected("HUB", "A"));
    assert!(graph.create_edge("HUB", "A", 9));
}

#[test]
fn test_sorted_edges_after_mixed_operations() {
    let mut graph = create_test_graph(&[
        ("A", "B", 50),
        ("B", "C", 10),
        ("C", "D", 30),
        ("D", "A", 10),
        ("A", "C", 40),
    ]);
    graph.remove_edge("C", "D");
    graph.remove_airport("B");
    graph.create_edge("B", "D", 5); // B 已删除: 被拒

    let sorted = graph.get_sorted_list_of_edges();
    let distances: Vec<i64> = sorted.iter().map(|e| e.distance).collect();
    assert_eq!(distances, vec![10, 40]);
    assert_eq!(sorted.len(), graph.edge_count());
}

#[test]
fn test_clear_then_reuse() {
    let mut graph = create_test_graph(&[("A", "B", 1), ("B", "C", 2)]);
    graph.clear_graph();

    for name in ["A", "B", "C"] {
        assert!(!graph.is_airport_in_graph(name));
    }
    assert!(graph.get_sorted_list_of_edges().is_empty());

    graph.add_airport(Airport::new("A"));
    graph.add_airport(Airport::new("B"));
    assert!(graph.create_edge("A", "B", 7));
    assert_eq!(graph.edges().next().map(|e| e.id.0), Some(0));
}

// ==========================================
// 图描述填充
// ==========================================

#[test]
fn test_populate_from_route_description() {
    let text = "\
A|B|500
A|A|100
B|C|-3
B|A|20
C|D|70
";
    let routes = parse_route_descriptions(text.as_bytes()).unwrap();
    assert!(routes.is_clean());

    let mut graph = AirportNetworkGraph::new();
    let mut sink = RecordingEventSink::new();
    let accepted = AirlineSimulationBuilder::populate_graph(&mut graph, &routes.records, &mut sink);

    assert_eq!(accepted, 2);
    assert_eq!(graph.airport_names(), &["A", "B", "C", "D"]);

    let rejected = sink.rejected_edges();
    assert_eq!(rejected.len(), 3);
    assert_eq!(rejected[0], &EdgeRejection::SelfLoop("A".to_string()));
    assert!(matches!(rejected[1], EdgeRejection::NonPositiveDistance { distance: -3, .. }));
    assert!(matches!(rejected[2], EdgeRejection::DuplicateEdge { .. }));
    assert!(sink
        .events()
        .iter()
        .all(|e| matches!(e, SimulationEvent::EdgeRejected { .. })));

    let expected = "\
Vertex: A
    -> B(500)
Vertex: B
    -> A(500)
Vertex: C
    -> D(70)
Vertex: D
    -> C(70)
";
    assert_eq!(graph.print_graph(), expected);
}
