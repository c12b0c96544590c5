use super::*;
use crate::domain::airport::Airport;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建包含指定机场的图
fn create_test_graph(names: &[&str]) -> AirportNetworkGraph {
    let mut graph = AirportNetworkGraph::new();
    for name in names {
        graph.add_airport(Airport::new(*name));
    }
    graph
}

// ==========================================
// 顶点
// ==========================================

#[test]
fn test_add_airport_is_idempotent() {
    let mut graph = create_test_graph(&["A"]);
    graph.add_airport(Airport::new("A").with_city("Atlanta"));

    assert_eq!(graph.airport_count(), 1);
    assert_eq!(graph.airport_names(), &["A".to_string()]);
    assert_eq!(
        graph.get_airport("A").and_then(|a| a.city.as_deref()),
        Some("Atlanta")
    );
}

#[test]
fn test_get_unknown_airport_is_none() {
    let graph = create_test_graph(&["A"]);
    assert!(graph.get_airport("Z").is_none());
    assert!(!graph.is_airport_in_graph("Z"));
}

// ==========================================
// 建边
// ==========================================

#[test]
fn test_create_edge_connects_both_directions() {
    let mut graph = create_test_graph(&["A", "B"]);

    assert!(graph.create_edge("A", "B", 500));
    assert!(graph.are_airports_connected("A", "B"));
    assert!(graph.are_airports_connected("B", "A"));
    assert_eq!(graph.get_distance("A", "B"), 500);
    assert_eq!(graph.get_distance("B", "A"), 500);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_create_edge_rejects_self_loop() {
    let mut graph = create_test_graph(&["A", "B"]);

    assert!(!graph.create_edge("A", "A", 100));
    assert_eq!(graph.airport_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(
        graph.try_create_edge("A", "A", 100),
        Err(EdgeRejection::SelfLoop("A".to_string()))
    );
}

#[test]
fn test_create_edge_rejects_non_positive_distance() {
    let mut graph = create_test_graph(&["A", "B"]);

    assert!(!graph.create_edge("A", "B", 0));
    assert!(!graph.create_edge("A", "B", -10));
    assert!(!graph.are_airports_connected("A", "B"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_create_edge_rejects_duplicate_in_either_direction() {
    let mut graph = create_test_graph(&["A", "B"]);

    assert!(graph.create_edge("A", "B", 500));
    assert!(!graph.create_edge("A", "B", 700));
    assert!(!graph.create_edge("B", "A", 700));
    assert_eq!(graph.get_distance("A", "B"), 500);
    assert_eq!(graph.edge_count(), 1);
    assert!(matches!(
        graph.try_create_edge("B", "A", 1),
        Err(EdgeRejection::DuplicateEdge { .. })
    ));
}

#[test]
fn test_create_edge_rejects_unknown_airport() {
    let mut graph = create_test_graph(&["A"]);

    assert_eq!(
        graph.try_create_edge("A", "Z", 10),
        Err(EdgeRejection::UnknownAirport("Z".to_string()))
    );
    assert!(!graph.is_airport_in_graph("Z"));
}

#[test]
fn test_get_distance_returns_zero_when_not_connected() {
    let graph = create_test_graph(&["A", "B"]);
    assert_eq!(graph.get_distance("A", "B"), 0);
    assert_eq!(graph.distance_between("A", "B"), None);
    assert_eq!(graph.get_distance("A", "A"), 0);
}

// ==========================================
// 删除
// ==========================================

#[test]
fn test_remove_edge() {
    let mut graph = create_test_graph(&["A", "B", "C"]);
    graph.create_edge("A", "B", 1);
    graph.create_edge("B", "C", 2);

    graph.remove_edge("B", "A");
    assert!(!graph.are_airports_connected("A", "B"));
    assert!(graph.are_airports_connected("B", "C"));
    assert_eq!(graph.edge_count(), 1);

    // 不存在的边: 空操作
    graph.remove_edge("A", "C");
    graph.remove_edge("X", "Y");
    assert_eq!(graph.edge_count(), 1);

    // 删除后可重新建边
    assert!(graph.create_edge("A", "B", 3));
}

#[test]
fn test_remove_airport_removes_incident_edges() {
    let mut graph = create_test_graph(&["A", "B", "C", "D"]);
    graph.create_edge("A", "B", 1);
    graph.create_edge("C", "A", 2);
    graph.create_edge("C", "D", 3);

    graph.remove_airport("A");

    assert!(!graph.is_airport_in_graph("A"));
    assert!(graph.get_airport("A").is_none());
    assert!(!graph.are_airports_connected("A", "B"));
    assert!(!graph.are_airports_connected("C", "A"));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edges().all(|e| e.other_endpoint("A").is_none()));

    let adjacency = graph.adjacency();
    let b = adjacency.iter().find(|e| e.airport == "B").unwrap();
    assert!(b.neighbors.is_empty());

    // 不存在的机场: 空操作
    graph.remove_airport("A");
    assert_eq!(graph.airport_count(), 3);
}

#[test]
fn test_clear_graph() {
    let mut graph = create_test_graph(&["A", "B", "C"]);
    graph.create_edge("A", "B", 1);
    graph.create_edge("B", "C", 2);

    graph.clear_graph();

    for name in ["A", "B", "C"] {
        assert!(!graph.is_airport_in_graph(name));
    }
    assert!(!graph.are_airports_connected("A", "B"));
    assert_eq!(graph.airport_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.print_graph().is_empty());
}

// ==========================================
// 排序
// ==========================================

#[test]
fn test_sorted_edges_ascending_with_insertion_tie_break() {
    let mut graph = create_test_graph(&["A", "B", "C", "D"]);
    graph.create_edge("A", "B", 300);
    graph.create_edge("C", "D", 100);
    graph.create_edge("A", "C", 300);
    graph.create_edge("B", "D", 200);
    graph.create_edge("B", "C", 100);

    let sorted: Vec<(String, String, i64)> = graph
        .get_sorted_list_of_edges()
        .into_iter()
        .map(|e| (e.source.clone(), e.destination.clone(), e.distance))
        .collect();

    assert_eq!(
        sorted,
        vec![
            ("C".to_string(), "D".to_string(), 100),
            ("B".to_string(), "C".to_string(), 100),
            ("B".to_string(), "D".to_string(), 200),
            ("A".to_string(), "B".to_string(), 300),
            ("A".to_string(), "C".to_string(), 300),
        ]
    );
}

#[test]
fn test_sorted_edges_count_tracks_add_and_remove() {
    let mut graph = create_test_graph(&["A", "B", "C"]);
    graph.create_edge("A", "B", 3);
    graph.create_edge("B", "C", 1);
    graph.create_edge("A", "C", 2);
    graph.remove_edge("A", "C");

    let sorted = graph.get_sorted_list_of_edges();
    assert_eq!(sorted.len(), 2);
    assert!(sorted.windows(2).all(|w| w[0].distance <= w[1].distance));
}

// ==========================================
// 输出
// ==========================================

#[test]
fn test_print_graph_lists_edge_under_both_endpoints() {
    let mut graph = create_test_graph(&["A", "B", "C"]);
    graph.create_edge("A", "B", 500);
    graph.create_edge("C", "A", 250);

    let expected = "\
Vertex: A
    -> B(500)
    -> C(250)
Vertex: B
    -> A(500)
Vertex: C
    -> A(250)
";
    assert_eq!(graph.print_graph(), expected);
    assert_eq!(graph.to_string(), expected);
}
