use super::*;
use crate::error::PathfinderError;
use crate::graph::Edge;

fn graph(directed: bool, nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    Graph::new(
        directed,
        nodes.iter().map(|n| n.to_string()).collect(),
        edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect(),
    )
    .unwrap()
}

fn triangle() -> Graph {
    graph(
        true,
        &["A", "B", "C"],
        &[("A", "B", 5.0), ("A", "C", 2.0), ("C", "B", 1.0)],
    )
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let cheap = HeapEntry { cost: 1.0, node: 4 };
    let dear = HeapEntry { cost: 2.0, node: 0 };
    let tie = HeapEntry { cost: 1.0, node: 7 };

    assert_eq!(cheap.cmp(&dear), Ordering::Less);
    assert_eq!(dear.cmp(&cheap), Ordering::Greater);
    // Equal costs fall back to node index
    assert_eq!(cheap.cmp(&tie), Ordering::Less);
    assert_eq!(cheap, cheap);
    assert_ne!(cheap, tie);
}

#[test]
fn test_min_heap_pops_cheapest_first() {
    let mut heap = BinaryHeap::new();
    for (cost, node) in [(3.0, 0), (1.0, 1), (2.0, 2)] {
        heap.push(Reverse(HeapEntry { cost, node }));
    }
    let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn test_prefers_cheaper_detour() {
    let dijkstra = Dijkstra::new(&triangle());
    let result = dijkstra.find_shortest_path("A", "B", false).unwrap();
    assert!(result.exists);
    assert_eq!(result.path, vec!["A", "C", "B"]);
    assert_eq!(result.distance, 3.0);
    assert_eq!(result.algorithm_used, AlgorithmType::Dijkstra);
}

#[test]
fn test_visited_nodes_in_settle_order() {
    let dijkstra = Dijkstra::new(&triangle());
    let result = dijkstra.find_shortest_path("A", "B", true).unwrap();
    assert_eq!(
        result.visited_nodes,
        Some(vec!["A".to_string(), "C".to_string(), "B".to_string()])
    );
    assert_eq!(result.visited_nodes_count, 3);
}

#[test]
fn test_visited_nodes_absent_unless_requested() {
    let dijkstra = Dijkstra::new(&triangle());
    let result = dijkstra.find_shortest_path("A", "B", false).unwrap();
    assert!(result.visited_nodes.is_none());
    assert_eq!(result.visited_nodes_count, 3);
}

#[test]
fn test_early_exit_leaves_far_nodes_unsettled() {
    // D and E lie beyond the target and should never be settled
    let g = graph(
        true,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("A", "C", 10.0),
            ("C", "D", 1.0),
            ("D", "E", 1.0),
        ],
    );
    let result = Dijkstra::new(&g)
        .find_shortest_path("A", "B", true)
        .unwrap();
    assert_eq!(result.distance, 1.0);
    assert_eq!(result.visited_nodes_count, 2);
}

#[test]
fn test_directed_edges_are_one_way() {
    let dijkstra = Dijkstra::new(&triangle());
    let result = dijkstra.find_shortest_path("B", "A", false).unwrap();
    assert!(!result.exists);
    assert!(result.path.is_empty());
    assert!(result.distance.is_infinite());
    assert_eq!(result.visited_nodes_count, 1);
}

#[test]
fn test_undirected_traverses_both_ways() {
    let g = graph(
        false,
        &["A", "B", "C"],
        &[("A", "B", 5.0), ("A", "C", 2.0), ("C", "B", 1.0)],
    );
    let result = Dijkstra::new(&g).find_shortest_path("B", "A", false).unwrap();
    assert_eq!(result.path, vec!["B", "C", "A"]);
    assert_eq!(result.distance, 3.0);
}

#[test]
fn test_source_equals_target() {
    let result = Dijkstra::new(&triangle())
        .find_shortest_path("C", "C", true)
        .unwrap();
    assert!(result.exists);
    assert_eq!(result.path, vec!["C"]);
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.visited_nodes_count, 1);
    assert_eq!(result.visited_nodes, Some(vec!["C".to_string()]));
}

#[test]
fn test_unknown_endpoints_error() {
    let dijkstra = Dijkstra::new(&triangle());
    let err = dijkstra.find_shortest_path("Z", "A", false).unwrap_err();
    assert!(matches!(err, PathfinderError::UnknownNode { ref role, ref id } if role == "source" && id == "Z"));

    let err = dijkstra.find_shortest_path("A", "Z", false).unwrap_err();
    assert!(matches!(err, PathfinderError::UnknownNode { ref role, .. } if role == "target"));

    // Existence is checked before the reflexive shortcut
    assert!(dijkstra.find_shortest_path("Z", "Z", false).is_err());
    assert!(dijkstra.find_all_shortest_paths("Z").is_err());
}

#[test]
fn test_all_shortest_paths() {
    let g = graph(
        true,
        &["A", "B", "C", "D"],
        &[("A", "B", 5.0), ("A", "C", 2.0), ("C", "B", 1.0)],
    );
    let distances = Dijkstra::new(&g).find_all_shortest_paths("A").unwrap();
    assert_eq!(distances.len(), 4);
    assert_eq!(distances["A"], 0.0);
    assert_eq!(distances["B"], 3.0);
    assert_eq!(distances["C"], 2.0);
    assert!(distances["D"].is_infinite());
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let g = graph(true, &["A", "B"], &[("A", "B", 4.0), ("A", "B", 1.5)]);
    let result = Dijkstra::new(&g).find_shortest_path("A", "B", false).unwrap();
    assert_eq!(result.distance, 1.5);
}

#[test]
fn test_search_without_target_settles_everything_reachable() {
    let g = triangle();
    let index = AdjacencyIndex::build(&g);
    let source = index.index_of("A").unwrap();
    let state = search(&index, source, None, true);
    assert_eq!(state.closed_count, 3);
    assert_eq!(state.visited_order.unwrap().len(), 3);
}
