use super::*;
use crate::graph::algos::Dijkstra;
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

fn coords(entries: &[(&str, f64, f64)]) -> Coordinates {
    entries
        .iter()
        .map(|&(id, x, y)| (id.to_string(), (x, y)))
        .collect()
}

/// 5x5 grid, unit weights, with coordinates matching the layout
fn grid() -> (Graph, Coordinates) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut positions = Coordinates::new();
    for x in 0..5 {
        for y in 0..5 {
            let id = format!("{x},{y}");
            positions.insert(id.clone(), (f64::from(x), f64::from(y)));
            if x + 1 < 5 {
                edges.push(Edge::unweighted(id.clone(), format!("{},{y}", x + 1)));
            }
            if y + 1 < 5 {
                edges.push(Edge::unweighted(id.clone(), format!("{x},{}", y + 1)));
            }
            nodes.push(id);
        }
    }
    (Graph::new(false, nodes, edges).unwrap(), positions)
}

#[test]
fn test_open_entry_tie_breaks_on_g_score() {
    let low_g = OpenEntry {
        f_score: 4.0,
        g_score: 1.0,
        node: 9,
    };
    let high_g = OpenEntry {
        f_score: 4.0,
        g_score: 3.0,
        node: 0,
    };
    let lower_f = OpenEntry {
        f_score: 2.0,
        g_score: 2.0,
        node: 5,
    };
    assert_eq!(low_g.cmp(&high_g), Ordering::Less);
    assert_eq!(lower_f.cmp(&low_g), Ordering::Less);
}

#[test]
fn test_weighted_detour_with_default_coordinates() {
    let g = graph(
        true,
        &["A", "B", "C"],
        &[("A", "B", 5.0), ("A", "C", 2.0), ("C", "B", 1.0)],
    );
    let result = AStar::new(&g).find_shortest_path("A", "B", false).unwrap();
    assert_eq!(result.path, vec!["A", "C", "B"]);
    assert_eq!(result.distance, 3.0);
    assert_eq!(result.algorithm_used, AlgorithmType::AStar);
}

#[test]
fn test_zero_heuristic_matches_dijkstra_expansion() {
    // No coordinates: h == 0 everywhere, so A* settles exactly what Dijkstra does
    let (g, _) = grid();
    let astar = AStar::new(&g);
    assert_eq!(astar.placed_count(), 0);

    let a = astar.find_shortest_path("0,0", "4,4", true).unwrap();
    let d = Dijkstra::new(&g)
        .find_shortest_path("0,0", "4,4", true)
        .unwrap();
    assert_eq!(a.distance, d.distance);
    assert_eq!(a.visited_nodes_count, d.visited_nodes_count);
}

#[test]
fn test_good_heuristic_visits_no_more_than_dijkstra() {
    let (g, positions) = grid();
    let astar = AStar::new(&g).with_coordinates(&positions);
    assert_eq!(astar.placed_count(), 25);

    let a = astar.find_shortest_path("0,0", "4,0", false).unwrap();
    let d = Dijkstra::new(&g)
        .find_shortest_path("0,0", "4,0", false)
        .unwrap();
    assert_eq!(a.distance, 4.0);
    assert_eq!(a.distance, d.distance);
    assert!(a.visited_nodes_count <= d.visited_nodes_count);
    assert!(a.visited_nodes_count < 25);
}

#[test]
fn test_set_coordinates_ignores_unknown_ids() {
    let g = graph(false, &["A", "B"], &[("A", "B", 1.0)]);
    let mut astar = AStar::new(&g);
    let applied = astar.set_coordinates(&coords(&[("A", 0.0, 0.0), ("Nope", 1.0, 1.0)]));
    assert_eq!(applied, 1);
    assert_eq!(astar.placed_count(), 1);
}

#[test]
fn test_set_coordinates_merges() {
    let g = graph(false, &["A", "B"], &[("A", "B", 1.0)]);
    let mut astar = AStar::new(&g);
    astar.set_coordinates(&coords(&[("A", 0.0, 0.0)]));
    astar.set_coordinates(&coords(&[("B", 0.5, 0.0)]));
    assert_eq!(astar.placed_count(), 2);
    let check = astar.heuristic_check("A", "B").unwrap();
    assert_eq!(check.heuristic, 0.5);
}

#[test]
fn test_admissibility_check() {
    let g = graph(false, &["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 1.0)]);

    let honest = AStar::new(&g).with_coordinates(&coords(&[
        ("A", 0.0, 0.0),
        ("B", 1.0, 0.0),
        ("C", 2.0, 0.0),
    ]));
    assert!(honest.is_admissible_heuristic("A", "C").unwrap());

    let inflated = AStar::new(&g).with_coordinates(&coords(&[("A", 0.0, 0.0), ("C", 10.0, 0.0)]));
    let check = inflated.heuristic_check("A", "C").unwrap();
    assert_eq!(check.heuristic, 10.0);
    assert_eq!(check.actual, 2.0);
    assert!(!check.admissible);
}

#[test]
fn test_admissible_when_unreachable() {
    let g = graph(true, &["A", "B"], &[("B", "A", 1.0)]);
    let astar = AStar::new(&g).with_coordinates(&coords(&[("A", 0.0, 0.0), ("B", 3.0, 4.0)]));
    let check = astar.heuristic_check("A", "B").unwrap();
    assert_eq!(check.heuristic, 5.0);
    assert!(check.actual.is_infinite());
    assert!(check.admissible);

    let json = serde_json::to_value(&check).unwrap();
    assert!(json["actual"].is_null());
}

#[test]
fn test_admissibility_unknown_node() {
    let g = graph(false, &["A"], &[]);
    assert!(AStar::new(&g).is_admissible_heuristic("A", "Z").is_err());
}

#[test]
fn test_unreachable_and_reflexive() {
    let g = graph(true, &["A", "B"], &[("B", "A", 1.0)]);
    let astar = AStar::new(&g);

    let none = astar.find_shortest_path("A", "B", false).unwrap();
    assert!(!none.exists);
    assert!(none.distance.is_infinite());

    let same = astar.find_shortest_path("B", "B", false).unwrap();
    assert_eq!(same.path, vec!["B"]);
    assert_eq!(same.visited_nodes_count, 1);
}

#[test]
fn test_all_shortest_paths_match_dijkstra() {
    let (g, positions) = grid();
    let astar = AStar::new(&g).with_coordinates(&positions);
    let a = astar.find_all_shortest_paths("2,2").unwrap();
    let d = Dijkstra::new(&g).find_all_shortest_paths("2,2").unwrap();
    assert_eq!(a, d);
    assert_eq!(a["0,0"], 4.0);
}
