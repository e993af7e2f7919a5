use dense_sssp::{shortest_paths, Graph};

fn main() {
    #[cfg(feature = "env_logger")]
    env_logger::init();

    let edges = [
        (0, 1, 4.0),
        (0, 7, 8.0),
        (1, 7, 11.0),
        (1, 2, 8.0),
        (7, 8, 7.0),
        (6, 7, 1.0),
        (2, 8, 2.0),
        (6, 8, 6.0),
        (5, 6, 2.0),
        (2, 5, 4.0),
        (2, 3, 7.0),
        (3, 5, 14.0),
        (3, 4, 9.0),
        (4, 5, 10.0),
    ];

    let graph = Graph::from_edges(9, &edges).expect("edge list is valid");
    let table = shortest_paths(&graph, 0).expect("source 0 is in range");

    println!("Shortest distances from vertex 0:");
    for vertex in 0..graph.vertices {
        let pred = table
            .predecessor(vertex)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".into());

        if table.is_reachable(vertex) {
            println!("  {} -> {:.1} (via {})", vertex, table.distance(vertex), pred);
        } else {
            println!("  {} -> ∞", vertex);
        }
    }
}
