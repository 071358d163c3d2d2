use colored::*;
use village_paths::graph::Graph;
use village_paths::{sample_village_network, Dijkstra, ShortestPathAlgorithm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let network = sample_village_network();
    let solver = Dijkstra::new();

    println!("{}", "=== Village Road Network ===".bold());
    println!(
        "Network has {} villages and {} roads\n",
        network.node_count(),
        network.edge_count()
    );

    for id in network.node_ids() {
        let roads: Vec<String> = network
            .neighbors(id)
            .map(|(neighbor, distance)| {
                format!("{} ({:.0} km)", network.node_name(neighbor), distance)
            })
            .collect();
        println!("  {} - {}", network.node_name(id).cyan(), roads.join(", "));
    }

    let route_cases = [(0, 4), (0, 7), (1, 6), (0, 3)];

    println!("\n{}", "=== Shortest Routes ===".bold());
    for (start, end) in route_cases {
        let result = solver.find_shortest_path(&network, start, end)?;

        let heading = format!(
            "{} -> {}",
            network.node_name(start),
            network.node_name(end)
        );

        if result.success {
            let stops: Vec<String> = result
                .path
                .iter()
                .map(|&id| network.node_name(id))
                .collect();
            println!(
                "  {} {} via {} ({:.1} km)",
                heading.bold(),
                "found".green(),
                stops.join(" -> "),
                result.distance.into_inner()
            );
        } else {
            println!("  {} {}", heading.bold(), "no route".red());
        }
    }

    Ok(())
}
