use crate::graph::village::VillageGraph;
use crate::graph::MutableGraph;
use ordered_float::OrderedFloat;

/// Builds the fixed eight-village demonstration network.
///
/// Road distances are in kilometers.
pub fn sample_village_network() -> VillageGraph<OrderedFloat<f64>> {
    let mut graph = VillageGraph::with_capacity(8);

    let villages = [
        (0, "Desa Makmur"),
        (1, "Desa Sejahtera"),
        (2, "Desa Subur"),
        (3, "Desa Sentosa"),
        (4, "Desa Jaya"),
        (5, "Desa Bahagia"),
        (6, "Desa Maju"),
        (7, "Desa Damai"),
    ];

    for (id, name) in villages {
        graph.add_node(id, name);
    }

    let roads = [
        (0, 1, 7.0),
        (0, 2, 9.0),
        (0, 5, 14.0),
        (1, 2, 10.0),
        (1, 3, 15.0),
        (2, 3, 11.0),
        (2, 5, 2.0),
        (3, 4, 6.0),
        (4, 5, 9.0),
        (5, 6, 8.0),
        (6, 7, 5.0),
        (3, 7, 12.0),
    ];

    for (u, v, distance) in roads {
        graph.add_edge(u, v, OrderedFloat(distance));
    }

    graph
}
