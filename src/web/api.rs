use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::village::VillageGraph;
use crate::graph::Graph;
use crate::web::models::*;

/// Shared application state.
///
/// The network is read-only once the server starts, so plain `Arc` sharing
/// across handlers is safe; every route query owns its own solver state.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<VillageGraph<OrderedFloat<f64>>>,
}

impl AppState {
    pub fn new(network: VillageGraph<OrderedFloat<f64>>) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/network", get(get_network))
        .route("/api/villages", get(list_villages))
        .route("/api/route", post(compute_route))
        .route("/api/health", get(health_check))
}

/// Get the drawable network without any route highlight
pub async fn get_network(State(state): State<AppState>) -> Json<NetworkMap> {
    Json(network_to_map(state.network.as_ref(), &[]))
}

/// List the registered villages in registration order
pub async fn list_villages(State(state): State<AppState>) -> Json<Vec<VillageInfo>> {
    let network = state.network.as_ref();
    let villages = network
        .node_ids()
        .map(|id| VillageInfo {
            id,
            name: network.node_name(id),
        })
        .collect();
    Json(villages)
}

/// Compute the shortest route between two villages
pub async fn compute_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let network = state.network.as_ref();
    log::info!("route request: {} -> {}", request.start, request.end);

    let solver = Dijkstra::new();
    let result = match solver.find_shortest_path(network, request.start, request.end) {
        Ok(result) => result,
        Err(err) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "solver_failed".to_string(),
                    message: format!("Route computation failed: {}", err),
                }),
            ));
        }
    };

    log::debug!(
        "route {} -> {}: found={} distance={:.1}",
        request.start,
        request.end,
        result.success,
        result.distance.into_inner()
    );

    let path_names = result
        .path
        .iter()
        .map(|&id| network.node_name(id))
        .collect();

    Ok(Json(RouteResponse {
        request_id: Uuid::new_v4(),
        computed_at: chrono::Utc::now(),
        start: request.start,
        end: request.end,
        found: result.success,
        distance: result.distance.into_inner(),
        path_names,
        map: network_to_map(network, &result.path),
        path: result.path,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "village-paths-api",
    }))
}

/// Places the registered villages evenly on a circle, sorted by identifier
/// so the layout is stable across requests.
fn circular_layout(network: &VillageGraph<OrderedFloat<f64>>) -> HashMap<usize, (f64, f64)> {
    let mut ids: Vec<usize> = network.node_ids().collect();
    ids.sort_unstable();

    let count = ids.len();
    let radius = 3.0;

    ids.into_iter()
        .enumerate()
        .map(|(i, id)| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / count.max(1) as f64;
            (id, (angle.cos() * radius, angle.sin() * radius))
        })
        .collect()
}

/// Converts the network into its drawable form, flagging the nodes and
/// edges that lie on the given path
fn network_to_map(network: &VillageGraph<OrderedFloat<f64>>, path: &[usize]) -> NetworkMap {
    let layout = circular_layout(network);

    let path_edges: HashSet<(usize, usize)> = path
        .windows(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .collect();

    let nodes = network
        .node_ids()
        .map(|id| {
            let (x, y) = layout.get(&id).copied().unwrap_or((0.0, 0.0));
            MapNode {
                id,
                name: network.node_name(id),
                x,
                y,
                on_path: path.contains(&id),
            }
        })
        .collect();

    // Each undirected road is drawn once, from its smaller endpoint
    let mut links = Vec::new();
    let mut drawn: HashSet<(usize, usize)> = HashSet::new();
    for u in network.node_ids() {
        for (v, weight) in network.neighbors(u) {
            let key = (u.min(v), u.max(v));
            if drawn.insert(key) {
                links.push(MapEdge {
                    source: key.0,
                    target: key.1,
                    weight: weight.into_inner(),
                    on_path: path_edges.contains(&key),
                });
            }
        }
    }

    NetworkMap { nodes, links }
}
