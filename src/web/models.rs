use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a village node placed for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapNode {
    pub id: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub on_path: bool,
}

/// Represents a road between two villages for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    #[serde(default)]
    pub on_path: bool,
}

/// A complete drawable network, optionally with a highlighted route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkMap {
    pub nodes: Vec<MapNode>,
    pub links: Vec<MapEdge>,
}

/// A registered village
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillageInfo {
    pub id: usize,
    pub name: String,
}

/// Parameters for a route computation
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start: usize,
    pub end: usize,
}

/// Response containing a computed route.
///
/// `found` is false for unreachable or unknown endpoints; the distance and
/// path are empty in that case and the map carries no highlight.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub request_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub start: usize,
    pub end: usize,
    pub found: bool,
    pub distance: f64,
    pub path: Vec<usize>,
    pub path_names: Vec<String>,
    pub map: NetworkMap,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
