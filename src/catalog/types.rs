//! Catalog entry types.

use serde::Serialize;
use utoipa::ToSchema;

/// A kind of pipeline node the editor can place on its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct NodeType {
    /// Stable opaque identifier.
    #[schema(example = "1")]
    pub id: &'static str,
    /// Display label.
    #[schema(example = "Data Source")]
    pub name: &'static str,
}

impl NodeType {
    const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// The full catalog, in display order.
///
/// Clients render the palette in this order, so it must not be re-sorted.
pub const NODE_TYPES: [NodeType; 4] = [
    NodeType::new("1", "Data Source"),
    NodeType::new("2", "Transformer"),
    NodeType::new("3", "Model"),
    NodeType::new("4", "Sink"),
];
