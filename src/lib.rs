//! Allocflow - chart-data core for the allocation statistics dashboard
//!
//! Two independent, composable pieces: flattening a weighted
//! allocation tree into the node/link pair Sankey renderers consume,
//! and resolving the axis scale (linear or symmetric-log) charts
//! apply to magnitude series.

pub mod error;
pub mod flow_graph;
pub mod scale;

pub use error::{AllocflowError, FixSuggestion};
pub use flow_graph::{FlowGraph, FlowLink, FlowNode, FlowTree, Meta};
pub use scale::{min_positive_magnitude, resolve_scale, Scale, ScaleMode};
