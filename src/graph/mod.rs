//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::{EdgeEntry, Graph, VertexInsert};
pub use vertex::{Vertex, VertexId};
