//! SpanGraph - 带权无向图与最小生成树
//!
//! 为图算法可视化设计的核心库：
//! - 以 ID 寻址的顶点/边存储，邻接表与边集始终一致
//! - 二叉堆最小优先队列
//! - Prim 与 Kruskal 最小生成树，按步骤惰性产出进度
//! - 并查集 / 遍历两种环检测

pub mod algorithm;
pub mod config;
pub mod error;
pub mod generate;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    kruskal, prim, Coverage, Disposition, Kruskal, MinPriorityQueue, MstAlgorithm, MstStep, Prim,
    SpanningTree,
};
pub use config::{CycleCheck, MstConfig};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeEntry, EdgeId, Graph, Vertex, VertexId, VertexInsert};
pub use types::{Position, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
