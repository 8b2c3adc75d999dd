//! 图算法模块
//!
//! 包含最小优先队列、环检测以及 Prim / Kruskal 最小生成树算法

mod cycle;
mod kruskal;
mod prim;
mod priority_queue;
mod step;

pub use cycle::{detector_for, would_create_cycle, CycleDetector, DisjointSet, TraversalDetector};
pub use kruskal::{kruskal, Kruskal, KruskalSteps};
pub use prim::{prim, Prim, PrimSteps};
pub use priority_queue::MinPriorityQueue;
pub use step::{Coverage, Disposition, MstAlgorithm, MstStep, SpanningTree};
