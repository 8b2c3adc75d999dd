//! 算法步骤与最小生成树结果
//!
//! 渲染层按步骤消费算法进度，自行决定节奏

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, VertexId};
use crate::types::Weight;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 生成树算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstAlgorithm::Prim => write!(f, "Prim"),
            MstAlgorithm::Kruskal => write!(f, "Kruskal"),
        }
    }
}

/// 边在某一步中的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// 进入优先队列
    Enqueued,
    /// 加入生成树
    Accepted,
    /// 会形成环，被丢弃
    RejectedCycle,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Disposition::Enqueued => "enqueued",
            Disposition::Accepted => "accepted",
            Disposition::RejectedCycle => "rejected (cycle)",
        };
        f.write_str(s)
    }
}

/// 一个离散的算法步骤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstStep {
    pub edge: EdgeId,
    pub vtx1: VertexId,
    pub vtx2: VertexId,
    pub weight: Weight,
    pub disposition: Disposition,
    /// 截至此步的累计代价
    pub total_cost: Weight,
}

impl MstStep {
    pub(crate) fn new(edge: &Edge, disposition: Disposition, total_cost: Weight) -> Self {
        Self {
            edge: edge.id(),
            vtx1: edge.vtx1(),
            vtx2: edge.vtx2(),
            weight: edge.weight(),
            disposition,
            total_cost,
        }
    }
}

/// 生成树覆盖情况
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    /// 覆盖所有顶点
    Spanning,
    /// 输入图不连通，只覆盖起点所在的连通分量
    Partial { covered: usize, total: usize },
    /// 输入图不连通，得到由 `components` 棵树组成的生成森林（孤立顶点各算一棵）
    Forest { components: usize, total: usize },
}

/// 最小生成树（或森林）
///
/// 顶点和边都是原图中的 ID。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    algorithm: MstAlgorithm,
    vertices: IndexSet<VertexId>,
    edges: Vec<EdgeId>,
    total_cost: Weight,
    coverage: Coverage,
}

impl SpanningTree {
    pub(crate) fn new(
        algorithm: MstAlgorithm,
        vertices: IndexSet<VertexId>,
        edges: Vec<EdgeId>,
        total_cost: Weight,
        coverage: Coverage,
    ) -> Self {
        Self {
            algorithm,
            vertices,
            edges,
            total_cost,
            coverage,
        }
    }

    pub fn algorithm(&self) -> MstAlgorithm {
        self.algorithm
    }

    /// 按加入顺序排列的顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    /// 按接受顺序排列的边
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 已接受边的权重之和
    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn is_spanning(&self) -> bool {
        self.coverage == Coverage::Spanning
    }

    /// 要求覆盖所有顶点，否则返回 `DisconnectedGraph` / `DisconnectedForest`
    pub fn require_spanning(&self) -> Result<&Self> {
        match self.coverage {
            Coverage::Spanning => Ok(self),
            Coverage::Partial { covered, total } => {
                Err(Error::DisconnectedGraph { covered, total })
            }
            Coverage::Forest { components, total } => {
                Err(Error::DisconnectedForest { components, total })
            }
        }
    }
}
