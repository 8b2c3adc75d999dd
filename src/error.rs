//! 错误类型定义

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("端点不在图中: {0}")]
    InvalidEndpoint(VertexId),

    #[error("边 ({vtx1}, {vtx2}) 已存在: {existing}")]
    DuplicateEdge {
        vtx1: VertexId,
        vtx2: VertexId,
        existing: EdgeId,
    },

    #[error("不允许自环: {0}")]
    SelfLoop(VertexId),

    #[error("无效的边权重: {0}")]
    InvalidWeight(f64),

    #[error("顶点 {0} 不是由此图分配的")]
    ForeignVertex(VertexId),

    #[error("图中没有顶点，请先添加顶点")]
    EmptyGraph,

    #[error("无效的起始顶点: {0}")]
    InvalidStartVertex(VertexId),

    #[error("优先队列为空")]
    EmptyQueue,

    #[error("图不连通: 仅覆盖 {covered}/{total} 个顶点")]
    DisconnectedGraph { covered: usize, total: usize },

    #[error("图不连通: 生成森林由 {components} 棵树组成（共 {total} 个顶点）")]
    DisconnectedForest { components: usize, total: usize },
}
