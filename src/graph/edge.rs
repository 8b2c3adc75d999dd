//! 边定义
//!
//! 无向带权边，端点无序

use crate::graph::vertex::VertexId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（图内唯一，从 0 开始递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 第一个端点
    vtx1: VertexId,
    /// 第二个端点
    vtx2: VertexId,
    /// 权重
    weight: Weight,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, vtx1: VertexId, vtx2: VertexId, weight: Weight) -> Self {
        Self {
            id,
            vtx1,
            vtx2,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn vtx1(&self) -> VertexId {
        self.vtx1
    }

    pub fn vtx2(&self) -> VertexId {
        self.vtx2
    }

    /// 两个端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.vtx1, self.vtx2)
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 判断端点是否为 (a, b)，不区分顺序
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vtx1 == a && self.vtx2 == b) || (self.vtx1 == b && self.vtx2 == a)
    }

    /// 是否与顶点相连
    pub fn is_incident(&self, v: VertexId) -> bool {
        self.vtx1 == v || self.vtx2 == v
    }

    /// 给定一个端点，返回另一个端点
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if self.vtx1 == v {
            Some(self.vtx2)
        } else if self.vtx2 == v {
            Some(self.vtx1)
        } else {
            None
        }
    }
}

/// 无序端点对的规范形式（小 ID 在前），用作去重索引的键
pub(crate) fn pair_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
