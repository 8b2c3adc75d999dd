//! 顶点定义

use crate::graph::edge::EdgeId;
use crate::types::Position;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一，从 0 开始递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 画布坐标（可选）
    position: Option<Position>,
    /// 邻接表：邻居 ID -> 连接两者的边
    neighbors: IndexMap<VertexId, EdgeId>,
}

impl Vertex {
    /// 创建新顶点（由 `Graph::create_vertex` 分配 ID）
    pub(crate) fn new(id: VertexId, position: Option<Position>) -> Self {
        Self {
            id,
            position,
            neighbors: IndexMap::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取坐标
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// 设置坐标
    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// 按插入顺序遍历邻居
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.keys().copied()
    }

    /// 按插入顺序遍历 (邻居, 边)
    pub fn incident(&self) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.neighbors.iter().map(|(&v, &e)| (v, e))
    }

    /// 到某个邻居的边
    pub fn edge_to(&self, neighbor: VertexId) -> Option<EdgeId> {
        self.neighbors.get(&neighbor).copied()
    }

    /// 判断是否为邻居
    pub fn has_neighbor(&self, other: VertexId) -> bool {
        self.neighbors.contains_key(&other)
    }

    /// 度数
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn add_neighbor(&mut self, neighbor: VertexId, edge: EdgeId) {
        self.neighbors.entry(neighbor).or_insert(edge);
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_neighbors() {
        let mut v = Vertex::new(VertexId::new(0), Some(Position::new(1.0, 2.0)));
        v.add_neighbor(VertexId::new(3), EdgeId::new(0));
        v.add_neighbor(VertexId::new(1), EdgeId::new(1));
        // 重复添加不会覆盖原来的边
        v.add_neighbor(VertexId::new(3), EdgeId::new(9));

        assert_eq!(v.degree(), 2);
        assert!(v.has_neighbor(VertexId::new(1)));
        assert!(!v.has_neighbor(VertexId::new(2)));
        assert_eq!(v.edge_to(VertexId::new(3)), Some(EdgeId::new(0)));
        assert_eq!(
            v.neighbors().collect::<Vec<_>>(),
            vec![VertexId::new(3), VertexId::new(1)]
        );
    }

    #[test]
    fn test_vertex_serialization() {
        let mut v = Vertex::new(VertexId::new(4), Some(Position::new(3.0, 4.0)));
        v.add_neighbor(VertexId::new(5), EdgeId::new(2));

        let json = serde_json::to_string(&v).unwrap();
        let restored: Vertex = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), v.id());
        assert_eq!(restored.position(), v.position());
        assert_eq!(restored.edge_to(VertexId::new(5)), Some(EdgeId::new(2)));
    }
}
