//! 图数据结构
//!
//! 以 ID 为地址的顶点/边存储，邻接表只保存 ID，不存在对象间的相互引用

use super::edge::{pair_key, Edge, EdgeId};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::{validate_weight, Position, Weight};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt::Write as _;
use tracing::debug;

/// `add_vertex` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexInsert {
    /// 新插入
    Inserted(VertexId),
    /// 顶点已在图中，未做任何修改
    AlreadyPresent(VertexId),
}

impl VertexInsert {
    pub fn id(&self) -> VertexId {
        match self {
            VertexInsert::Inserted(id) | VertexInsert::AlreadyPresent(id) => *id,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, VertexInsert::Inserted(_))
    }
}

/// `add_edge` 的结果（get-or-create 语义）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEntry {
    /// 新建的边
    Created(EdgeId),
    /// 端点对之间已有的边
    Existing(EdgeId),
}

impl EdgeEntry {
    pub fn id(&self) -> EdgeId {
        match self {
            EdgeEntry::Created(id) | EdgeEntry::Existing(id) => *id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, EdgeEntry::Created(_))
    }

    /// 严格模式：已存在的边转换为 `DuplicateEdge` 错误
    pub fn created(self, vtx1: VertexId, vtx2: VertexId) -> Result<EdgeId> {
        match self {
            EdgeEntry::Created(id) => Ok(id),
            EdgeEntry::Existing(existing) => Err(Error::DuplicateEdge {
                vtx1,
                vtx2,
                existing,
            }),
        }
    }
}

/// 无向带权图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点（按插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
    /// 边（按 ID 顺序）
    edges: IndexMap<EdgeId, Edge>,
    /// 规范化端点对 -> 边
    pair_index: HashMap<(VertexId, VertexId), EdgeId>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 分配下一个顶点 ID 并返回新顶点（尚未加入图）
    pub fn create_vertex(&mut self, position: Option<Position>) -> Vertex {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        Vertex::new(id, position)
    }

    /// 添加顶点；已存在时不做修改并返回 `AlreadyPresent`
    pub fn add_vertex(&mut self, mut vertex: Vertex) -> Result<VertexInsert> {
        let id = vertex.id();
        if self.vertices.contains_key(&id) {
            debug!(vertex = %id, "顶点已在图中，未添加");
            return Ok(VertexInsert::AlreadyPresent(id));
        }
        if id.as_u64() >= self.next_vertex_id {
            return Err(Error::ForeignVertex(id));
        }

        // 邻接关系只能通过 add_edge 建立
        vertex.clear_neighbors();
        self.vertices.insert(id, vertex);
        debug!(vertex = %id, "添加顶点");

        Ok(VertexInsert::Inserted(id))
    }

    /// 创建并添加顶点
    pub fn insert_vertex(&mut self, position: Option<Position>) -> VertexId {
        let vertex = self.create_vertex(position);
        let id = vertex.id();
        self.vertices.insert(id, vertex);
        debug!(vertex = %id, "添加顶点");
        id
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 更新顶点坐标
    pub fn set_position(&mut self, id: VertexId, position: Position) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(Error::InvalidEndpoint(id))?;
        vertex.set_position(position);
        Ok(())
    }

    /// 顶点是否在图中
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 顶点 ID 列表
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 端点对之间已有边时返回 `EdgeEntry::Existing`，边集不变。
    pub fn add_edge(&mut self, vtx1: VertexId, vtx2: VertexId, weight: Weight) -> Result<EdgeEntry> {
        if !self.vertices.contains_key(&vtx1) {
            return Err(Error::InvalidEndpoint(vtx1));
        }
        if !self.vertices.contains_key(&vtx2) {
            return Err(Error::InvalidEndpoint(vtx2));
        }
        if vtx1 == vtx2 {
            return Err(Error::SelfLoop(vtx1));
        }

        let key = pair_key(vtx1, vtx2);
        if let Some(&existing) = self.pair_index.get(&key) {
            debug!(%vtx1, %vtx2, edge = %existing, "边已在图中，未添加");
            return Ok(EdgeEntry::Existing(existing));
        }

        let weight = validate_weight(weight)?;
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        // 邻接表与边集在同一处更新
        if let Some(v) = self.vertices.get_mut(&vtx1) {
            v.add_neighbor(vtx2, id);
        }
        if let Some(v) = self.vertices.get_mut(&vtx2) {
            v.add_neighbor(vtx1, id);
        }
        self.pair_index.insert(key, id);
        self.edges.insert(id, Edge::new(id, vtx1, vtx2, weight));
        debug!(%vtx1, %vtx2, weight, edge = %id, "添加边");

        Ok(EdgeEntry::Created(id))
    }

    /// 通过端点对查找边（不区分顺序）
    pub fn get_edge(&self, vtx1: VertexId, vtx2: VertexId) -> Option<&Edge> {
        let id = self.pair_index.get(&pair_key(vtx1, vtx2))?;
        self.edges.get(id)
    }

    /// 两点之间是否有边
    pub fn is_edge(&self, vtx1: VertexId, vtx2: VertexId) -> bool {
        self.pair_index.contains_key(&pair_key(vtx1, vtx2))
    }

    /// 通过 ID 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// 按 ID 顺序遍历边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> Weight {
        self.edges.values().map(Edge::weight).sum()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的邻居（顶点不存在时为空）
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertices
            .get(&id)
            .map(|v| v.neighbors().collect())
            .unwrap_or_default()
    }

    /// 与顶点相连的边（按邻接插入顺序）
    pub fn incident_edges(&self, id: VertexId) -> Vec<&Edge> {
        self.vertices
            .get(&id)
            .map(|v| {
                v.incident()
                    .filter_map(|(_, e)| self.edges.get(&e))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 顶点度数
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices.get(&id).map(Vertex::degree).unwrap_or(0)
    }

    /// b 是否为 a 的邻居
    pub fn has_neighbor(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices
            .get(&a)
            .map(|v| v.has_neighbor(b))
            .unwrap_or(false)
    }

    /// 邻接表的文本表示，每个顶点一行：`id: n1 n2`
    pub fn adjacency_lists(&self) -> String {
        let mut out = String::new();
        for vertex in self.vertices.values() {
            let _ = write!(out, "{}:", vertex.id());
            for nbr in vertex.neighbors() {
                let _ = write!(out, " {}", nbr);
            }
            out.push('\n');
        }
        out
    }

    /// 清空图，ID 计数器重置为 0
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.pair_index.clear();
        self.next_vertex_id = 0;
        self.next_edge_id = 0;
        debug!("图已清空");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> (Graph, Vec<VertexId>) {
        let mut graph = Graph::new();
        let ids: Vec<_> = (0..n).map(|_| graph.insert_vertex(None)).collect();
        for (i, pair) in ids.windows(2).enumerate() {
            graph.add_edge(pair[0], pair[1], i as f64 + 1.0).unwrap();
        }
        (graph, ids)
    }

    /// 邻接表与边集互相一致
    fn assert_consistent(graph: &Graph) {
        let mut adjacency_entries = 0;
        for v in graph.vertices() {
            for (nbr, edge_id) in v.incident() {
                let edge = graph.edge(edge_id).unwrap();
                assert!(edge.connects(v.id(), nbr));
                assert!(graph.has_neighbor(nbr, v.id()));
                adjacency_entries += 1;
            }
        }
        for e in graph.edges() {
            assert!(graph.contains_vertex(e.vtx1()));
            assert!(graph.contains_vertex(e.vtx2()));
            assert!(graph.has_neighbor(e.vtx1(), e.vtx2()));
            assert!(graph.has_neighbor(e.vtx2(), e.vtx1()));
        }
        assert_eq!(adjacency_entries, graph.edge_count() * 2);
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();
        let v0 = graph.create_vertex(Some(Position::new(10.0, 20.0)));
        let v1 = graph.create_vertex(None);
        let (id0, id1) = (v0.id(), v1.id());
        assert_eq!(id0, VertexId::new(0));
        assert_eq!(id1, VertexId::new(1));

        // 创建后尚未加入图
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.add_vertex(v0).unwrap().is_inserted());
        assert!(graph.add_vertex(v1).unwrap().is_inserted());
        assert_eq!(graph.vertex_count(), 2);

        let entry = graph.add_edge(id0, id1, 3.0).unwrap();
        assert!(entry.is_created());
        assert_eq!(entry.id(), EdgeId::new(0));
        assert_eq!(graph.edge_count(), 1);

        let edge = graph.get_edge(id1, id0).unwrap();
        assert_eq!(edge.weight(), 3.0);
        assert_eq!(graph.neighbors(id0), vec![id1]);
        assert_eq!(graph.neighbors(id1), vec![id0]);
        assert_eq!(
            graph.vertex(id0).unwrap().position(),
            Some(Position::new(10.0, 20.0))
        );
    }

    #[test]
    fn test_set_position() {
        let mut graph = Graph::new();
        let v = graph.insert_vertex(None);
        assert_eq!(graph.vertex(v).unwrap().position(), None);

        graph.set_position(v, Position::new(3.0, 4.0)).unwrap();
        assert_eq!(graph.vertex(v).unwrap().position(), Some(Position::new(3.0, 4.0)));

        let missing = VertexId::new(9);
        assert_eq!(
            graph.set_position(missing, Position::new(0.0, 0.0)),
            Err(Error::InvalidEndpoint(missing))
        );
    }

    #[test]
    fn test_add_vertex_twice() {
        let mut graph = Graph::new();
        let v = graph.create_vertex(None);
        let copy = v.clone();
        assert_eq!(graph.add_vertex(v).unwrap(), VertexInsert::Inserted(VertexId::new(0)));
        assert_eq!(
            graph.add_vertex(copy).unwrap(),
            VertexInsert::AlreadyPresent(VertexId::new(0))
        );
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_foreign_vertex() {
        let mut other = Graph::new();
        other.insert_vertex(None);
        let foreign = other.create_vertex(None);

        let mut graph = Graph::new();
        assert_eq!(
            graph.add_vertex(foreign),
            Err(Error::ForeignVertex(VertexId::new(1)))
        );
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let (mut graph, ids) = path_graph(3);
        let first = graph.add_edge(ids[0], ids[2], 5.0).unwrap();
        let again = graph.add_edge(ids[2], ids[0], 9.0).unwrap();

        assert_eq!(again, EdgeEntry::Existing(first.id()));
        assert_eq!(graph.edge_count(), 3);
        // 权重保持原值
        assert_eq!(graph.get_edge(ids[0], ids[2]).unwrap().weight(), 5.0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_strict_duplicate() {
        let (mut graph, ids) = path_graph(2);
        let entry = graph.add_edge(ids[1], ids[0], 1.0).unwrap();
        assert_eq!(
            entry.created(ids[1], ids[0]),
            Err(Error::DuplicateEdge {
                vtx1: ids[1],
                vtx2: ids[0],
                existing: EdgeId::new(0),
            })
        );
    }

    #[test]
    fn test_add_edge_errors() {
        let (mut graph, ids) = path_graph(2);
        let missing = VertexId::new(42);

        assert_eq!(
            graph.add_edge(ids[0], missing, 1.0),
            Err(Error::InvalidEndpoint(missing))
        );
        assert_eq!(graph.add_edge(ids[0], ids[0], 1.0), Err(Error::SelfLoop(ids[0])));
        let v = graph.insert_vertex(None);
        assert!(matches!(
            graph.add_edge(ids[0], v, -2.0),
            Err(Error::InvalidWeight(_))
        ));
        // 失败的插入不会消耗边 ID，也不会留下邻接项
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(v), 0);
        assert_eq!(graph.add_edge(ids[0], v, 2.0).unwrap().id(), EdgeId::new(1));
        assert_consistent(&graph);
    }

    #[test]
    fn test_clear_resets_ids() {
        let (mut graph, _) = path_graph(4);
        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);

        let a = graph.insert_vertex(None);
        let b = graph.insert_vertex(None);
        assert_eq!(a, VertexId::new(0));
        assert_eq!(graph.add_edge(a, b, 1.0).unwrap().id(), EdgeId::new(0));
        assert_consistent(&graph);
    }

    #[test]
    fn test_adjacency_lists() {
        let (mut graph, ids) = path_graph(3);
        graph.add_edge(ids[2], ids[0], 1.0).unwrap();
        assert_eq!(graph.adjacency_lists(), "0: 1 2\n1: 0 2\n2: 1 0\n");
    }

    #[test]
    fn test_degree_and_incident_edges() {
        let (graph, ids) = path_graph(4);
        assert_eq!(graph.degree(ids[0]), 1);
        assert_eq!(graph.degree(ids[1]), 2);
        let incident: Vec<_> = graph.incident_edges(ids[1]).iter().map(|e| e.id()).collect();
        assert_eq!(incident, vec![EdgeId::new(0), EdgeId::new(1)]);
        assert_eq!(graph.total_weight(), 6.0);
        assert_consistent(&graph);
    }
}
