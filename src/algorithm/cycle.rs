//! 环检测
//!
//! 判断把候选边加入已接受子图后是否会形成环：当且仅当候选边的两个端点
//! 已经通过已接受的边连通。提供两种实现，判定结果完全一致：
//! - `TraversalDetector`：每条候选边做一次广度优先遍历，O(V+E)
//! - `DisjointSet`：并查集，按秩合并 + 路径压缩，近似 O(1)

use crate::config::CycleCheck;
use crate::graph::{Edge, VertexId};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// 环检测器
pub trait CycleDetector: fmt::Debug {
    /// 加入该边是否会形成环
    fn would_create_cycle(&mut self, candidate: &Edge) -> bool;

    /// 记录一条已接受的边
    fn accept(&mut self, edge: &Edge);
}

/// 根据配置创建环检测器
pub fn detector_for(check: CycleCheck) -> Box<dyn CycleDetector> {
    match check {
        CycleCheck::UnionFind => Box::new(DisjointSet::new()),
        CycleCheck::Traversal => Box::new(TraversalDetector::new()),
    }
}

/// 在子图上做广度优先遍历，判断候选边是否闭合成环
///
/// 子图由已接受的顶点和边给出，只沿这些边遍历。
pub fn would_create_cycle(
    candidate: &Edge,
    subgraph_vertices: &IndexSet<VertexId>,
    subgraph_edges: &[Edge],
) -> bool {
    let (a, b) = candidate.endpoints();
    if a == b {
        return true;
    }
    if !subgraph_vertices.contains(&a) || !subgraph_vertices.contains(&b) {
        return false;
    }

    let mut adjacency: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
    for edge in subgraph_edges {
        adjacency.entry(edge.vtx1()).or_default().push(edge.vtx2());
        adjacency.entry(edge.vtx2()).or_default().push(edge.vtx1());
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(a);
    queue.push_back(a);

    while let Some(current) = queue.pop_front() {
        if current == b {
            return true;
        }
        if let Some(neighbors) = adjacency.get(&current) {
            for &next in neighbors {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    false
}

/// 累积子图并逐条做遍历的检测器
#[derive(Debug, Clone, Default)]
pub struct TraversalDetector {
    vertices: IndexSet<VertexId>,
    edges: Vec<Edge>,
}

impl TraversalDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &IndexSet<VertexId> {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl CycleDetector for TraversalDetector {
    fn would_create_cycle(&mut self, candidate: &Edge) -> bool {
        would_create_cycle(candidate, &self.vertices, &self.edges)
    }

    fn accept(&mut self, edge: &Edge) {
        self.vertices.insert(edge.vtx1());
        self.vertices.insert(edge.vtx2());
        self.edges.push(edge.clone());
    }
}

/// 并查集
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    index: HashMap<VertexId, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每个顶点单独成一个集合
    pub fn with_vertices<I: IntoIterator<Item = VertexId>>(vertices: I) -> Self {
        let mut set = Self::new();
        for v in vertices {
            set.make_set(v);
        }
        set
    }

    /// 加入顶点（已存在时返回原下标）
    pub fn make_set(&mut self, v: VertexId) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.parent.len();
        self.index.insert(v, i);
        self.parent.push(i);
        self.rank.push(0);
        self.components += 1;
        i
    }

    /// 顶点所在集合的代表元；未知顶点返回 None
    pub fn find(&mut self, v: VertexId) -> Option<usize> {
        let i = *self.index.get(&v)?;
        Some(self.find_root(i))
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // 路径压缩
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// 合并两个顶点所在的集合；原本已在同一集合时返回 false
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let a = self.make_set(a);
        let b = self.make_set(b);
        let mut ra = self.find_root(a);
        let mut rb = self.find_root(b);
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] = self.rank[ra].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// 两个顶点是否连通
    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b {
            return true;
        }
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// 集合数量
    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl CycleDetector for DisjointSet {
    fn would_create_cycle(&mut self, candidate: &Edge) -> bool {
        self.connected(candidate.vtx1(), candidate.vtx2())
    }

    fn accept(&mut self, edge: &Edge) {
        self.union(edge.vtx1(), edge.vtx2());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn triangle() -> (Graph, [VertexId; 3]) {
        let mut graph = Graph::new();
        let a = graph.insert_vertex(None);
        let b = graph.insert_vertex(None);
        let c = graph.insert_vertex(None);
        graph.add_edge(a, b, 1.0).unwrap();
        graph.add_edge(b, c, 2.0).unwrap();
        graph.add_edge(c, a, 3.0).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn test_triangle_closes_cycle() {
        let (graph, [a, b, c]) = triangle();
        let accepted: Vec<Edge> = vec![
            graph.get_edge(a, b).unwrap().clone(),
            graph.get_edge(b, c).unwrap().clone(),
        ];
        let vertices: IndexSet<_> = [a, b, c].into_iter().collect();
        let third = graph.get_edge(c, a).unwrap();

        assert!(would_create_cycle(third, &vertices, &accepted));
        // 只接受了一条边时，第三条边不会成环
        assert!(!would_create_cycle(third, &vertices, &accepted[..1]));
    }

    #[test]
    fn test_empty_subgraph_never_cycles() {
        let (graph, [a, b, _]) = triangle();
        let edge = graph.get_edge(a, b).unwrap();
        assert!(!would_create_cycle(edge, &IndexSet::new(), &[]));
    }

    #[test]
    fn test_detectors_agree_on_triangle() {
        let (graph, _) = triangle();
        for check in [CycleCheck::UnionFind, CycleCheck::Traversal] {
            let mut detector = detector_for(check);
            let decisions: Vec<bool> = graph
                .edges()
                .map(|e| {
                    let cycle = detector.would_create_cycle(e);
                    if !cycle {
                        detector.accept(e);
                    }
                    cycle
                })
                .collect();
            assert_eq!(decisions, vec![false, false, true], "{:?}", check);
        }
    }

    #[test]
    fn test_disjoint_set_union() {
        let ids: Vec<_> = (0..6).map(VertexId::new).collect();
        let mut set = DisjointSet::with_vertices(ids.iter().copied());
        assert_eq!(set.component_count(), 6);

        assert!(set.union(ids[0], ids[1]));
        assert!(set.union(ids[2], ids[3]));
        assert!(set.union(ids[1], ids[3]));
        assert!(!set.union(ids[0], ids[2]));

        assert!(set.connected(ids[0], ids[3]));
        assert!(!set.connected(ids[0], ids[4]));
        assert!(!set.connected(ids[4], VertexId::new(99)));
        assert_eq!(set.component_count(), 3);
        assert_eq!(set.len(), 6);
    }
}
