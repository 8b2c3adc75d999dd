//! 样例图构造
//!
//! 示例图与随机连通图，供演示、测试和基准使用

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::types::Weight;
use rand::seq::SliceRandom;
use rand::Rng;

/// 示例图的边（顶点下标）
const SIMPLE_EXAMPLE_EDGES: [(usize, usize); 10] = [
    (0, 2),
    (0, 1),
    (1, 3),
    (1, 4),
    (2, 5),
    (3, 2),
    (3, 5),
    (4, 6),
    (4, 5),
    (5, 6),
];

/// 示例图的顶点数
pub const SIMPLE_EXAMPLE_VERTICES: usize = 7;

/// 1..=10 之间的随机整数权重
pub fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> Weight {
    rng.gen_range(1..=10) as Weight
}

/// 7 个顶点、10 条边的示例图，权重在 1..=10 之间随机
pub fn simple_example<R: Rng + ?Sized>(rng: &mut R) -> Result<Graph> {
    let mut graph = Graph::new();
    let vertices: Vec<VertexId> = (0..SIMPLE_EXAMPLE_VERTICES)
        .map(|_| graph.insert_vertex(None))
        .collect();

    for &(a, b) in SIMPLE_EXAMPLE_EDGES.iter() {
        graph.add_edge(vertices[a], vertices[b], random_weight(rng))?;
    }

    Ok(graph)
}

/// 随机连通图：先随机生成一棵生成树，再加入 `extra_edges` 条额外的边
///
/// 权重为 0..=max_weight 的整数，额外的边遇到已有端点对时跳过。
pub fn random_connected<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    extra_edges: usize,
    max_weight: u32,
) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut vertices: Vec<VertexId> = (0..vertex_count)
        .map(|_| graph.insert_vertex(None))
        .collect();
    vertices.shuffle(rng);

    for i in 1..vertices.len() {
        let parent = vertices[rng.gen_range(0..i)];
        let weight = rng.gen_range(0..=max_weight) as Weight;
        graph.add_edge(parent, vertices[i], weight)?;
    }

    if vertex_count >= 2 {
        for _ in 0..extra_edges {
            let a = vertices[rng.gen_range(0..vertex_count)];
            let b = vertices[rng.gen_range(0..vertex_count)];
            if a == b {
                continue;
            }
            let weight = rng.gen_range(0..=max_weight) as Weight;
            graph.add_edge(a, b, weight)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_simple_example() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = simple_example(&mut rng).unwrap();

        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 10);
        assert!(graph
            .edges()
            .all(|e| (1.0..=10.0).contains(&e.weight()) && e.weight().fract() == 0.0));
        assert!(graph.is_edge(VertexId::new(3), VertexId::new(2)));
    }

    #[test]
    fn test_random_connected() {
        let mut rng = StdRng::seed_from_u64(99);
        let graph = random_connected(&mut rng, 30, 40, 20).unwrap();

        assert_eq!(graph.vertex_count(), 30);
        assert!(graph.edge_count() >= 29);
        assert!(graph.edge_count() <= 29 + 40);
        assert!(crate::algorithm::prim(&graph, VertexId::new(0))
            .unwrap()
            .is_spanning());
    }

    #[test]
    fn test_random_connected_is_reproducible() {
        let a = random_connected(&mut StdRng::seed_from_u64(5), 12, 10, 9).unwrap();
        let b = random_connected(&mut StdRng::seed_from_u64(5), 12, 10, 9).unwrap();
        assert_eq!(a.adjacency_lists(), b.adjacency_lists());
        assert_eq!(a.total_weight(), b.total_weight());
    }
}
