//! Prim 最小生成树
//!
//! 从起始顶点出发不断扩张树 T：新顶点加入 T 时，把它通向 T 外的边放入
//! 优先队列；每次取出权重最小的边，两端都已在 T 中的边是过期条目，丢弃。

use super::priority_queue::MinPriorityQueue;
use super::step::{Coverage, Disposition, MstAlgorithm, MstStep, SpanningTree};
use crate::config::MstConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::types::Weight;
use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};
use tracing::{info, trace, warn};

/// Prim 算法
#[derive(Debug, Clone)]
pub struct Prim<'g> {
    graph: &'g Graph,
    start: VertexId,
    config: MstConfig,
}

impl<'g> Prim<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g Graph, start: VertexId) -> Result<Self> {
        Self::with_config(graph, start, MstConfig::default())
    }

    pub fn with_config(graph: &'g Graph, start: VertexId, config: MstConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        if !graph.contains_vertex(start) {
            return Err(Error::InvalidStartVertex(start));
        }
        Ok(Self {
            graph,
            start,
            config,
        })
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    /// 从头开始的步骤序列；每次调用都是一次新的运行
    pub fn steps(&self) -> PrimSteps<'g> {
        PrimSteps::new(self.graph, self.start, self.config.clone())
    }

    /// 运行到结束
    pub fn run(&self) -> SpanningTree {
        self.steps().finish()
    }
}

/// Prim 的惰性步骤序列
#[derive(Debug)]
pub struct PrimSteps<'g> {
    graph: &'g Graph,
    config: MstConfig,
    /// 已加入树的顶点
    tree: IndexSet<VertexId>,
    edges: Vec<EdgeId>,
    total_cost: Weight,
    queue: MinPriorityQueue<EdgeId, Weight>,
    /// 入过队的边，避免重复入队
    enqueued: HashSet<EdgeId>,
    pending: VecDeque<MstStep>,
    done: bool,
}

impl<'g> PrimSteps<'g> {
    fn new(graph: &'g Graph, start: VertexId, config: MstConfig) -> Self {
        let mut steps = Self {
            graph,
            config,
            tree: IndexSet::new(),
            edges: Vec::new(),
            total_cost: 0.0,
            queue: MinPriorityQueue::with_capacity(graph.edge_count()),
            enqueued: HashSet::new(),
            pending: VecDeque::new(),
            done: false,
        };
        steps.tree.insert(start);
        steps.expand(start);
        steps
    }

    /// 把 v 通向树外的新边放入队列
    fn expand(&mut self, v: VertexId) {
        let Some(vertex) = self.graph.vertex(v) else {
            return;
        };
        for (nbr, edge_id) in vertex.incident() {
            if self.tree.contains(&nbr) || !self.enqueued.insert(edge_id) {
                continue;
            }
            let Some(edge) = self.graph.edge(edge_id) else {
                continue;
            };
            self.queue.enqueue(edge_id, edge.weight());
            if self.config.emit_enqueued {
                self.pending
                    .push_back(MstStep::new(edge, Disposition::Enqueued, self.total_cost));
            }
        }
    }

    fn finish_run(&mut self) {
        self.done = true;
        let total = self.graph.vertex_count();
        if self.tree.len() < total {
            warn!(
                covered = self.tree.len(),
                total,
                "Prim: 图不连通，只覆盖起始顶点所在的连通分量"
            );
        }
        info!(
            edges = self.edges.len(),
            cost = self.total_cost,
            "Prim 完成"
        );
    }

    /// 当前为止的结果
    pub fn tree(&self) -> SpanningTree {
        let total = self.graph.vertex_count();
        let coverage = if self.tree.len() == total {
            Coverage::Spanning
        } else {
            Coverage::Partial {
                covered: self.tree.len(),
                total,
            }
        };
        SpanningTree::new(
            MstAlgorithm::Prim,
            self.tree.clone(),
            self.edges.clone(),
            self.total_cost,
            coverage,
        )
    }

    /// 消费掉剩余步骤并返回最终结果
    pub fn finish(mut self) -> SpanningTree {
        while self.next().is_some() {}
        self.tree()
    }

    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    pub fn is_done(&self) -> bool {
        self.done && self.pending.is_empty()
    }
}

impl Iterator for PrimSteps<'_> {
    type Item = MstStep;

    fn next(&mut self) -> Option<MstStep> {
        loop {
            if let Some(step) = self.pending.pop_front() {
                trace!(edge = %step.edge, disposition = %step.disposition, "Prim 步骤");
                return Some(step);
            }
            if self.done {
                return None;
            }
            if self.config.stop_when_spanning && self.tree.len() == self.graph.vertex_count() {
                self.finish_run();
                continue;
            }

            let edge_id = match self.queue.dequeue() {
                Ok(id) => id,
                Err(_) => {
                    self.finish_run();
                    continue;
                }
            };
            let Some(edge) = self.graph.edge(edge_id) else {
                continue;
            };

            let (a, b) = edge.endpoints();
            let (in_a, in_b) = (self.tree.contains(&a), self.tree.contains(&b));
            if in_a && in_b {
                self.pending
                    .push_back(MstStep::new(edge, Disposition::RejectedCycle, self.total_cost));
                continue;
            }

            let new_vertex = if in_a { b } else { a };
            self.tree.insert(new_vertex);
            self.edges.push(edge_id);
            self.total_cost += edge.weight();
            self.pending
                .push_back(MstStep::new(edge, Disposition::Accepted, self.total_cost));
            self.expand(new_vertex);
        }
    }
}

/// 运行 Prim 并返回结果
pub fn prim(graph: &Graph, start: VertexId) -> Result<SpanningTree> {
    Ok(Prim::new(graph, start)?.run())
}
