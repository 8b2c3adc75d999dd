//! Kruskal 最小生成树
//!
//! 所有边按权重进入优先队列（权重相同则边 ID 小者优先），依次取出，
//! 不成环的边被接受，成环的边永久丢弃。

use super::cycle::{detector_for, CycleDetector};
use super::priority_queue::MinPriorityQueue;
use super::step::{Coverage, Disposition, MstAlgorithm, MstStep, SpanningTree};
use crate::config::MstConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::types::Weight;
use indexmap::IndexSet;
use std::collections::VecDeque;
use tracing::{info, trace, warn};

/// Kruskal 算法
#[derive(Debug, Clone)]
pub struct Kruskal<'g> {
    graph: &'g Graph,
    config: MstConfig,
}

impl<'g> Kruskal<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g Graph) -> Result<Self> {
        Self::with_config(graph, MstConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: MstConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        Ok(Self { graph, config })
    }

    /// 从头开始的步骤序列；每次调用都是一次新的运行
    pub fn steps(&self) -> KruskalSteps<'g> {
        KruskalSteps::new(self.graph, self.config.clone())
    }

    /// 运行到结束
    pub fn run(&self) -> SpanningTree {
        self.steps().finish()
    }
}

/// Kruskal 的惰性步骤序列
#[derive(Debug)]
pub struct KruskalSteps<'g> {
    graph: &'g Graph,
    config: MstConfig,
    queue: MinPriorityQueue<EdgeId, Weight>,
    detector: Box<dyn CycleDetector>,
    vertices: IndexSet<VertexId>,
    edges: Vec<EdgeId>,
    total_cost: Weight,
    pending: VecDeque<MstStep>,
    done: bool,
}

impl<'g> KruskalSteps<'g> {
    fn new(graph: &'g Graph, config: MstConfig) -> Self {
        let mut queue = MinPriorityQueue::with_capacity(graph.edge_count());
        let mut pending = VecDeque::new();
        // 边按 ID 顺序入队，先入队者在平局时先出队
        for edge in graph.edges() {
            queue.enqueue(edge.id(), edge.weight());
            if config.emit_enqueued {
                pending.push_back(MstStep::new(edge, Disposition::Enqueued, 0.0));
            }
        }

        let mut vertices = IndexSet::new();
        if graph.vertex_count() == 1 {
            vertices.extend(graph.vertex_ids());
        }

        Self {
            graph,
            detector: detector_for(config.cycle_check),
            config,
            queue,
            vertices,
            edges: Vec::new(),
            total_cost: 0.0,
            pending,
            done: false,
        }
    }

    /// 生成树需要的边数
    fn target_edges(&self) -> usize {
        self.graph.vertex_count().saturating_sub(1)
    }

    fn finish_run(&mut self) {
        self.done = true;
        if self.edges.len() < self.target_edges() {
            warn!(
                accepted = self.edges.len(),
                needed = self.target_edges(),
                "Kruskal: 图不连通，得到生成森林"
            );
        }
        info!(
            edges = self.edges.len(),
            cost = self.total_cost,
            "Kruskal 完成"
        );
    }

    /// 当前为止的结果
    pub fn tree(&self) -> SpanningTree {
        let coverage = if self.edges.len() == self.target_edges() {
            Coverage::Spanning
        } else {
            // 森林的树数 = 顶点数 - 边数
            Coverage::Forest {
                components: self.graph.vertex_count() - self.edges.len(),
                total: self.graph.vertex_count(),
            }
        };
        SpanningTree::new(
            MstAlgorithm::Kruskal,
            self.vertices.clone(),
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

impl Iterator for KruskalSteps<'_> {
    type Item = MstStep;

    fn next(&mut self) -> Option<MstStep> {
        loop {
            if let Some(step) = self.pending.pop_front() {
                trace!(edge = %step.edge, disposition = %step.disposition, "Kruskal 步骤");
                return Some(step);
            }
            if self.done {
                return None;
            }
            if self.config.stop_when_spanning && self.edges.len() == self.target_edges() {
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

            if self.detector.would_create_cycle(edge) {
                self.pending
                    .push_back(MstStep::new(edge, Disposition::RejectedCycle, self.total_cost));
                continue;
            }

            self.detector.accept(edge);
            self.vertices.insert(edge.vtx1());
            self.vertices.insert(edge.vtx2());
            self.edges.push(edge_id);
            self.total_cost += edge.weight();
            self.pending
                .push_back(MstStep::new(edge, Disposition::Accepted, self.total_cost));
        }
    }
}

/// 运行 Kruskal 并返回结果
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    Ok(Kruskal::new(graph)?.run())
}
