//! 算法配置

use serde::{Deserialize, Serialize};

/// Kruskal 使用的环检测方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleCheck {
    /// 并查集（按秩合并 + 路径压缩）
    #[default]
    UnionFind,
    /// 每条候选边在已接受子图上做一次广度优先遍历
    Traversal,
}

/// 生成树算法配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MstConfig {
    /// 环检测方式（仅 Kruskal）
    pub cycle_check: CycleCheck,
    /// 得到 |V|-1 条边后立即停止；为 false 时继续取完队列，剩余的边都报告为被拒绝
    pub stop_when_spanning: bool,
    /// 是否产出 `Enqueued` 步骤
    pub emit_enqueued: bool,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            cycle_check: CycleCheck::UnionFind,
            stop_when_spanning: true,
            emit_enqueued: true,
        }
    }
}

impl MstConfig {
    pub fn with_cycle_check(mut self, cycle_check: CycleCheck) -> Self {
        self.cycle_check = cycle_check;
        self
    }

    pub fn with_stop_when_spanning(mut self, stop: bool) -> Self {
        self.stop_when_spanning = stop;
        self
    }

    pub fn with_emit_enqueued(mut self, emit: bool) -> Self {
        self.emit_enqueued = emit;
        self
    }
}
