//! 通用类型定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = f64;

/// 顶点在画布上的坐标
///
/// 只供外部渲染层使用，算法从不读取。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 两点连线的中点（权重标签的摆放位置）
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 校验边权重：必须是有限且非负的数
pub fn validate_weight(weight: Weight) -> Result<Weight> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight(weight))
    }
}
