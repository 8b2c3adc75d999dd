//! 最小优先队列
//!
//! 基于数组的二叉最小堆：下标 i 的子节点为 2i+1 和 2i+2。
//! 优先级相同时先入队者先出队。

use crate::error::{Error, Result};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct HeapNode<T, P> {
    value: T,
    priority: P,
    /// 入队序号，用于打破平局
    seq: u64,
}

impl<T, P: PartialOrd> HeapNode<T, P> {
    /// self 是否应排在 other 之前
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => self.seq < other.seq,
        }
    }
}

/// 二叉最小堆实现的优先队列
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, P> {
    heap: Vec<HeapNode<T, P>>,
    next_seq: u64,
}

impl<T, P: PartialOrd> MinPriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// 入队，O(log n)
    pub fn enqueue(&mut self, value: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapNode {
            value,
            priority,
            seq,
        });
        self.sift_up(self.heap.len() - 1);
    }

    /// 取出优先级最小的元素，O(log n)
    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_with_priority().map(|(value, _)| value)
    }

    /// 取出最小元素及其优先级
    pub fn dequeue_with_priority(&mut self) -> Result<(T, P)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let root = self.heap.pop().ok_or(Error::EmptyQueue)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((root.value, root.priority))
    }

    /// 查看最小元素
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|n| &n.value)
    }

    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.first().map(|n| &n.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].precedes(&self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, P: PartialOrd> Default for MinPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
