// src/crawl/frontier.rs
// =============================================================================
// The breadth-first work queue for one domain.
//
// How it works:
// - push() appends a (url, depth) task to the back of the queue
// - pop() takes the oldest task from the front (FIFO = breadth-first)
// - The visited set remembers every URL we already fetched (or tried to)
// - Once the visited set reaches max_pages, the budget is spent
//
// Duplicates are allowed in the queue: the same page can be linked from many
// places before we first reach it. The crawler skips them lazily after pop().
//
// Rust concepts:
// - VecDeque: Double-ended queue for breadth-first crawling
// - HashSet: To track visited URLs (O(1) lookup)
// =============================================================================

use std::collections::{HashSet, VecDeque};

// One unit of work: fetch `url`, found `depth` link hops from the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: String,
    pub depth: usize,
}

impl CrawlTask {
    pub fn new(url: impl Into<String>, depth: usize) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<CrawlTask>,
    visited: HashSet<String>,
    max_pages: usize,
}

impl Frontier {
    pub fn new(max_pages: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            max_pages,
        }
    }

    pub fn push(&mut self, task: CrawlTask) {
        self.queue.push_back(task);
    }

    pub fn pop(&mut self) -> Option<CrawlTask> {
        self.queue.pop_front()
    }

    // Returns true if the URL was not visited before
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn budget_exhausted(&self) -> bool {
        self.visited.len() >= self.max_pages
    }
}
