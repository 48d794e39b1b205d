use std::path::Path;

use super::frame::TraversalFrame;

/// Frames from the walk root down to the directory being listed.
///
/// The root frame sits at index 0 until the walk ends; depth is the number of
/// open frames.
#[derive(Debug)]
pub struct WalkStack {
    frames: Vec<TraversalFrame>,
}

impl WalkStack {
    pub fn with_root(root: &Path) -> Self {
        WalkStack {
            frames: vec![TraversalFrame::open(root)],
        }
    }

    pub fn push(&mut self, frame: TraversalFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<TraversalFrame> {
        self.frames.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut TraversalFrame> {
        self.frames.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
