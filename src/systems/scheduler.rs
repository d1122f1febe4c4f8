//! Frame scheduler
//!
//! Owns one family's batch of animations and at most one pending frame
//! request. The host drives it with `tick`; a tick without a pending request
//! does nothing, so a cancelled batch can never be advanced by a stale frame.

use crate::grid::GridSurface;

use super::Animation;

/// Handle for a requested frame, the counterpart of a host animation-frame id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest(pub u64);

pub struct FrameScheduler<A: Animation> {
    entities: Vec<A>,
    pending: Option<FrameRequest>,
    next_request: u64,
}

impl<A: Animation> Default for FrameScheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Animation> FrameScheduler<A> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            pending: None,
            next_request: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// No frame requested, the loop has stopped
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    pub fn entities(&self) -> &[A] {
        &self.entities
    }

    pub fn pending_request(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Replace the batch and run its first frame right away
    ///
    /// Returns the number of entities updated by that first frame.
    pub fn start(&mut self, batch: Vec<A>, grid: &mut dyn GridSurface) -> usize {
        self.cancel(grid);
        self.entities = batch;
        self.run_frame(grid)
    }

    /// Run the pending frame, if any. Returns the number of entities updated.
    pub fn tick(&mut self, grid: &mut dyn GridSurface) -> usize {
        if self.pending.take().is_none() {
            return 0;
        }
        self.run_frame(grid)
    }

    /// Clean up every entity and drop the batch and its pending request
    pub fn cancel(&mut self, grid: &mut dyn GridSurface) {
        for entity in &self.entities {
            entity.cleanup(grid);
        }
        self.discard();
    }

    /// Drop the batch without touching the grid (the grid is being rebuilt)
    pub fn discard(&mut self) {
        self.entities.clear();
        self.pending = None;
    }

    fn run_frame(&mut self, grid: &mut dyn GridSurface) -> usize {
        let updated = self.entities.len();
        for entity in self.entities.iter_mut() {
            entity.update(grid);
        }

        self.entities.retain(|entity| {
            if entity.is_active() {
                return true;
            }
            entity.cleanup(grid);
            false
        });

        if !self.entities.is_empty() {
            self.pending = Some(self.request_frame());
        }
        updated
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_request = self.next_request.wrapping_add(1);
        FrameRequest(self.next_request)
    }
}
