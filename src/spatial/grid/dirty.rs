use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl PixelGrid {
    /// Gather indices of cells changed since the last collection
    /// and reset their flags. Returns the count.
    pub fn collect_dirty(&mut self) -> usize {
        self.dirty_list.clear();
        for (idx, flag) in self.dirty.iter_mut().enumerate() {
            if *flag {
                self.dirty_list.push(idx as u32);
                *flag = false;
            }
        }
        self.dirty_list.len()
    }

    /// Result of the last `collect_dirty`
    #[inline]
    pub fn dirty_list(&self) -> &[u32] {
        &self.dirty_list
    }

    #[inline]
    pub fn dirty_list_ptr(&self) -> *const u32 {
        self.dirty_list.as_ptr()
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.iter().filter(|&&d| d).count()
    }

    /// Force a full repaint on the next collection
    pub fn mark_all_dirty(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.dirty.par_iter_mut().for_each(|d| *d = true);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.dirty.fill(true);
        }
    }
}
