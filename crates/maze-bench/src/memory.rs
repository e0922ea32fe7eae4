//! Peak-memory measurement.
//!
//! [`TrackingAllocator`] wraps the system allocator and counts live heap
//! bytes. Install it in the binary and hand a reference to the harness:
//!
//! ```ignore
//! use maze_bench::TrackingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: TrackingAllocator = TrackingAllocator::new();
//! ```
//!
//! Without an installed tracker the harness falls back to [`NullMeter`] and
//! reports zero bytes for every run.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

/// A source of per-run memory readings.
pub trait MemoryMeter {
    /// Start a new measurement window at the current live byte count.
    fn reset(&self);
    /// Highest live byte count since the last reset, minus the count at reset.
    fn peak_bytes(&self) -> u64;
    /// Bytes currently live.
    fn current_bytes(&self) -> u64;
}

/// A meter that measures nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMeter;

impl MemoryMeter for NullMeter {
    fn reset(&self) {}

    fn peak_bytes(&self) -> u64 {
        0
    }

    fn current_bytes(&self) -> u64 {
        0
    }
}

/// Counting wrapper over [`System`].
#[derive(Debug)]
pub struct TrackingAllocator {
    current: AtomicU64,
    peak: AtomicU64,
    baseline: AtomicU64,
}

impl TrackingAllocator {
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
            peak: AtomicU64::new(0),
            baseline: AtomicU64::new(0),
        }
    }

    #[inline]
    fn grow(&self, bytes: usize) {
        let now = self.current.fetch_add(bytes as u64, Ordering::Relaxed) + bytes as u64;
        self.peak.fetch_max(now, Ordering::Relaxed);
    }

    #[inline]
    fn shrink(&self, bytes: usize) {
        self.current.fetch_sub(bytes as u64, Ordering::Relaxed);
    }
}

impl Default for TrackingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: every call is forwarded unchanged to `System`; the counters are
// only updated after a successful allocation or before a deallocation.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            self.grow(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            self.grow(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        self.shrink(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                self.grow(new_size - old_size);
            } else {
                self.shrink(old_size - new_size);
            }
        }
        new_ptr
    }
}

impl MemoryMeter for TrackingAllocator {
    fn reset(&self) {
        let now = self.current.load(Ordering::Relaxed);
        self.baseline.store(now, Ordering::Relaxed);
        self.peak.store(now, Ordering::Relaxed);
    }

    fn peak_bytes(&self) -> u64 {
        let peak = self.peak.load(Ordering::Relaxed);
        peak.saturating_sub(self.baseline.load(Ordering::Relaxed))
    }

    fn current_bytes(&self) -> u64 {
        self.current.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_meter_reports_zero() {
        let m = NullMeter;
        m.reset();
        assert_eq!(m.peak_bytes(), 0);
        assert_eq!(m.current_bytes(), 0);
    }

    #[test]
    fn counts_through_the_allocator_interface() {
        // Not installed globally; driven by hand.
        let a = TrackingAllocator::new();
        let layout = Layout::from_size_align(1024, 8).unwrap();
        unsafe {
            let p = a.alloc(layout);
            assert!(!p.is_null());
            assert_eq!(a.current_bytes(), 1024);

            let p = a.realloc(p, layout, 4096);
            assert!(!p.is_null());
            assert_eq!(a.current_bytes(), 4096);
            assert_eq!(a.peak_bytes(), 4096);

            a.reset();
            assert_eq!(a.peak_bytes(), 0);

            let grown = Layout::from_size_align(4096, 8).unwrap();
            let q = a.alloc_zeroed(layout);
            assert_eq!(a.peak_bytes(), 1024);
            a.dealloc(q, layout);
            a.dealloc(p, grown);
        }
        assert_eq!(a.current_bytes(), 0);
        assert_eq!(a.peak_bytes(), 1024);
    }
}
