//! Flat buffer protocol for zero-copy paginator rendering
//!
//! JS reads the markers straight out of `wasm.memory` instead of
//! deserialising an array on every page change.
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x534C5047 = "SLPG" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     marker_count
//! [3]     current page
//! [4]     total pages
//! [5]     flags: bit0=has_prev, bit1=has_next, bit2=visible
//! [6..]   one u32 per marker: 0 = ellipsis, n = page n
//! ```

use crate::paging::{PageMarker, PaginationState};

/// Magic number for format validation: "SLPG" (SaLon PaGer)
pub const MAGIC: u32 = 0x534C5047;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 6;

/// Marker value for an ellipsis (pages are 1-based)
pub const ELLIPSIS: u32 = 0;

/// Flags bitmask
pub const FLAG_HAS_PREV: u32 = 0b001;
pub const FLAG_HAS_NEXT: u32 = 0b010;
pub const FLAG_VISIBLE: u32 = 0b100;

/// Encode one marker
pub fn encode_marker(marker: &PageMarker) -> u32 {
    match marker {
        PageMarker::Page(n) => u32::try_from(*n).unwrap_or(u32::MAX),
        PageMarker::Ellipsis => ELLIPSIS,
    }
}

/// Decode one marker
pub fn decode_marker(value: u32) -> PageMarker {
    match value {
        ELLIPSIS => PageMarker::Ellipsis,
        n => PageMarker::Page(n as usize),
    }
}

/// Render buffer for the paginator
pub struct MarkerBuffer {
    /// Header followed by encoded markers
    pub u32_data: Vec<u32>,
}

impl Default for MarkerBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(HEADER_SIZE + 32),
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
    }

    /// Ensure room for `marker_count` markers without reallocating during
    /// the write. JS may hold a view over the previous allocation, so the
    /// buffer only grows when it has to.
    pub fn prepare(&mut self, marker_count: usize) {
        let target = HEADER_SIZE + marker_count + 8;
        if self.u32_data.capacity() < target {
            self.u32_data = Vec::with_capacity(target);
        } else {
            self.clear();
        }
    }

    /// Write a full frame for `state`
    pub fn write(&mut self, state: &PaginationState, markers: &[PageMarker]) {
        self.prepare(markers.len());

        let mut flags = 0;
        if state.has_prev() {
            flags |= FLAG_HAS_PREV;
        }
        if state.has_next() {
            flags |= FLAG_HAS_NEXT;
        }
        if state.is_visible() {
            flags |= FLAG_VISIBLE;
        }

        self.u32_data.push(MAGIC);                          // [0] magic number
        self.u32_data.push(SCHEMA_VERSION);                 // [1] schema version
        self.u32_data.push(markers.len() as u32);           // [2] marker_count
        self.u32_data.push(state.current() as u32);         // [3] current
        self.u32_data.push(state.total() as u32);           // [4] total
        self.u32_data.push(flags);                          // [5] flags
        self.u32_data.extend(markers.iter().map(encode_marker));

        #[cfg(debug_assertions)]
        self.validate_markers();
    }

    /// Markers in the current frame
    pub fn markers(&self) -> Vec<PageMarker> {
        self.u32_data
            .get(HEADER_SIZE..)
            .unwrap_or_default()
            .iter()
            .map(|&v| decode_marker(v))
            .collect()
    }

    /// Check ordering invariants of the encoded markers (debug builds only)
    #[cfg(debug_assertions)]
    fn validate_markers(&self) {
        let count = self.u32_data[2] as usize;
        let total = self.u32_data[4];
        debug_assert_eq!(
            self.u32_data.len(),
            HEADER_SIZE + count,
            "marker_count {} does not match buffer length {}",
            count,
            self.u32_data.len()
        );

        let mut last_page = 0;
        let mut last_was_ellipsis = false;
        for &value in &self.u32_data[HEADER_SIZE..] {
            if value == ELLIPSIS {
                debug_assert!(!last_was_ellipsis, "consecutive ellipsis markers");
                last_was_ellipsis = true;
            } else {
                debug_assert!(
                    value > last_page && value <= total,
                    "page {} out of order (previous {}, total {})",
                    value,
                    last_page,
                    total
                );
                last_page = value;
                last_was_ellipsis = false;
            }
        }
    }

    pub fn ptr(&self) -> u32 {
        self.u32_data.as_ptr() as u32
    }

    pub fn len(&self) -> u32 {
        self.u32_data.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.u32_data.is_empty()
    }
}
