//! # Pixel stream walker
//!
//! Visits every byte of a carrier's pixel region in on-disk order and
//! tells color bytes apart from scanline padding. Rows are walked exactly
//! as stored; the height sign (top-down vs. bottom-up) is never
//! interpreted, which keeps embedding and extraction self-consistent
//! regardless of orientation.

use crate::bitmap::{BmpHeaders, row_padding};
use crate::constants::HEADER_SIZE;

/// Classification of a single byte in the pixel region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteKind {
    /// A blue, green or red sample. May carry payload bits.
    Color,
    /// Scanline filler. Must pass through untouched and never carries bits.
    Padding,
}

/// One position in the pixel region together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamByte {
    pub offset: usize,
    pub kind: ByteKind,
}

/// Lazy iterator over the pixel region of a container, yielding each byte
/// offset with its [`ByteKind`]. Tracks color bytes consumed since the
/// last row boundary against the row's `width * 3` total to know where
/// the padding run begins.
pub struct PixelWalker {
    pos: usize,
    end: usize,
    row_colors: usize,
    padding: usize,
    colors_seen: usize,
    pad_seen: usize,
}

impl PixelWalker {
    /// Positions a new walker at the first pixel byte. The per-row padding
    /// is computed once here and reused for every row.
    pub fn new(headers: &BmpHeaders, container_len: usize) -> Self {
        Self {
            pos: HEADER_SIZE,
            end: container_len,
            row_colors: headers.width.unsigned_abs() as usize * 3,
            padding: row_padding(headers.width),
            colors_seen: 0,
            pad_seen: 0,
        }
    }

    /// Advances to the next color byte, stepping over any padding run in
    /// between, and returns its offset. `None` once the region is spent.
    pub fn next_color(&mut self) -> Option<usize> {
        self.find(|byte| byte.kind == ByteKind::Color)
            .map(|byte| byte.offset)
    }
}

impl Iterator for PixelWalker {
    type Item = StreamByte;

    fn next(&mut self) -> Option<StreamByte> {
        if self.pos >= self.end {
            return None;
        }

        let offset = self.pos;
        self.pos += 1;

        // A zero-width image has no scanline structure to track.
        if self.row_colors == 0 {
            return Some(StreamByte {
                offset,
                kind: ByteKind::Color,
            });
        }

        let kind = if self.colors_seen < self.row_colors {
            self.colors_seen += 1;
            if self.colors_seen == self.row_colors && self.padding == 0 {
                self.colors_seen = 0;
            }
            ByteKind::Color
        } else {
            self.pad_seen += 1;
            if self.pad_seen == self.padding {
                self.colors_seen = 0;
                self.pad_seen = 0;
            }
            ByteKind::Padding
        };

        Some(StreamByte { offset, kind })
    }
}
