/// Shelf packer for the glyph atlas.
///
/// Places rectangles left to right along rows ("shelves"); a new shelf opens
/// below the tallest item of the current one when a rectangle does not fit.
#[derive(Debug)]
pub(super) struct ShelfPacker {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    pub(super) fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    pub(super) fn is_full(&self) -> bool {
        self.full
    }

    /// Reserves a `w × h` slot and returns its top-left corner.
    ///
    /// Once a rectangle fails to fit vertically the packer stays full.
    pub(super) fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full || w + 2 * self.padding > self.size {
            return None;
        }

        if self.cursor_x + w + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_y + h + self.padding > self.size {
            self.full = true;
            return None;
        }

        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }

    /// Normalized UV corners of a slot.
    pub(super) fn uv(&self, x: u32, y: u32, w: u32, h: u32) -> ([f32; 2], [f32; 2]) {
        let s = self.size as f32;
        (
            [x as f32 / s, y as f32 / s],
            [(x + w) as f32 / s, (y + h) as f32 / s],
        )
    }
}
