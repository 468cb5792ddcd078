//! Cell framebuffer for the half-block renderer.
//!
//! Each terminal cell shows two stacked world pixels: the upper one as the
//! foreground of '▀', the lower one as the background. Text (score, banners)
//! is written over the pixels with an explicit style.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground, background and attributes of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Text on a black background.
    pub const fn text(fg: Rgb, bold: bool, dim: bool) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold,
            dim,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::text(Rgb::new(220, 220, 220), false, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const UPPER_HALF: char = '▀';

    /// Two vertically stacked pixels in one cell.
    pub const fn half_block(top: Rgb, bottom: Rgb) -> Self {
        Self {
            ch: Self::UPPER_HALF,
            style: CellStyle {
                fg: top,
                bg: bottom,
                bold: false,
                dim: false,
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Row-major grid of cells; writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match the terminal size, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Paint pixel rows `2y` (top) and `2y + 1` (bottom) of column `x`.
    pub fn put_pixels(&mut self, x: u16, y: u16, top: Rgb, bottom: Rgb) {
        self.set(x, y, Cell::half_block(top, bottom));
    }

    /// Write text from `(x, y)`, clipped at the right edge. Returns the
    /// number of cells written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut written = 0;
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.set(cx, y, Cell { ch, style });
            written += 1;
        }
        written
    }

    /// Write text horizontally centred on row `y`.
    pub fn put_str_centered(&mut self, y: u16, s: &str, style: CellStyle) {
        let w = s.chars().count() as u16;
        self.put_str(self.width.saturating_sub(w) / 2, y, s, style);
    }

    /// Write a number without allocating. Returns its width in cells.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, &d) in digits[..len].iter().rev().enumerate() {
            let ch = d as char;
            self.set(x.saturating_add(i as u16), y, Cell { ch, style });
        }
        len as u16
    }

    /// Row contents as text.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits_in_order() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_u32(1, 0, 4096, style), 4);
        assert_eq!(fb.row_text(0), " 4096       ");
        assert_eq!(fb.put_u32(0, 0, 0, style), 1);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');
    }

    #[test]
    fn centred_text() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_str_centered(0, "PAUSE", CellStyle::default());
        assert_eq!(fb.row_text(0), "  PAUSE   ");
    }

    #[test]
    fn text_is_clipped_at_the_edge() {
        let mut fb = FrameBuffer::new(2, 2);
        assert_eq!(fb.put_str(1, 1, "xyz", CellStyle::default()), 1);
        assert_eq!(fb.get(1, 1).unwrap().ch, 'x');
        assert_eq!(fb.get(2, 1), None);
    }

    #[test]
    fn pixels_pack_two_rows_per_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        let (sky, grass) = (Rgb::new(70, 180, 200), Rgb::new(84, 168, 55));
        fb.put_pixels(2, 1, sky, grass);
        let cell = fb.get(2, 1).unwrap();
        assert_eq!(cell.ch, Cell::UPPER_HALF);
        assert_eq!((cell.style.fg, cell.style.bg), (sky, grass));
        fb.put_pixels(3, 0, sky, grass);
        assert_eq!(fb.get(0, 1), Some(Cell::default()));
    }

    #[test]
    fn resize_keeps_capacity() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.resize(4, 4);
        assert_eq!((fb.width(), fb.height()), (4, 4));
        assert_eq!(fb.cells.capacity(), 100);
    }
}
