//! Drawing surfaces for the particle field.

use folio_core::{PixelDensity, Rgb, Size};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::chars::{BRAILLE_DOTS, braille};

/// A 2D drawing context backed by a pixel buffer.
pub trait Canvas2d {
    /// Displayed size of the container, in logical units.
    fn client_size(&self) -> Size;
    /// Backing pixels per logical unit.
    fn pixel_density(&self) -> PixelDensity;
    /// Current size of the backing buffer, in pixels.
    fn buffer_size(&self) -> Size;
    /// Reallocate the backing buffer. Contents are discarded.
    fn set_buffer_size(&mut self, size: Size);
    fn clear(&mut self);
    /// Fill a circle centred at `(cx, cy)` with `radius`, all in pixels.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32);
}

/// Something a drawing context can be acquired from.
pub trait Surface {
    type Canvas: Canvas2d;

    /// Acquire the 2D context, or `None` when this surface cannot draw.
    fn context_2d(&mut self) -> Option<Self::Canvas>;
}

/// Terminal surface handing out braille [`DotCanvas`]es.
#[derive(Debug, Clone)]
pub struct DotSurface {
    /// Whether the terminal can show braille glyphs in colour.
    capable: bool,
    background: Rgb,
}

impl DotSurface {
    pub fn new(capable: bool, background: Rgb) -> Self {
        Self {
            capable,
            background,
        }
    }
}

impl Surface for DotSurface {
    type Canvas = DotCanvas;

    fn context_2d(&mut self) -> Option<DotCanvas> {
        self.capable.then(|| DotCanvas::new(self.background))
    }
}

/// A grid of coloured dots presented as braille glyphs, 2x4 dots per cell.
#[derive(Debug, Clone)]
pub struct DotCanvas {
    /// Size of the container in cells.
    client: Size,
    /// Size of the dot grid.
    buffer: Size,
    /// Row-major dot colours; `None` is an unlit dot.
    dots: Vec<Option<Rgb>>,
    /// Colour translucent dots are blended over.
    background: Rgb,
}

impl DotCanvas {
    pub fn new(background: Rgb) -> Self {
        Self {
            client: Size::default(),
            buffer: Size::default(),
            dots: Vec::new(),
            background,
        }
    }

    /// Record the container's laid-out size, in cells.
    pub fn set_client_size(&mut self, size: Size) {
        self.client = size;
    }

    /// Colour of the dot at `(x, y)`, if lit.
    pub fn dot(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.buffer.width || y >= self.buffer.height {
            return None;
        }
        self.dots[(y * self.buffer.width + x) as usize]
    }

    /// Number of lit dots.
    pub fn lit(&self) -> usize {
        self.dots.iter().filter(|d| d.is_some()).count()
    }

    fn paint(&mut self, x: u32, y: u32, color: Rgb, alpha: f32) {
        let idx = (y * self.buffer.width + x) as usize;
        let under = self.dots[idx].unwrap_or(self.background);
        self.dots[idx] = Some(color.over(under, alpha));
    }

    /// Braille glyph and colour for the cell at `(col, row)`, if any dot is lit.
    fn cell(&self, col: u32, row: u32) -> Option<(char, Rgb)> {
        let mut bits = 0u8;
        let mut brightest: Option<Rgb> = None;
        for (dy, row_bits) in BRAILLE_DOTS.iter().enumerate() {
            for (dx, &bit) in row_bits.iter().enumerate() {
                if let Some(color) = self.dot(col * 2 + dx as u32, row * 4 + dy as u32) {
                    bits |= bit;
                    if brightest.is_none_or(|b| color.luma() > b.luma()) {
                        brightest = Some(color);
                    }
                }
            }
        }
        brightest.map(|color| (braille(bits), color))
    }
}

impl Canvas2d for DotCanvas {
    fn client_size(&self) -> Size {
        self.client
    }

    fn pixel_density(&self) -> PixelDensity {
        PixelDensity::BRAILLE
    }

    fn buffer_size(&self) -> Size {
        self.buffer
    }

    fn set_buffer_size(&mut self, size: Size) {
        self.buffer = size;
        self.dots = vec![None; (size.width * size.height) as usize];
    }

    fn clear(&mut self) {
        self.dots.fill(None);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32) {
        let Size { width, height } = self.buffer;
        if width == 0 || height == 0 {
            return;
        }
        let max_x = (width - 1) as f32;
        let max_y = (height - 1) as f32;

        let x0 = (cx - radius).floor().clamp(0.0, max_x) as u32;
        let x1 = (cx + radius).ceil().clamp(0.0, max_x) as u32;
        let y0 = (cy - radius).floor().clamp(0.0, max_y) as u32;
        let y1 = (cy + radius).ceil().clamp(0.0, max_y) as u32;

        let r2 = radius * radius;
        let mut painted = false;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.paint(x, y, color, alpha);
                    painted = true;
                }
            }
        }

        // Circles smaller than a dot still light the dot under their centre
        if !painted && cx >= 0.0 && cy >= 0.0 && cx < width as f32 && cy < height as f32 {
            self.paint(cx as u32, cy as u32, color, alpha);
        }
    }
}

impl Widget for &DotCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let Some((ch, color)) = self.cell(col as u32, row as u32) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(ch).set_fg(color.into());
                }
            }
        }
    }
}
