//! Firework geometry: trail, ring and spoke positions, plus the fixed
//! palette and glyph set shared by every drawing routine.

use crossterm::style::Color;

/// Number of trail steps. The burst center is anchored this many rows above
/// the launch origin, so the two phases line up visually; keep them coupled.
pub const TRAIL_LENGTH: i32 = 15;
/// Burst rings expand from radius 1 up to (not including) this.
pub const BURST_MAX_RADIUS: i32 = 8;
/// Degrees between glyphs on a ring (24 samples per ring).
const RING_STEP_DEG: usize = 15;
/// Degrees between spokes (8 per ring).
const SPOKE_STEP_DEG: usize = 45;
/// Spoke cells extend 1..SPOKE_TRAIL beyond the ring radius.
const SPOKE_TRAIL: i32 = 4;

/// Colors drawn from uniformly for trails, rings and sparkles.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

/// Decorative characters for burst particles and sparkles.
pub const GLYPHS: [char; 6] = ['*', '✦', '✺', '✹', '✶', '⭐'];

/// One launch: origin cell and launch angle in degrees (0 = straight up,
/// positive leans right).
#[derive(Clone, Copy)]
pub struct Firework {
    pub row: i32,
    pub col: i32,
    pub angle_deg: i32,
}

impl Firework {
    pub fn new(row: i32, col: i32, angle_deg: i32) -> Self {
        Self { row, col, angle_deg }
    }

    /// Rising-trail positions, one (row, col) per animation step.
    pub fn trail_positions(&self) -> Vec<(i32, i32)> {
        let a = f64::from(self.angle_deg).to_radians();
        (0..TRAIL_LENGTH)
            .map(|i| {
                let i = f64::from(i);
                (
                    self.row - (i * a.cos()).round() as i32,
                    self.col + (i * a.sin()).round() as i32,
                )
            })
            .collect()
    }

    /// Burst center, sitting where the trail ends.
    fn burst_center(&self) -> (i32, i32) {
        (self.row - TRAIL_LENGTH, self.col)
    }

    /// Glyph positions on the ring at `radius`. Columns are stretched 2x
    /// because terminal cells are roughly twice as tall as they are wide.
    pub fn ring_positions(&self, radius: i32) -> Vec<(i32, i32)> {
        let (cy, cx) = self.burst_center();
        let r = f64::from(radius);
        (0..360)
            .step_by(RING_STEP_DEG)
            .map(|deg| {
                let a = f64::from(deg).to_radians();
                (
                    cy + (r * a.cos()).round() as i32,
                    cx + (r * 2.0 * a.sin()).round() as i32,
                )
            })
            .collect()
    }

    /// `|` positions radiating outward from the ring at multiples of 45
    /// degrees, trailing the expanding edge.
    pub fn spoke_positions(&self, radius: i32) -> Vec<(i32, i32)> {
        let (cy, cx) = self.burst_center();
        let mut positions = Vec::with_capacity(8 * (SPOKE_TRAIL as usize - 1));
        for deg in (0..360).step_by(SPOKE_STEP_DEG) {
            let a = f64::from(deg).to_radians();
            for trail_radius in 1..SPOKE_TRAIL {
                let r = f64::from(radius + trail_radius);
                positions.push((
                    cy + (r * a.cos()).round() as i32,
                    cx + (r * 2.0 * a.sin()).round() as i32,
                ));
            }
        }
        positions
    }
}

/// Starting column that centers a `len`-cell string on a `width`-wide surface.
pub fn centered_col(width: u16, len: usize) -> i32 {
    (i32::from(width) - len as i32) / 2
}
