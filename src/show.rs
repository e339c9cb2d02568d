//! The fireworks show: a handful of launches, then the greeting held on
//! screen with scattered sparkles.

use crate::config::ShowConfig;
use crate::firework::{self, Firework, BURST_MAX_RADIUS, GLYPHS, PALETTE};
use crate::terminal::Terminal;
use rand::prelude::*;
use std::io;

// Frame delays in seconds, scaled by the configured speed multiplier
const TRAIL_FRAME: f32 = 0.05;
const BURST_FRAME: f32 = 0.1;
const LAUNCH_PAUSE: f32 = 0.2;
const FINALE_HOLD: f32 = 5.0;

/// Cells kept clear of launch origins at the screen edges.
const EDGE_MARGIN: i32 = 5;

/// Run the full show. The terminal is restored on any exit path, including
/// panics, via the Terminal drop guard.
pub fn run(config: ShowConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    });

    let mut rng = StdRng::seed_from_u64(seed);
    let mut term = Terminal::new(true)?;

    term.clear_screen()?;

    let (w, h) = term.size();
    for _ in 0..config.launches {
        let fw = random_launch(&mut rng, w, h);
        render_firework(&mut term, &config, &mut rng, fw)?;
        term.sleep(LAUNCH_PAUSE * config.speed);
    }

    finale(&mut term, &config, &mut rng)
}

/// Pick a launch origin in the lower half of the screen, away from the
/// edges, with a tilt of up to 45 degrees either way. Ranges are clamped so
/// a tiny terminal still yields a valid (if cramped) origin.
fn random_launch(rng: &mut StdRng, width: u16, height: u16) -> Firework {
    let w = i32::from(width);
    let h = i32::from(height);
    let col_hi = (w - EDGE_MARGIN).max(EDGE_MARGIN);
    let row_lo = h / 2;
    let row_hi = (h - EDGE_MARGIN).max(row_lo);
    Firework::new(
        rng.gen_range(row_lo..=row_hi),
        rng.gen_range(EDGE_MARGIN..=col_hi),
        rng.gen_range(-45..=45),
    )
}

/// Animate one firework: rising trail, then expanding burst rings.
fn render_firework(
    term: &mut Terminal,
    config: &ShowConfig,
    rng: &mut StdRng,
    fw: Firework,
) -> io::Result<()> {
    // Clearing every frame leaves a single glyph visible, which reads as a
    // rising spark rather than a growing line.
    for (row, col) in fw.trail_positions() {
        term.clear();
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        term.set(col, row, '|', Some(color), true, false);
        term.present()?;
        term.sleep(TRAIL_FRAME * config.speed);
    }

    for radius in 1..BURST_MAX_RADIUS {
        // One color per ring keeps each expansion step visually coherent
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        term.clear();
        for (row, col) in fw.ring_positions(radius) {
            let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
            term.set(col, row, glyph, Some(color), true, false);
        }
        for (row, col) in fw.spoke_positions(radius) {
            term.set(col, row, '|', Some(color), true, false);
        }
        term.present()?;
        term.sleep(BURST_FRAME * config.speed);
    }

    Ok(())
}

/// Draw the centered blinking greeting, scatter sparkles around it, and
/// hold the frame.
fn finale(term: &mut Terminal, config: &ShowConfig, rng: &mut StdRng) -> io::Result<()> {
    let (width, height) = term.size();
    let w = i32::from(width);
    let h = i32::from(height);

    term.clear();
    let col = firework::centered_col(width, config.message.chars().count());
    term.set_str(col, h / 2, &config.message, None, true, true);

    // Sparkles accumulate around the message; no clearing between draws
    for _ in 0..config.sparkles {
        let row = rng.gen_range(0..h.max(1));
        let col = rng.gen_range(0..w.max(1));
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
        term.set(col, row, glyph, Some(color), true, false);
    }

    term.present()?;
    term.sleep(FINALE_HOLD * config.speed);
    Ok(())
}
