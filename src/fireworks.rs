//! Decorative particle burst played while a reveal is pending.
//!
//! Each particle gets a random angle, distance and color. Positions are
//! final resting offsets from the word's center in pixels; the view
//! converts them to terminal cells. There is no motion simulation.

use ratatui::style::Color;

/// Particles per burst.
pub const PARTICLE_COUNT: usize = 30;

/// Burst palette.
pub const COLORS: [Color; 7] = [
    Color::Rgb(0xff, 0x3b, 0x30),
    Color::Rgb(0xff, 0x95, 0x00),
    Color::Rgb(0xff, 0xcc, 0x00),
    Color::Rgb(0x34, 0xc7, 0x59),
    Color::Rgb(0x00, 0x7a, 0xff),
    Color::Rgb(0x58, 0x56, 0xd6),
    Color::Rgb(0xaf, 0x52, 0xde),
];

/// Approximate pixel size of one terminal cell.
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_HEIGHT_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal offset from center, pixels.
    pub x: f64,
    /// Vertical offset from center, pixels.
    pub y: f64,
    pub color: Color,
}

impl Particle {
    /// Offset in terminal cells (columns, rows).
    pub fn cell_offset(&self) -> (i32, i32) {
        (
            (self.x / CELL_WIDTH_PX).round() as i32,
            (self.y / CELL_HEIGHT_PX).round() as i32,
        )
    }
}

/// Generate a burst from `seed`. Same seed, same burst.
pub fn burst(seed: u64) -> Vec<Particle> {
    let mut rng = XorShift::new(seed);
    (0..PARTICLE_COUNT)
        .map(|_| {
            let angle = rng.next_f64() * 360.0;
            let distance = rng.next_f64() * 100.0 + 50.0;
            let radians = angle.to_radians();
            let color = COLORS[(rng.next_f64() * COLORS.len() as f64) as usize % COLORS.len()];
            Particle {
                x: radians.cos() * distance,
                y: radians.sin() * distance,
                color,
            }
        })
        .collect()
}

/// Seed from the wall clock and process id.
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    nanos ^ ((std::process::id() as u64) << 32)
}

/// Seedable xorshift64; plenty for scattering sparks.
struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        XorShift {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_has_fixed_particle_count() {
        assert_eq!(burst(42).len(), PARTICLE_COUNT);
    }

    #[test]
    fn burst_is_deterministic_per_seed() {
        assert_eq!(burst(7), burst(7));
        assert_ne!(burst(7), burst(8));
    }

    #[test]
    fn particles_land_in_the_ring() {
        for p in burst(12345) {
            let d = (p.x * p.x + p.y * p.y).sqrt();
            assert!((50.0 - 1e-9..150.0 + 1e-9).contains(&d), "distance {d}");
            assert!(COLORS.contains(&p.color));
        }
    }

    #[test]
    fn zero_seed_still_scatters() {
        let particles = burst(0);
        assert!(particles.iter().any(|p| p.x != particles[0].x));
    }

    #[test]
    fn cell_offset_scales_pixels() {
        let p = Particle { x: 80.0, y: -32.0, color: COLORS[0] };
        assert_eq!(p.cell_offset(), (10, -2));
    }
}
