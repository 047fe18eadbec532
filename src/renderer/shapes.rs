//! Shape and sprite generation for 2D primitives
//!
//! Everything on screen is a flat-colored triangle list built on the CPU
//! in world coordinates; the pipeline maps world to NDC at upload time.

use super::vertex::{Vertex, colors};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::Particle;

/// Append a filled axis-aligned rect (two triangles)
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let (x2, y2) = (x + w, y + h);

    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x, y2, color));
    out.push(Vertex::new(x2, y2, color));

    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x2, y2, color));
    out.push(Vertex::new(x2, y, color));
}

/// A 1-bit sprite: each row is a bitmask, leftmost pixel in the highest
/// of the `width` bits
pub struct SpriteMask {
    pub width: u32,
    pub height: u32,
    pub rows: &'static [u16],
}

/// The invader, 11x8
///
/// ```text
/// ..X.....X..
/// ...X...X...
/// ..XXXXXXX..
/// .XX.XXX.XX.
/// XXXXXXXXXXX
/// X.XXXXXXX.X
/// X.X.....X.X
/// ...XX.XX...
/// ```
pub const INVADER: SpriteMask = SpriteMask {
    width: 11,
    height: 8,
    rows: &[
        0b00100000100,
        0b00010001000,
        0b00111111100,
        0b01101110110,
        0b11111111111,
        0b10111111101,
        0b10100000101,
        0b00011011000,
    ],
};

/// The player cannon, 13x8
///
/// ```text
/// ......X......
/// .....XXX.....
/// .....XXX.....
/// .XXXXXXXXXXX.
/// XXXXXXXXXXXXX
/// XXXXXXXXXXXXX
/// XXXXXXXXXXXXX
/// XXXXXXXXXXXXX
/// ```
pub const CANNON: SpriteMask = SpriteMask {
    width: 13,
    height: 8,
    rows: &[
        0b0000001000000,
        0b0000011100000,
        0b0000011100000,
        0b0111111111110,
        0b1111111111111,
        0b1111111111111,
        0b1111111111111,
        0b1111111111111,
    ],
};

/// Expand a sprite mask into cell quads filling a sprite box. Cells
/// scale to the box width; rows center vertically in the box.
pub fn sprite(
    mask: &SpriteMask,
    x: f32,
    y: f32,
    box_w: f32,
    box_h: f32,
    color: [f32; 4],
    out: &mut Vec<Vertex>,
) {
    let cell = box_w / mask.width as f32;
    let y0 = y + (box_h - cell * mask.height as f32) / 2.0;

    for (r, row) in mask.rows.iter().enumerate() {
        for c in 0..mask.width {
            if (row >> (mask.width - 1 - c)) & 1 == 1 {
                rect(
                    x + c as f32 * cell,
                    y0 + r as f32 * cell,
                    cell,
                    cell,
                    color,
                    out,
                );
            }
        }
    }
}

/// Deterministic background starfield. Positions come from hashing the
/// star index; alpha twinkles slowly with the tick counter.
pub fn starfield(count: usize, time_ticks: u64, out: &mut Vec<Vertex>) {
    for i in 0..count {
        let h = (i as u32).wrapping_mul(2654435761).wrapping_add(0x9E3779B9);
        let x = (h % WORLD_WIDTH as u32) as f32;
        let y = ((h >> 10) % WORLD_HEIGHT as u32) as f32;
        let size = 1.0 + ((h >> 20) & 0x3) as f32 * 0.5;

        let phase = ((h >> 7) & 0x3F) as u64;
        let t = ((time_ticks / 8 + phase) % 64) as f32 / 64.0;
        let twinkle = (t * std::f32::consts::TAU).sin();

        let mut color = colors::STAR;
        color[3] = 0.3 + 0.25 * twinkle;
        rect(x, y, size, size, color, out);
    }
}

/// Kill burst particles as shrinking, fading quads
pub fn particles(particles: &[Particle], cap: usize, out: &mut Vec<Vertex>) {
    for p in particles.iter().take(cap) {
        let s = p.size * p.life;
        let mut color = colors::PARTICLE;
        color[3] = p.life;
        rect(p.pos.x - s / 2.0, p.pos.y - s / 2.0, s, s, color, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_emits_two_triangles() {
        let mut out = Vec::new();
        rect(10.0, 20.0, 30.0, 40.0, [1.0; 4], &mut out);
        assert_eq!(out.len(), 6);
        // Corners span the full box
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_sprite_quad_count_matches_set_bits() {
        let mut out = Vec::new();
        sprite(&INVADER, 0.0, 0.0, 64.0, 64.0, [1.0; 4], &mut out);
        let bits: u32 = INVADER.rows.iter().map(|r| r.count_ones()).sum();
        assert_eq!(out.len(), (bits * 6) as usize);
    }

    #[test]
    fn test_sprite_bit_order_is_left_to_right() {
        // Single row: leftmost and rightmost pixels only
        const CORNERS: SpriteMask = SpriteMask {
            width: 4,
            height: 1,
            rows: &[0b1001],
        };
        let mut out = Vec::new();
        sprite(&CORNERS, 0.0, 0.0, 40.0, 10.0, [1.0; 4], &mut out);
        assert_eq!(out.len(), 12);
        // First quad starts at the left edge, second at cell 3
        assert_eq!(out[0].position[0], 0.0);
        assert_eq!(out[6].position[0], 30.0);
    }

    #[test]
    fn test_starfield_is_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        starfield(50, 123, &mut a);
        starfield(50, 123, &mut b);
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.iter().zip(&b) {
            assert_eq!(va.position, vb.position);
        }
        // Stars stay inside the playfield
        for v in &a {
            assert!(v.position[0] >= 0.0 && v.position[0] <= WORLD_WIDTH + 3.0);
            assert!(v.position[1] >= 0.0 && v.position[1] <= WORLD_HEIGHT + 3.0);
        }
    }

    #[test]
    fn test_particles_respect_cap() {
        let particles_vec: Vec<Particle> = (0..10)
            .map(|i| Particle {
                pos: glam::Vec2::new(i as f32, 0.0),
                vel: glam::Vec2::ZERO,
                life: 1.0,
                size: 3.0,
            })
            .collect();
        let mut out = Vec::new();
        particles(&particles_vec, 4, &mut out);
        assert_eq!(out.len(), 4 * 6);
    }
}
