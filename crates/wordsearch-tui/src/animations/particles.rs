use crossterm::style::Color;
use rand::Rng;

/// Seconds of lifetime a particle loses per frame
const FRAME_SECONDS: f32 = 0.016;

pub const CONFETTI_GLYPHS: [char; 11] = ['*', '✦', '✧', '◆', '◇', '○', '●', '■', '□', '▲', '▽'];

pub const CONFETTI_PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Something falling across the win screen
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
    pub color: Color,
    velocity: (f32, f32),
    ttl: f32,
}

impl Particle {
    /// A confetti piece entering above a random column
    pub fn confetti(width: u16, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: -2.0,
            glyph: CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())],
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
            velocity: (rng.gen_range(-0.5..0.5), rng.gen_range(0.3..1.0)),
            ttl: rng.gen_range(3.0..6.0),
        }
    }

    /// A puzzle letter falling a little faster and straighter than confetti
    pub fn letter(width: u16, letter: char, color: Color, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: -1.0,
            glyph: letter,
            color,
            velocity: (rng.gen_range(-0.3..0.3), rng.gen_range(0.5..1.5)),
            ttl: rng.gen_range(4.0..7.0),
        }
    }

    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.ttl > 0.0
            && (0.0..width as f32).contains(&self.x)
            && (0.0..height as f32).contains(&self.y)
    }

    /// Advance one frame. Returns false once the particle is spent or has
    /// fallen past `floor`.
    pub fn step(&mut self, gravity: f32, floor: f32) -> bool {
        let (vx, vy) = self.velocity;
        self.x += vx;
        self.y += vy;
        self.velocity.1 = vy + gravity;
        self.ttl -= FRAME_SECONDS;
        self.ttl > 0.0 && self.y < floor
    }
}

/// Celebration styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Confetti,
    /// Letters from the solved words
    Letters,
}

impl Effect {
    pub fn pick(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Effect::Confetti
        } else {
            Effect::Letters
        }
    }
}

/// Fully saturated color for `hue` in turns; 0.0 and 1.0 are both red
pub fn rainbow(hue: f32) -> Color {
    let sector = hue.rem_euclid(1.0) * 6.0;
    let channel = |n: f32| {
        let k = (n + sector) % 6.0;
        let level = 1.0 - k.min(4.0 - k).clamp(0.0, 1.0);
        (level * 255.0).round() as u8
    };
    Color::Rgb {
        r: channel(5.0),
        g: channel(3.0),
        b: channel(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_primaries() {
        assert_eq!(rainbow(0.0), Color::Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(rainbow(1.0), Color::Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(rainbow(1.0 / 3.0), Color::Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(rainbow(2.0 / 3.0), Color::Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_particle_expires() {
        let mut particle = Particle {
            x: 5.0,
            y: 0.0,
            glyph: '*',
            color: Color::White,
            velocity: (0.0, 1.0),
            ttl: 1.0,
        };
        assert!(particle.is_visible(10, 10));
        assert!(particle.step(0.0, 10.0));
        assert_eq!(particle.y, 1.0);

        particle.y = 20.0;
        assert!(!particle.step(0.0, 10.0));
        assert!(!particle.is_visible(10, 10));
    }

    #[test]
    fn test_spawned_particles_start_above_screen() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let confetti = Particle::confetti(40, &mut rng);
            assert!(confetti.y < 0.0);
            assert!((0.0..40.0).contains(&confetti.x));

            let letter = Particle::letter(40, 'Q', Color::Red, &mut rng);
            assert_eq!(letter.glyph, 'Q');
            assert!(!letter.is_visible(40, 20));
        }
    }
}
