use crossterm::style::Color;
use rand::seq::SliceRandom;
use rand::Rng;

use super::particles::{rainbow, Effect, Particle};

const MESSAGES: [&str; 8] = [
    "ALL WORDS FOUND!",
    "BRILLIANT!",
    "SHARP EYES!",
    "PERFECT!",
    "WELL DONE!",
    "WORD WIZARD!",
    "CONGRATULATIONS!",
    "NOTHING ESCAPES YOU!",
];

const BANNER: &str = r#"
 ██╗    ██╗██╗███╗   ██╗
 ██║    ██║██║████╗  ██║
 ██║ █╗ ██║██║██╔██╗ ██║
 ██║███╗██║██║██║╚██╗██║
 ╚███╔███╔╝██║██║ ╚████║
  ╚══╝╚══╝ ╚═╝╚═╝  ╚═══╝
"#;

const GRAVITY: f32 = 0.15;

/// Celebration shown once every word is found
pub struct WinScreen {
    particles: Vec<Particle>,
    effect: Effect,
    hue: f32,
    message: &'static str,
    width: u16,
    height: u16,
}

impl WinScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            particles: Vec::new(),
            effect: Effect::Confetti,
            hue: 0.0,
            message: MESSAGES[0],
            width: 80,
            height: 24,
        };
        screen.reset();
        screen
    }

    /// Clear the screen and pick a new effect and message
    pub fn reset(&mut self) {
        let mut rng = rand::thread_rng();
        self.particles.clear();
        self.hue = 0.0;
        self.effect = Effect::pick(&mut rng);
        self.message = MESSAGES.choose(&mut rng).copied().unwrap_or(MESSAGES[0]);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame. The letters effect rains down letters of `words`.
    pub fn update(&mut self, words: &[String]) {
        self.hue = (self.hue + 0.05) % 1.0;

        let floor = self.height as f32 + 5.0;
        self.particles.retain_mut(|p| p.step(GRAVITY, floor));

        let mut rng = rand::thread_rng();
        match self.effect {
            Effect::Confetti => {
                for _ in 0..3 {
                    self.particles.push(Particle::confetti(self.width, &mut rng));
                }
            }
            Effect::Letters => {
                for _ in 0..2 {
                    let letter = random_letter(words, &mut rng);
                    let color = rainbow(self.hue + rng.gen_range(0.0..1.0));
                    self.particles
                        .push(Particle::letter(self.width, letter, color, &mut rng));
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn current_message(&self) -> &'static str {
        self.message
    }

    pub fn banner(&self) -> &'static str {
        BANNER
    }

    /// Color for banner line `line`, cycling with the animation
    pub fn banner_color(&self, line: usize) -> Color {
        rainbow(self.hue + line as f32 * 0.1)
    }
}

impl Default for WinScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn random_letter(words: &[String], rng: &mut impl Rng) -> char {
    words
        .choose(rng)
        .and_then(|word| word.as_bytes().choose(rng))
        .map(|&b| char::from(b))
        .unwrap_or('*')
}
