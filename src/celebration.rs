use rand::seq::SliceRandom;
use rand::Rng;

use crate::runtime::TICK_RATE_MS;

const BANNERS: [&str; 5] = ["SOLVED!", "SPARED!", "NICE!", "ESCAPED!", "WELL DONE!"];
const SPARKS: [char; 5] = ['*', '+', '.', 'o', '\''];
const GRAVITY: f64 = 12.0;

/// A single glyph flying across the screen after a win
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
    /// Banner letters glide to a fixed slot and stay there
    pub target: Option<(f64, f64)>,
}

impl Particle {
    fn spark<R: Rng>(x: f64, y: f64, symbol: char, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-4.0..4.0),
            vel_y: rng.gen_range(-5.0..-1.0),
            symbol,
            color_index: rng.gen_range(0..6),
            age: 0.0,
            max_age: rng.gen_range(1.5..3.0),
            target: None,
        }
    }

    fn banner_letter<R: Rng>(x: f64, y: f64, target: (f64, f64), symbol: char, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: target.0 - x,
            vel_y: target.1 - y,
            symbol,
            color_index: rng.gen_range(0..6),
            age: 0.0,
            max_age: f64::INFINITY,
            target: Some(target),
        }
    }

    /// Advance by `dt` seconds; false once the particle has expired
    fn update(&mut self, dt: f64) -> bool {
        match self.target {
            Some((tx, ty)) => {
                let dist = ((tx - self.x).powi(2) + (ty - self.y).powi(2)).sqrt();
                if dist > 0.5 {
                    self.x += self.vel_x * dt * 2.0;
                    self.y += self.vel_y * dt * 2.0;
                    self.vel_x = tx - self.x;
                    self.vel_y = ty - self.y;
                } else {
                    self.x = tx;
                    self.y = ty;
                }
            }
            None => {
                self.x += self.vel_x * dt;
                self.y += self.vel_y * dt;
                self.vel_y += GRAVITY * dt;
            }
        }

        self.age += dt;
        self.age < self.max_age
    }
}

/// Short burst of the solved word's letters plus a banner, driven by runtime ticks
#[derive(Debug)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    pub banner: String,
    pub elapsed_ticks: usize,
    pub duration_ticks: usize,
    pub is_active: bool,
    width: f64,
    height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            banner: String::new(),
            elapsed_ticks: 0,
            duration_ticks: 25,
            is_active: false,
            width: 80.0,
            height: 24.0,
        }
    }

    pub fn start(&mut self, word: &str, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.elapsed_ticks = 0;
        self.is_active = true;
        self.width = width as f64;
        self.height = height as f64;
        self.banner = BANNERS.choose(&mut rng).unwrap_or(&BANNERS[0]).to_string();

        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;

        let start_x = center_x - self.banner.chars().count() as f64 / 2.0;
        for (i, ch) in self.banner.chars().enumerate().filter(|(_, c)| *c != ' ') {
            let from = (
                center_x + rng.gen_range(-12.0..12.0),
                center_y + rng.gen_range(-6.0..6.0),
            );
            self.particles.push(Particle::banner_letter(
                from.0,
                from.1,
                (start_x + i as f64, center_y - 3.0),
                ch,
                &mut rng,
            ));
        }

        let mut symbols: Vec<char> = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        symbols.extend(SPARKS);
        for _ in 0..30 {
            let symbol = *symbols.choose(&mut rng).unwrap_or(&'*');
            let x = center_x + rng.gen_range(-10.0..10.0);
            let y = center_y + rng.gen_range(-2.0..4.0);
            self.particles.push(Particle::spark(x, y, symbol, &mut rng));
        }
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.particles.clear();
    }

    /// Called once per runtime tick
    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        let dt = TICK_RATE_MS as f64 / 1000.0;
        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.duration_ticks {
            self.stop();
            return;
        }

        let (width, height) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            let alive = p.update(dt);
            let off_screen = p.target.is_none() && (p.y > height + 2.0 || p.x < -2.0 || p.x > width + 2.0);
            alive && !off_screen
        });
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}
