//! A screen full of circles driven by a fixed-timestep loop.

use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgba;
use crate::config::{FillMode, SceneConfig};
use crate::error::Result;
use crate::geometry::Point;
use crate::present::Presenter;
use crate::rasterizer::{CircleRasterizer, Shape};

/// Accumulates frame time and hands it out in whole ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    /// Timestep running `tick_rate` ticks per second (at least 1).
    #[must_use]
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
        }
    }

    /// Length of one tick.
    #[must_use]
    pub const fn tick(&self) -> Duration {
        self.tick
    }

    /// Add `elapsed` and return how many whole ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of a tick left in the accumulator, in `[0, 1)`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.accumulator.as_secs_f64() / self.tick.as_secs_f64()
    }
}

struct Body<P: Presenter> {
    circle: CircleRasterizer<P>,
    velocity: Point,
}

/// Circles sharing one presenter, drawn in insertion order.
pub struct Scene<P: Presenter> {
    presenter: Rc<P>,
    bodies: Vec<Body<P>>,
    timestep: FixedTimestep,
    width: i32,
    height: i32,
    ticks: u64,
    running: bool,
    seed: u64,
}

impl<P: Presenter> Scene<P> {
    /// Build every circle described by `config`.
    ///
    /// Circles built before a failure are dropped, releasing their textures.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or a circle cannot be created.
    pub fn populate(presenter: Rc<P>, config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let width = config.screen_width.min(i32::MAX as u32) as i32;
        let height = config.screen_height.min(i32::MAX as u32) as i32;

        let mut bodies = Vec::with_capacity(config.circle_count);
        for _ in 0..config.circle_count {
            let center = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            let color = Rgba::rgb(
                rng.random_range(0..255),
                rng.random_range(0..255),
                rng.random_range(0..255),
            );
            let velocity = if config.max_speed > 0 {
                let s = config.max_speed;
                Point::new(rng.random_range(-s..=s), rng.random_range(-s..=s))
            } else {
                Point::ORIGIN
            };

            let shape = match config.fill {
                FillMode::Outline => Shape::Outline,
                FillMode::Filled => Shape::Filled,
                FillMode::Naive => Shape::Naive,
                FillMode::Random if rng.random_bool(0.5) => Shape::Filled,
                FillMode::Random => Shape::Outline,
            };
            let circle = CircleRasterizer::with_shape(
                Rc::clone(&presenter),
                center,
                config.radius,
                color,
                shape,
                config.strategy,
            )?;

            bodies.push(Body { circle, velocity });
        }

        log::info!(
            "populated {} circles of radius {} on {}x{} (seed {seed})",
            bodies.len(),
            config.radius,
            width,
            height
        );

        Ok(Self {
            presenter,
            bodies,
            timestep: FixedTimestep::new(config.tick_rate),
            width,
            height,
            ticks: 0,
            running: true,
            seed,
        })
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.ticks += 1;
        for body in &mut self.bodies {
            if body.velocity == Point::ORIGIN {
                continue;
            }
            let mut center = body.circle.center() + body.velocity;
            bounce(&mut center.x, &mut body.velocity.x, self.width);
            bounce(&mut center.y, &mut body.velocity.y, self.height);
            body.circle.move_to(center);
        }
    }

    /// Clear to black and draw every circle.
    ///
    /// # Errors
    ///
    /// Propagates presenter failures.
    pub fn render(&self) -> Result<()> {
        self.presenter.clear(Rgba::BLACK)?;
        for body in &self.bodies {
            body.circle.present()?;
        }
        Ok(())
    }

    /// Run one host-loop iteration: tick as often as `elapsed` allows, then
    /// render once. Returns the number of ticks run; nothing happens after
    /// shutdown was requested.
    ///
    /// # Errors
    ///
    /// Propagates presenter failures.
    pub fn run_frame(&mut self, elapsed: Duration) -> Result<u32> {
        if !self.running {
            return Ok(0);
        }
        let ticks = self.timestep.advance(elapsed);
        for _ in 0..ticks {
            self.tick();
        }
        self.render()?;
        log::trace!("frame: {ticks} ticks, alpha {:.3}", self.timestep.alpha());
        Ok(ticks)
    }

    /// Ask the loop to stop.
    pub fn request_shutdown(&mut self) {
        log::debug!("shutdown requested after {} ticks", self.ticks);
        self.running = false;
    }

    /// Whether the loop should keep going.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seed the circles were generated from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The circles in draw order.
    pub fn circles(&self) -> impl Iterator<Item = &CircleRasterizer<P>> {
        self.bodies.iter().map(|body| &body.circle)
    }

    /// Number of circles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene has no circles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The timestep driving [`run_frame`](Self::run_frame).
    #[must_use]
    pub const fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// The shared presenter.
    #[must_use]
    pub fn presenter(&self) -> &Rc<P> {
        &self.presenter
    }
}

/// Reflect `velocity` when `pos` leaves `[0, extent)`, keeping `pos` inside.
fn bounce(pos: &mut i32, velocity: &mut i32, extent: i32) {
    if *pos < 0 {
        *pos = -*pos;
        *velocity = velocity.abs();
    } else if *pos >= extent {
        *pos = 2 * (extent - 1) - *pos;
        *velocity = -velocity.abs();
    }
    *pos = (*pos).clamp(0, extent - 1);
}
