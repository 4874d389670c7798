//! Metaball simulation: moving blobs whose summed field is quantized to glyphs.
//!
//! Rendering is two-track. The glyph comes from the *total* field at a cell,
//! compared against ascending thresholds; the color comes from the single
//! blob with the largest individual contribution. Nearby blobs therefore
//! merge into one shape while each keeps its own hue.
//!
//! Cost is `O(width * height * blobs)` per rendered frame, which is why an
//! engine holds at most [`MAX_BLOBS`] blobs.

use arrayvec::ArrayVec;
use log::debug;

use crate::layer::Layer;
use crate::rng::SimpleRng;
use crate::types::{
    Canvas, Cell, CellStyle, ConfigError, Palette, Rgb, DEFAULT_DAMPING, LAVA_DAMPING, MAX_BLOBS,
};

/// Wobble amplitude added to velocity each tick.
const WOBBLE: f64 = 0.05;

/// A single floating blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    color: Rgb,
}

impl Blob {
    /// Rejects a non-positive or non-finite radius, and non-finite
    /// position or velocity.
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, color: Rgb) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::NonPositive("radius"));
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(ConfigError::NotFinite("position"));
        }
        if !(vx.is_finite() && vy.is_finite()) {
            return Err(ConfigError::NotFinite("velocity"));
        }
        Ok(Self {
            x,
            y,
            vx,
            vy,
            radius,
            color,
        })
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Field strength `radius² / distance²` at `(x, y)`.
    ///
    /// At the blob's own position the field is `radius²` rather than
    /// infinite.
    ///
    /// ```
    /// use tui_lagoon_core::Blob;
    /// use tui_lagoon_types::Rgb;
    ///
    /// let b = Blob::new(4.0, 4.0, 0.0, 0.0, 3.0, Rgb::default()).unwrap();
    /// assert_eq!(b.field(4.0, 4.0), 9.0);
    /// assert_eq!(b.field(7.0, 4.0), 1.0);
    /// ```
    #[inline]
    pub fn field(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        let d2 = dx * dx + dy * dy;
        let r2 = self.radius * self.radius;
        if d2 == 0.0 {
            r2
        } else {
            r2 / d2
        }
    }

    /// Explicit Euler step, then a soft bounce: position is never clamped,
    /// only the velocity on an out-of-range axis flips.
    fn integrate(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    /// Phase offsets differ per blob index and per axis so blobs never move
    /// in lockstep.
    fn wobble(&mut self, frame: u64, index: usize) {
        let i = index as u64;
        self.vx += ((frame + i * 37) as f64 / 30.0).sin() * WOBBLE;
        self.vy += ((frame + i * 41) as f64 / 25.0).cos() * WOBBLE;
    }

    fn damp(&mut self, damping: f64) {
        self.vx *= damping;
        self.vy *= damping;
    }
}

/// Pairwise push that keeps blobs from overlapping (lava lamp only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    /// Extra gap kept beyond the sum of the two radii
    pub margin: f64,
    /// Velocity change per cell of overlap
    pub strength: f64,
}

impl Repulsion {
    pub const LAVA: Repulsion = Repulsion {
        margin: 5.0,
        strength: 0.05,
    };
}

/// Field value at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Sum over all blobs
    pub total: f64,
    /// Index of the blob with the largest single contribution
    pub dominant: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct MetaballEngine {
    blobs: ArrayVec<Blob, MAX_BLOBS>,
    width: u16,
    height: u16,
    frame: u64,
    gradient: Vec<char>,
    thresholds: Vec<f64>,
    damping: f64,
    repulsion: Option<Repulsion>,
}

impl MetaballEngine {
    /// Empty engine with the block-shade gradient `" ░▒▓█"`.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            blobs: ArrayVec::new(),
            width,
            height,
            frame: 0,
            gradient: vec![' ', '░', '▒', '▓', '█'],
            thresholds: vec![0.3, 0.8, 1.5, 2.5],
            damping: DEFAULT_DAMPING,
            repulsion: None,
        }
    }

    /// Engine tuned for the lava lamp: blobs repel each other and damping is
    /// a little stronger.
    pub fn lava_lamp(width: u16, height: u16) -> Self {
        let mut engine = Self::new(width, height);
        engine.damping = LAVA_DAMPING;
        engine.repulsion = Some(Repulsion::LAVA);
        engine
    }

    pub fn with_repulsion(mut self, repulsion: Repulsion) -> Self {
        self.repulsion = Some(repulsion);
        self
    }

    pub fn set_damping(&mut self, damping: f64) -> Result<(), ConfigError> {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(ConfigError::DampingOutOfRange);
        }
        self.damping = damping;
        Ok(())
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn repulsion(&self) -> Option<Repulsion> {
        self.repulsion
    }

    pub fn add_blob(&mut self, blob: Blob) -> Result<(), ConfigError> {
        self.blobs
            .try_push(blob)
            .map_err(|_| ConfigError::TooManyBlobs)
    }

    /// Add `count` blobs at seeded random positions, colored from `palette`
    /// in order. Radius is in `[3, 6)` and each velocity axis in `[-0.4, 0.4)`.
    pub fn scatter(&mut self, seed: u32, count: usize, palette: &Palette) -> Result<(), ConfigError> {
        if self.blobs.len() + count > MAX_BLOBS {
            return Err(ConfigError::TooManyBlobs);
        }
        let mut rng = SimpleRng::new(seed);
        let (w, h) = (self.width as f64, self.height as f64);
        for i in 0..count {
            let blob = Blob::new(
                rng.next_between(0.0, w),
                rng.next_between(0.0, h),
                rng.next_between(-0.4, 0.4),
                rng.next_between(-0.4, 0.4),
                rng.next_between(3.0, 6.0),
                palette.cycle(i),
            )?;
            self.add_blob(blob)?;
        }
        Ok(())
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn gradient(&self) -> &[char] {
        &self.gradient
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Replace glyphs and thresholds together.
    ///
    /// `glyphs[0]` is the empty glyph and `thresholds` must be finite,
    /// strictly ascending and exactly one shorter than `glyphs`. On error the
    /// previous pair stays in place.
    pub fn set_gradient(&mut self, glyphs: Vec<char>, thresholds: Vec<f64>) -> Result<(), ConfigError> {
        if glyphs.len() < 2 {
            return Err(ConfigError::GradientTooShort);
        }
        if thresholds.len() != glyphs.len() - 1 {
            return Err(ConfigError::GradientMismatch {
                glyphs: glyphs.len(),
                thresholds: thresholds.len(),
            });
        }
        let ascending = thresholds.iter().all(|t| t.is_finite())
            && thresholds.windows(2).all(|w| w[0] < w[1]);
        if !ascending {
            return Err(ConfigError::ThresholdsNotAscending);
        }
        self.gradient = glyphs;
        self.thresholds = thresholds;
        Ok(())
    }

    /// Sum of all blob fields at `(x, y)` plus the dominant blob.
    ///
    /// Ties go to the lower index. With no blobs the field is zero everywhere.
    pub fn field_at(&self, x: f64, y: f64) -> FieldSample {
        let mut total = 0.0;
        let mut best = 0.0;
        let mut dominant = None;
        for (i, blob) in self.blobs.iter().enumerate() {
            let f = blob.field(x, y);
            total += f;
            if f > best {
                best = f;
                dominant = Some(i);
            }
        }
        FieldSample { total, dominant }
    }

    /// Index into the gradient for a total field value: the first threshold
    /// the field is strictly below, or the densest glyph past the last one.
    #[inline]
    pub fn level_for(&self, total: f64) -> usize {
        self.thresholds.partition_point(|t| *t <= total)
    }

    /// The cell a field sample quantizes to.
    pub fn cell_for(&self, sample: FieldSample) -> Cell {
        let level = self.level_for(sample.total);
        match sample.dominant {
            Some(i) if level > 0 => {
                Cell::new(self.gradient[level], CellStyle::fg(self.blobs[i].color))
            }
            _ => Cell::new(self.gradient[0], CellStyle::DEFAULT),
        }
    }

    /// Velocity change on blob `i` from every other blob that is too close.
    fn repulsion_on(&self, i: usize, rep: Repulsion) -> (f64, f64) {
        let me = &self.blobs[i];
        let mut dv = (0.0, 0.0);
        for (j, other) in self.blobs.iter().enumerate() {
            if i == j {
                continue;
            }
            let dx = me.x - other.x;
            let dy = me.y - other.y;
            let dist = (dx * dx + dy * dy).sqrt();
            let min_dist = me.radius + other.radius + rep.margin;
            if dist > 0.0 && dist < min_dist {
                let force = (min_dist - dist) * rep.strength;
                dv.0 += dx / dist * force;
                dv.1 += dy / dist * force;
            }
        }
        dv
    }
}

impl Layer for MetaballEngine {
    /// Blobs are stepped in index order, so later blobs see the new
    /// positions of earlier ones when computing repulsion.
    fn update(&mut self) {
        self.frame += 1;
        let (w, h) = (self.width as f64, self.height as f64);

        for i in 0..self.blobs.len() {
            self.blobs[i].integrate(w, h);

            if let Some(rep) = self.repulsion {
                let (dvx, dvy) = self.repulsion_on(i, rep);
                self.blobs[i].vx += dvx;
                self.blobs[i].vy += dvy;
            }

            let frame = self.frame;
            let damping = self.damping;
            let blob = &mut self.blobs[i];
            blob.wobble(frame, i);
            blob.damp(damping);
        }
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn render_into(&self, canvas: &mut Canvas) {
        canvas.resize(self.width, self.height);
        if self.blobs.is_empty() {
            return;
        }

        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cell_for(self.field_at(x as f64, y as f64));
                if !cell.is_transparent() {
                    canvas.set(x, y, cell);
                }
            }
        }
    }

    /// Blobs keep their positions; ones now outside the area bounce back in.
    fn resize(&mut self, width: u16, height: u16) {
        debug!("metaball engine resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(x: f64, y: f64, r: f64) -> Blob {
        Blob::new(x, y, 0.0, 0.0, r, Rgb::new(255, 0, 0)).unwrap()
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert_eq!(
            Blob::new(0.0, 0.0, 0.0, 0.0, 0.0, Rgb::default()),
            Err(ConfigError::NonPositive("radius"))
        );
        assert!(Blob::new(0.0, 0.0, 0.0, 0.0, -1.0, Rgb::default()).is_err());
        assert!(Blob::new(0.0, 0.0, 0.0, 0.0, f64::NAN, Rgb::default()).is_err());
    }

    #[test]
    fn field_decreases_with_distance() {
        let b = blob(0.0, 0.0, 2.0);
        let mut prev = b.field(0.25, 0.0);
        for step in 1..50 {
            let f = b.field(step as f64 * 0.5, 0.0);
            assert!(f < prev, "field must strictly decrease (step {})", step);
            prev = f;
        }
    }

    #[test]
    fn level_selection_uses_strict_less_than() {
        let e = MetaballEngine::new(1, 1);
        assert_eq!(e.level_for(0.0), 0);
        assert_eq!(e.level_for(0.29), 0);
        assert_eq!(e.level_for(0.3), 1);
        assert_eq!(e.level_for(0.79), 1);
        assert_eq!(e.level_for(2.5), 4);
        assert_eq!(e.level_for(1e9), 4);
    }

    #[test]
    fn dominant_blob_colors_the_cell() {
        let mut e = MetaballEngine::new(10, 1);
        e.add_blob(Blob::new(1.0, 0.0, 0.0, 0.0, 2.0, Rgb::new(1, 1, 1)).unwrap())
            .unwrap();
        e.add_blob(Blob::new(8.0, 0.0, 0.0, 0.0, 2.0, Rgb::new(2, 2, 2)).unwrap())
            .unwrap();
        let c = e.render();
        assert_eq!(c.get(2, 0).unwrap().style.fg, Rgb::new(1, 1, 1));
        assert_eq!(c.get(7, 0).unwrap().style.fg, Rgb::new(2, 2, 2));
    }

    #[test]
    fn mismatched_gradient_keeps_previous_pair() {
        let mut e = MetaballEngine::new(1, 1);
        assert_eq!(
            e.set_gradient(vec![' ', '#'], vec![0.5, 1.0]),
            Err(ConfigError::GradientMismatch {
                glyphs: 2,
                thresholds: 2
            })
        );
        assert_eq!(
            e.set_gradient(vec![' ', '.', '#'], vec![1.0, 0.5]),
            Err(ConfigError::ThresholdsNotAscending)
        );
        assert_eq!(
            e.set_gradient(vec!['#'], vec![]),
            Err(ConfigError::GradientTooShort)
        );
        assert_eq!(e.gradient(), &[' ', '░', '▒', '▓', '█']);
        assert_eq!(e.thresholds(), &[0.3, 0.8, 1.5, 2.5]);

        e.set_gradient(vec![' ', '#'], vec![1.0]).unwrap();
        assert_eq!(e.gradient(), &[' ', '#']);
    }

    #[test]
    fn velocity_flips_outside_bounds_without_clamping() {
        let mut e = MetaballEngine::new(10, 10);
        e.add_blob(Blob::new(9.5, 5.0, 1.0, 0.0, 1.0, Rgb::default()).unwrap())
            .unwrap();
        e.update();
        let b = e.blobs()[0];
        assert!(b.position().0 > 10.0, "position is not clamped");
        assert!(b.velocity().0 < 0.0, "velocity is reversed");
    }

    #[test]
    fn damping_bounds_speed() {
        let mut e = MetaballEngine::new(40, 20);
        e.add_blob(blob(20.0, 10.0, 3.0)).unwrap();
        for _ in 0..5000 {
            e.update();
        }
        let (vx, vy) = e.blobs()[0].velocity();
        // Wobble adds at most 0.05 per tick; damping caps |v| near 0.05 / 0.01.
        assert!(vx.abs() <= 5.0 && vy.abs() <= 5.0);
    }

    #[test]
    fn repulsion_pushes_close_blobs_apart() {
        let mut e = MetaballEngine::new(100, 100).with_repulsion(Repulsion::LAVA);
        e.add_blob(blob(50.0, 50.0, 3.0)).unwrap();
        e.add_blob(blob(52.0, 50.0, 3.0)).unwrap();
        e.update();
        assert!(e.blobs()[0].velocity().0 < 0.0);
        assert!(e.blobs()[1].velocity().0 > 0.0);
    }

    #[test]
    fn coincident_blobs_do_not_repel() {
        let mut e = MetaballEngine::lava_lamp(100, 100);
        e.add_blob(blob(50.0, 50.0, 3.0)).unwrap();
        e.add_blob(blob(50.0, 50.0, 3.0)).unwrap();
        e.update();
        for b in e.blobs() {
            let (vx, vy) = b.velocity();
            assert!(vx.is_finite() && vy.is_finite());
        }
    }

    #[test]
    fn capacity_is_bounded() {
        let mut e = MetaballEngine::new(10, 10);
        for _ in 0..MAX_BLOBS {
            e.add_blob(blob(1.0, 1.0, 1.0)).unwrap();
        }
        assert_eq!(e.add_blob(blob(1.0, 1.0, 1.0)), Err(ConfigError::TooManyBlobs));
    }

    #[test]
    fn scatter_is_deterministic() {
        let palette = Palette::new(vec![Rgb::new(1, 0, 0), Rgb::new(0, 1, 0)]).unwrap();
        let mut a = MetaballEngine::new(80, 24);
        let mut b = MetaballEngine::new(80, 24);
        a.scatter(42, 4, &palette).unwrap();
        b.scatter(42, 4, &palette).unwrap();
        assert_eq!(a.blobs(), b.blobs());
        assert_eq!(a.blobs()[1].color(), Rgb::new(0, 1, 0));
        for blob in a.blobs() {
            let (x, y) = blob.position();
            assert!((0.0..80.0).contains(&x) && (0.0..24.0).contains(&y));
            assert!((3.0..6.0).contains(&blob.radius()));
        }
        assert_eq!(
            a.scatter(1, MAX_BLOBS, &palette),
            Err(ConfigError::TooManyBlobs)
        );
        assert_eq!(a.blobs().len(), 4);
    }
}
