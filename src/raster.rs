// The point-sampling rasterizer
//
// For every pixel we take one or more samples around the pixel center, ask
// the scene what color each sample point is, and average the results using
// the filter's weights. No edges are ever "drawn" - coverage falls out of
// how many samples land inside each primitive.

use image::{Rgb, RgbImage};
use indicatif::ProgressBar;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::scene::{Color, Scene};
use crate::shapes::Point;

/// The rectangle of world space that gets mapped onto the image
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Window {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }
}

/// Output size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Everything a render needs besides the scene
///
/// **Rust Concept: Default trait**
/// `RenderSettings::default()` gives an 8×6 world window at 800×600 with a
/// single box-filtered sample per pixel. Override fields with struct update
/// syntax: `RenderSettings { spp: 16, ..Default::default() }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub window: Window,
    pub resolution: Resolution,
    pub filter: Filter,
    /// Samples per pixel (must be at least 1)
    pub spp: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            window: Window::new(0.0, 8.0, 0.0, 6.0),
            resolution: Resolution::new(800, 600),
            filter: Filter::Box,
            spp: 1,
        }
    }
}

impl RenderSettings {
    pub fn new(window: Window, resolution: Resolution, filter: Filter, spp: u32) -> Self {
        Self {
            window,
            resolution,
            filter,
            spp,
        }
    }

    /// Check the settings and return the world size of one pixel (sx, sy)
    ///
    /// Called before any pixel work, so a bad parameter aborts the whole
    /// render up front instead of producing a half-written image.
    pub fn pixel_scale(&self) -> Result<(f64, f64)> {
        if self.spp < 1 {
            return Err(Error::InvalidArgument(format!(
                "spp must be >= 1, got {}",
                self.spp
            )));
        }

        let Resolution { width, height } = self.resolution;
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "resolution must be positive, got {}x{}",
                width, height
            )));
        }

        // The buffer holds width × height × 3 floats; refuse sizes that overflow
        if (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .is_none()
        {
            return Err(Error::InvalidArgument(format!(
                "resolution {}x{} is too large",
                width, height
            )));
        }

        let w = self.window;
        let sx = (w.xmax - w.xmin) / width as f64;
        let sy = (w.ymax - w.ymin) / height as f64;

        // `!(s > 0.0)` rather than `s <= 0.0` so NaN is rejected too
        if !(sx > 0.0 && sx.is_finite() && sy > 0.0 && sy.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "window {:?} gives a non-positive pixel scale ({}, {})",
                w, sx, sy
            )));
        }

        Ok((sx, sy))
    }
}

/// Offsets of the stratified sample grid, in pixel units
///
/// The filter's support square [-support, support]² is split into an n×n
/// grid with n = ceil(sqrt(spp)). Cells are visited row by row (y outer,
/// x inner) and the walk stops after `spp` cells, so when spp isn't a
/// perfect square the last row is only partly used.
pub fn grid_offsets(spp: u32, support: f64) -> Vec<(f64, f64)> {
    let spp = spp as usize;
    let n = (spp as f64).sqrt().ceil() as usize;

    (0..n)
        .flat_map(|sj| (0..n).map(move |si| (si, sj)))
        .take(spp)
        .map(|(si, sj)| {
            let u = (si as f64 + 0.5) / n as f64;
            let v = (sj as f64 + 0.5) / n as f64;
            ((2.0 * u - 1.0) * support, (2.0 * v - 1.0) * support)
        })
        .collect()
}

/// One weighted sample position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    pub dx: f64,
    pub dy: f64,
    pub weight: f64,
}

/// Sample offsets and filter weights shared by every pixel of a render
///
/// The offsets and weights don't depend on the pixel, so they are worked out
/// once per render. Zero-weight cells are dropped - they would add nothing
/// to either sum. Taps stay in grid order, which keeps the floating-point
/// accumulation order the same as walking the grid per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePattern {
    taps: Vec<Tap>,
}

impl SamplePattern {
    pub fn new(filter: Filter, spp: u32) -> Self {
        let taps = grid_offsets(spp, filter.support())
            .into_iter()
            .map(|(dx, dy)| Tap {
                dx,
                dy,
                weight: filter.weight(dx, dy),
            })
            .filter(|tap| tap.weight > 0.0)
            .collect();

        Self { taps }
    }

    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }
}

/// A height × width × 3 buffer of real RGB values
///
/// Row-major with the origin at the BOTTOM-left: row 0 is the lowest world
/// y, matching the world's y axis (images on disk usually go the other way,
/// see [`Image::to_rgb8`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Image {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color of pixel (i, j): column i, row j counted from the bottom
    ///
    /// # Panics
    /// Panics if (i, j) is outside the image
    pub fn pixel(&self, i: u32, j: u32) -> Color {
        assert!(i < self.width && j < self.height, "pixel ({}, {}) out of bounds", i, j);
        let k = (j as usize * self.width as usize + i as usize) * 3;
        Color::new(self.data[k], self.data[k + 1], self.data[k + 2])
    }

    /// The raw buffer: `[r, g, b, r, g, b, ...]`, bottom row first
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Convert to an 8-bit image for saving or display
    ///
    /// Channels are clamped to [0, 1] and scaled to 0..=255. Rows are flipped
    /// so the top of the world ends up at the top of the image.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixel(x, self.height - 1 - y);
            Rgb([to_u8(c.r), to_u8(c.g), to_u8(c.b)])
        })
    }
}

fn to_u8(v: f64) -> u8 {
    // NaN clamps to NaN, and `NaN as u8` is 0
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Per-render state shared by all rows
struct Sampler<'a> {
    scene: &'a Scene,
    window: Window,
    sx: f64,
    sy: f64,
    /// `None` when spp == 1: one unfiltered sample at the pixel center
    pattern: Option<SamplePattern>,
}

impl<'a> Sampler<'a> {
    fn new(scene: &'a Scene, settings: &RenderSettings) -> Result<Self> {
        let (sx, sy) = settings.pixel_scale()?;
        let pattern = (settings.spp > 1).then(|| SamplePattern::new(settings.filter, settings.spp));

        debug!(
            "rendering scene {:?} (primitives: {:?}) at {}x{}, filter={}, spp={}, taps={}",
            scene.name(),
            scene.iter().map(|(p, _)| p.kind()).collect::<Vec<_>>(),
            settings.resolution.width,
            settings.resolution.height,
            settings.filter,
            settings.spp,
            pattern.as_ref().map_or(1, |p| p.taps().len()),
        );

        Ok(Self {
            scene,
            window: settings.window,
            sx,
            sy,
            pattern,
        })
    }

    /// World point at pixel (i, j) shifted by (dx, dy) pixels from its center
    fn world_point(&self, i: u32, j: u32, dx: f64, dy: f64) -> Point {
        Point::new(
            self.window.xmin + self.sx * (i as f64 + 0.5 + dx),
            self.window.ymin + self.sy * (j as f64 + 0.5 + dy),
        )
    }

    fn shade_pixel(&self, i: u32, j: u32) -> Color {
        let pattern = match &self.pattern {
            Some(pattern) => pattern,
            None => return self.scene.shade(self.world_point(i, j, 0.0, 0.0)),
        };

        let mut acc = Color::default();
        let mut wsum = 0.0;
        for tap in pattern.taps() {
            let c = self.scene.shade(self.world_point(i, j, tap.dx, tap.dy));
            acc += c * tap.weight;
            wsum += tap.weight;
        }

        if wsum > 0.0 {
            acc / wsum
        } else {
            // Every grid cell had zero weight: fall back to the center
            self.scene.shade(self.world_point(i, j, 0.0, 0.0))
        }
    }

    /// Fill one row of the output (`row` holds width × 3 values)
    fn render_row(&self, j: u32, row: &mut [f64]) {
        for (i, px) in row.chunks_exact_mut(3).enumerate() {
            px.copy_from_slice(&self.shade_pixel(i as u32, j).to_array());
        }
    }
}

/// Render `scene` with the given settings
///
/// Fails with [`Error::InvalidArgument`] before touching any pixel if spp,
/// the resolution or the window is unusable.
///
/// The result only depends on the inputs: rendering the same scene with the
/// same settings twice gives bit-identical buffers.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Result<Image> {
    let sampler = Sampler::new(scene, settings)?;
    let mut image = Image::new(settings.resolution.width, settings.resolution.height);
    let stride = image.width as usize * 3;

    for (j, row) in image.data.chunks_exact_mut(stride).enumerate() {
        sampler.render_row(j as u32, row);
    }

    Ok(image)
}

/// Parallel version of [`render`]
///
/// **Rust Concept: Fearless Concurrency**
/// `par_chunks_mut` hands each row to exactly one rayon worker as a
/// `&mut [f64]`, so no two threads can ever write the same pixel. The scene
/// is only read, through a shared `&Scene`.
///
/// Each pixel is computed by the same code in the same order as in `render`,
/// so the output is bit-identical - only faster on multi-core machines.
pub fn render_parallel(scene: &Scene, settings: &RenderSettings) -> Result<Image> {
    let sampler = Sampler::new(scene, settings)?;
    let mut image = Image::new(settings.resolution.width, settings.resolution.height);
    let stride = image.width as usize * 3;

    image
        .data
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(j, row)| sampler.render_row(j as u32, row));

    Ok(image)
}

/// Sequential render that advances `progress` once per finished row
///
/// The bar's length is set to the image height. Finishing (or clearing) the
/// bar is left to the caller.
pub fn render_with_progress(
    scene: &Scene,
    settings: &RenderSettings,
    progress: &ProgressBar,
) -> Result<Image> {
    let sampler = Sampler::new(scene, settings)?;
    let mut image = Image::new(settings.resolution.width, settings.resolution.height);
    let stride = image.width as usize * 3;

    progress.set_length(image.height as u64);
    for (j, row) in image.data.chunks_exact_mut(stride).enumerate() {
        sampler.render_row(j as u32, row);
        progress.inc(1);
    }

    Ok(image)
}
