//! Frame state for the decorative bar visualizer.
//!
//! All geometry is in surface pixels; the view decides how a pixel maps onto
//! the terminal. The state is stepped once per frame by the run loop and is
//! never shared with anything else.

pub const DEFAULT_BARS: usize = 64;

/// Chance per bar per tick of picking a new target amplitude
const RETARGET_PROBABILITY: f64 = 0.03;
const SMOOTHING: f64 = 0.1;
const TIME_STEP: f64 = 0.02;
const MIN_BAR_WIDTH: f64 = 1.0;
const MIN_GAP: f64 = 1.0;
/// Share of the surface height the tallest bar may reach
const MAX_HEIGHT_RATIO: f64 = 0.9;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarLayout {
    pub surface_width: f64,
    pub surface_height: f64,
    pub bar_width: f64,
    pub gap: f64,
    pub max_bar_height: f64,
    pub start_x: f64,
}

impl BarLayout {
    pub fn compute(bars: usize, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let bars = bars.max(1) as f64;

        let slot = width / bars;
        let bar_width = (slot * 0.9).max(MIN_BAR_WIDTH);
        let gap = (bar_width * 0.1).max(MIN_GAP);

        // Shrink to fit: keep a minimum gap while there is room, then pack edge to edge
        let (bar_width, gap) = if bars * (bar_width + gap) <= width {
            (bar_width, gap)
        } else if slot >= MIN_BAR_WIDTH + MIN_GAP {
            (slot - MIN_GAP, MIN_GAP)
        } else {
            (slot.max(MIN_BAR_WIDTH), 0.0)
        };
        let total_width = bars * (bar_width + gap);

        Self {
            surface_width: width,
            surface_height: height,
            bar_width,
            gap,
            max_bar_height: height * MAX_HEIGHT_RATIO,
            start_x: (width - total_width) / 2.0,
        }
    }
}

/// A bar ready to be painted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub hue: f64,
}

#[derive(Clone, Debug)]
pub struct VisualizerFrame {
    amplitudes: Vec<f64>,
    targets: Vec<f64>,
    time: f64,
    layout: BarLayout,
}

impl VisualizerFrame {
    pub fn new(bars: usize) -> Self {
        let bars = bars.max(1);
        Self {
            amplitudes: vec![0.0; bars],
            targets: vec![0.0; bars],
            time: 0.0,
            layout: BarLayout::default(),
        }
    }

    pub fn bar_count(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn layout(&self) -> BarLayout {
        self.layout
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Recompute bar geometry for a new surface size
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = BarLayout::compute(self.bar_count(), width, height);
        tracing::trace!(width, height, bar_width = self.layout.bar_width, "Visualizer resized");
    }

    /// Advance one frame
    pub fn step(&mut self, rng: &mut fastrand::Rng) {
        self.time += TIME_STEP;

        for (amplitude, target) in self.amplitudes.iter_mut().zip(self.targets.iter_mut()) {
            if rng.f64() < RETARGET_PROBABILITY {
                *target = rng.f64();
            }
            *amplitude += (*target - *amplitude) * SMOOTHING;
        }
    }

    /// Sinusoidal modulation so neighbouring bars never move in lockstep
    pub fn wave(&self, index: usize) -> f64 {
        (self.time * 2.0 + index as f64 * 0.1).sin() * 0.4 + 0.6
    }

    pub fn hue(&self, index: usize) -> f64 {
        (index as f64 * 1.5 + self.time * 30.0).rem_euclid(360.0)
    }

    pub fn bars(&self) -> impl Iterator<Item = Bar> + '_ {
        let layout = self.layout;
        self.amplitudes.iter().enumerate().map(move |(i, amplitude)| Bar {
            x: layout.start_x + i as f64 * (layout.bar_width + layout.gap),
            width: layout.bar_width,
            height: amplitude * self.wave(i) * layout.max_bar_height,
            hue: self.hue(i),
        })
    }
}
