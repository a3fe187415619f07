use std::fmt::{self, Display};

use cubelet_core::CubeState;
use cubelet_scrambler::Scrambler;
use rayon::prelude::*;

/// Counts of progress-detector values over a set of sampled states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectorHistogram {
    /// Number of states recorded.
    pub samples: usize,
    /// `cross[k]` is the number of states with `cross_count() == k`.
    pub cross: [usize; 5],
    /// `f2l[k]` is the number of states with `f2l_slots_solved() == k`.
    pub f2l: [usize; 5],
    /// Number of states with `eo_solved()`.
    pub eo_solved: usize,
    /// Number of solved states.
    pub solved: usize,
}

impl DetectorHistogram {
    /// Adds one state.
    pub fn record(&mut self, state: &CubeState) {
        self.samples += 1;
        self.cross[state.cross_count()] += 1;
        self.f2l[state.f2l_slots_solved()] += 1;
        self.eo_solved += usize::from(state.eo_solved());
        self.solved += usize::from(state.is_solved());
    }

    /// Combines two histograms.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.samples += other.samples;
        for (a, b) in self.cross.iter_mut().zip(other.cross) {
            *a += b;
        }
        for (a, b) in self.f2l.iter_mut().zip(other.f2l) {
            *a += b;
        }
        self.eo_solved += other.eo_solved;
        self.solved += other.solved;
        self
    }

    /// Samples `samples` scrambles in parallel and records their states.
    #[must_use]
    pub fn sample(scrambler: &Scrambler, samples: usize) -> Self {
        (0..samples)
            .into_par_iter()
            .map(|_| {
                let mut histogram = Self::default();
                histogram.record(&scrambler.generate().state());
                histogram
            })
            .reduce(Self::default, Self::merge)
    }
}

#[expect(clippy::cast_precision_loss)]
fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

impl Display for DetectorHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.samples;
        writeln!(f, "Samples: {total}")?;
        for (label, counts) in [("cross_count", &self.cross), ("f2l_slots_solved", &self.f2l)] {
            writeln!(f, "{label}:")?;
            for (value, &count) in counts.iter().enumerate() {
                writeln!(f, "  {value}: {count:>8} ({:5.1}%)", percent(count, total))?;
            }
        }
        writeln!(
            f,
            "eo_solved: {:>8} ({:5.1}%)",
            self.eo_solved,
            percent(self.eo_solved, total)
        )?;
        write!(
            f,
            "is_solved: {:>8} ({:5.1}%)",
            self.solved,
            percent(self.solved, total)
        )
    }
}
