//! Compatibility
//!
//! Decides whether a set of parts forms a working PC. The same rule library backs two entry
//! points: [`check_addition`] refuses a candidate part at the first conflict, while
//! [`evaluate_build`] collects every issue of a whole build into a [`CompatibilityReport`].
//!
//! Both are read-only and resolve parts through the supplied [`PartLookup`](crate::catalog::PartLookup).

use smallvec::SmallVec;

use crate::parts::{Part, PartCategory, PartSpec};

mod conflicts;
mod evaluation;
mod gate;
pub mod rules;

pub use conflicts::{Conflict, ConstraintViolation, Issue, Rule, Severity};
pub use evaluation::{CompatibilityReport, ReportStatus, evaluate_build};
pub use gate::check_addition;

/// A resolved part and the quantity it was selected in.
#[derive(Debug, Clone, Copy)]
struct Selected<'a> {
    part: &'a Part,
    quantity: u32,
}

/// Resolved parts of a build, in item order.
#[derive(Debug, Default)]
struct Selection<'a> {
    items: SmallVec<[Selected<'a>; 8]>,
}

impl<'a> Selection<'a> {
    fn push(&mut self, part: &'a Part, quantity: u32) {
        self.items.push(Selected { part, quantity });
    }

    /// Attributes of every selected part of one kind.
    fn all<T: 'a>(
        &self,
        pick: impl Fn(&'a PartSpec) -> Option<&'a T>,
    ) -> impl Iterator<Item = &'a T> {
        self.items
            .iter()
            .map(|selected| selected.part)
            .filter_map(move |part| pick(&part.spec))
    }

    /// Attributes of the first selected part of one kind.
    fn first<T: 'a>(&self, pick: impl Fn(&'a PartSpec) -> Option<&'a T>) -> Option<&'a T> {
        self.all(pick).next()
    }

    fn count(&self, category: PartCategory) -> usize {
        self.items
            .iter()
            .filter(|selected| selected.part.category() == category)
            .count()
    }

    /// Summed draw of every part with a known draw, times quantity.
    fn draw(&self) -> u64 {
        self.items
            .iter()
            .filter_map(|selected| {
                selected
                    .part
                    .draw_watts()
                    .map(|watts| u64::from(watts) * u64::from(selected.quantity))
            })
            .sum()
    }
}
