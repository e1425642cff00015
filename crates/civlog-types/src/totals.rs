use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::Hours;

/// Aggregate figures for one logbook page, or a running total over several.
///
/// `total` is day + night. The three duty buckets (`command`, `dual`,
/// `copilot`) may not add up to `total`: records whose function matches no
/// bucket only count toward the raw sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTotals {
    pub landings: u64,
    pub navigation: Hours,
    pub day: Hours,
    pub night: Hours,
    pub instrument: Hours,
    pub captain: Hours,
    pub dual: Hours,
    pub command: Hours,
    pub copilot: Hours,
    pub total: Hours,
}

impl PageTotals {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for PageTotals {
    type Output = PageTotals;

    fn add(mut self, rhs: PageTotals) -> PageTotals {
        self += rhs;
        self
    }
}

impl AddAssign for PageTotals {
    fn add_assign(&mut self, rhs: PageTotals) {
        self.landings += rhs.landings;
        self.navigation += rhs.navigation;
        self.day += rhs.day;
        self.night += rhs.night;
        self.instrument += rhs.instrument;
        self.captain += rhs.captain;
        self.dual += rhs.dual;
        self.command += rhs.command;
        self.copilot += rhs.copilot;
        self.total += rhs.total;
    }
}

impl Sum for PageTotals {
    fn sum<I: Iterator<Item = PageTotals>>(iter: I) -> PageTotals {
        iter.fold(PageTotals::default(), Add::add)
    }
}

impl<'a> Sum<&'a PageTotals> for PageTotals {
    fn sum<I: Iterator<Item = &'a PageTotals>>(iter: I) -> PageTotals {
        iter.copied().sum()
    }
}
