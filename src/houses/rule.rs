//! Compiled membership rules

use serde::Serialize;
use smallvec::SmallVec;

/// Parity of a house number magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Parity of a magnitude: even iff `magnitude % 2 == 0`
    #[inline]
    pub fn of(magnitude: u64) -> Self {
        if magnitude % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// A single compiled predicate over a normalized house number and its magnitude
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// `12+` or `12 до конца улицы`
    AtLeast { min: u64 },
    /// `12-`
    AtMost { max: u64 },
    /// `12-28`, inclusive on both ends. `min > max` never matches.
    InRange { min: u64, max: u64 },
    /// Verbatim tokens such as `17/1` or `15а`, compared against the whole
    /// normalized house number
    Literal { houses: Vec<String> },
    /// A bare parity keyword with no numbers after it
    Parity { parity: Parity },
}

impl Rule {
    /// Evaluate the rule
    #[inline]
    pub fn accepts(&self, house: &str, magnitude: u64) -> bool {
        match self {
            Rule::AtLeast { min } => magnitude >= *min,
            Rule::AtMost { max } => magnitude <= *max,
            Rule::InRange { min, max } => *min <= magnitude && magnitude <= *max,
            Rule::Literal { houses } => houses.iter().any(|h| h == house),
            Rule::Parity { parity } => Parity::of(magnitude) == *parity,
        }
    }
}

/// Rule list type; descriptions rarely produce more than a couple of rules per scope
pub type Rules = SmallVec<[Rule; 2]>;

/// The three rule lists a description compiles to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Consulted for odd magnitudes only
    pub odd: Rules,
    /// Consulted for even magnitudes only
    pub even: Rules,
    /// Consulted regardless of parity
    pub all: Rules,
}

impl RuleSet {
    /// The parity-specific list for `parity`
    #[inline]
    pub fn for_parity(&self, parity: Parity) -> &[Rule] {
        match parity {
            Parity::Odd => &self.odd,
            Parity::Even => &self.even,
        }
    }

    /// True iff any rule of the parity list or the parity-agnostic list accepts
    pub fn accepts(&self, house: &str, magnitude: u64) -> bool {
        self.for_parity(Parity::of(magnitude))
            .iter()
            .chain(self.all.iter())
            .any(|rule| rule.accepts(house, magnitude))
    }

    /// Total number of compiled rules
    pub fn len(&self) -> usize {
        self.odd.len() + self.even.len() + self.all.len()
    }

    /// True if nothing was compiled into any list
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
