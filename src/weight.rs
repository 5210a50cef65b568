//! Tagged-union edge weight function (spec §3, §9).
//!
//! The source material (see `SPEC_FULL.md` §9, "Polymorphism via
//! ownership of the abstraction") expresses weight kinds as a tagged
//! union rather than a generic `Measure` trait the way
//! `petgraph::algo::{Measure, FloatMeasure, BoundedMeasure}`
//! (`src/algo/mod.rs`) does it. That generic approach is the right
//! shape when the *caller's* numeric type varies; here the dispatcher
//! itself needs to pattern-match on "is this cardinality / integral /
//! arbitrary real" to pick an algorithm, so a closed tagged enum is the
//! more direct translation of that idiom into this crate's shape.
use std::rc::Rc;

use crate::error::Error;

/// Which of the three kinds of weight function is in play; used by the
/// SSSP dispatcher (spec §4.2) to choose a concrete strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightProfile {
    /// Every edge has weight 1.
    Cardinality,
    /// Weights are integers representable in 64 bits.
    Integer,
    /// Weights are arbitrary finite reals.
    Real,
}

enum Kind {
    Cardinality,
    Integer(Rc<dyn Fn(usize) -> i64>),
    Real(Rc<dyn Fn(usize) -> f64>),
}

/// A pure mapping from edge index to weight, tagged with the nature of
/// the values it produces. Cloning is cheap (the closure, if any, is
/// reference-counted).
#[derive(Clone)]
pub struct WeightFn(Kind);

impl Clone for Kind {
    fn clone(&self) -> Self {
        match self {
            Kind::Cardinality => Kind::Cardinality,
            Kind::Integer(f) => Kind::Integer(Rc::clone(f)),
            Kind::Real(f) => Kind::Real(Rc::clone(f)),
        }
    }
}

impl WeightFn {
    /// The cardinality / null-weight sentinel: every edge costs 1.
    pub fn cardinality() -> WeightFn {
        WeightFn(Kind::Cardinality)
    }

    /// An integer-valued weight function.
    pub fn integer(f: impl Fn(usize) -> i64 + 'static) -> WeightFn {
        WeightFn(Kind::Integer(Rc::new(f)))
    }

    /// An arbitrary real-valued weight function. `NaN` results are a
    /// contract violation (spec §3); [`WeightFn::weight`] reports them
    /// as [`Error::NanWeight`] rather than panicking.
    pub fn real(f: impl Fn(usize) -> f64 + 'static) -> WeightFn {
        WeightFn(Kind::Real(Rc::new(f)))
    }

    /// Build a `WeightFn` from an `Option`, treating `None` as the
    /// cardinality sentinel (spec §3: "`null`-weight inputs are treated
    /// as cardinality").
    pub fn from_option(f: Option<impl Fn(usize) -> f64 + 'static>) -> WeightFn {
        match f {
            Some(f) => WeightFn::real(f),
            None => WeightFn::cardinality(),
        }
    }

    pub fn profile(&self) -> WeightProfile {
        match self.0 {
            Kind::Cardinality => WeightProfile::Cardinality,
            Kind::Integer(_) => WeightProfile::Integer,
            Kind::Real(_) => WeightProfile::Real,
        }
    }

    /// The weight of edge `e` as `f64`. Returns [`Error::NanWeight`] if
    /// the underlying function produced `NaN`.
    pub fn weight(&self, e: usize) -> Result<f64, Error> {
        let w = match &self.0 {
            Kind::Cardinality => 1.0,
            Kind::Integer(f) => f(e) as f64,
            Kind::Real(f) => f(e),
        };
        if w.is_nan() {
            return Err(Error::NanWeight { edge: e });
        }
        Ok(w)
    }

    /// The weight of edge `e` as `i64`, if this is an integer (or
    /// cardinality) weight function.
    pub fn weight_int(&self, e: usize) -> Option<i64> {
        match &self.0 {
            Kind::Cardinality => Some(1),
            Kind::Integer(f) => Some(f(e)),
            Kind::Real(_) => None,
        }
    }
}
