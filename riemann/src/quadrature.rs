use crate::primitive::Primitive;
use crate::rule::Rule;
use mathexpr::{CompileError, Evaluator};

// resolution of the display-range scan, in steps between samples
const RANGE_STEPS: usize = 200;

// y-range served when not a single sample evaluates, so the caller can
// always draw axes
const FALLBACK_RANGE: SampleRange = SampleRange {
    min: -5.0,
    max: 5.0,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Params {
    pub lower: f64,
    pub upper: f64,
    pub intervals: usize,
    pub rule: Rule,
}

impl Params {
    // degraded-but-live inputs: inverted bounds push the upper end out one
    // unit, a zero interval count becomes one
    pub fn sanitized(&self) -> Params {
        let mut p = *self;
        if p.lower >= p.upper {
            p.upper = p.lower + 1.0;
        }
        if p.intervals < 1 {
            p.intervals = 1;
        }
        p
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Quadrature {
    pub estimate: f64,
    pub primitives: Vec<Primitive>,
}

pub fn integrate(f: &Evaluator, params: &Params) -> Quadrature {
    let p = params.sanitized();
    let dx = (p.upper - p.lower) / p.intervals as f64;
    let mut estimate = 0.0;
    let mut primitives = Vec::with_capacity(p.intervals);
    for i in 0..p.intervals {
        let x0 = p.lower + dx * i as f64;
        let x1 = x0 + dx;
        // a subinterval whose sample fails is dropped whole: it adds
        // nothing to the sum and emits no shape, so the reported estimate
        // always equals the drawn area
        let shape = match p.rule {
            Rule::Left => f.evaluate(x0).ok().map(|y| Primitive::rect(x0, x1, y)),
            Rule::Right => f.evaluate(x1).ok().map(|y| Primitive::rect(x0, x1, y)),
            Rule::Midpoint => f
                .evaluate(x0 + dx / 2.0)
                .ok()
                .map(|y| Primitive::rect(x0, x1, y)),
            Rule::Trapezoidal => match (f.evaluate(x0), f.evaluate(x1)) {
                (Ok(y0), Ok(y1)) => Some(Primitive::trapezoid(x0, y0, x1, y1)),
                _ => None,
            },
        };
        if let Some(shape) = shape {
            estimate += shape.signed_area();
            primitives.push(shape);
        }
    }
    Quadrature {
        estimate,
        primitives,
    }
}

// dense scan of [lower, upper] for display scaling; failed samples are
// skipped rather than aborting the scan
pub fn find_range(f: &Evaluator, lower: f64, upper: f64) -> SampleRange {
    let p = Params {
        lower,
        upper,
        intervals: 1,
        rule: Rule::Left,
    }
    .sanitized();
    let step = (p.upper - p.lower) / RANGE_STEPS as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for i in 0..=RANGE_STEPS {
        if let Ok(y) = f.evaluate(p.lower + step * i as f64) {
            min = min.min(y);
            max = max.max(y);
        }
    }
    if min > max {
        return FALLBACK_RANGE;
    }
    SampleRange { min, max }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Report {
    pub estimate: f64,
    pub range: SampleRange,
    pub primitives: Vec<Primitive>,
    pub label: &'static str,
    // the compiled function, so renderers can sample the curve without
    // compiling the source a second time
    pub function: Evaluator,
    pub error: Option<CompileError>,
}

// everything the presentation layer needs for one redraw. A compile error
// downgrades the function to identically zero instead of aborting, and is
// carried along so the caller can flag the invalid input.
pub fn report(source: &str, params: &Params) -> Report {
    let (f, error) = match Evaluator::compile(source) {
        Ok(f) => (f, None),
        Err(e) => (Evaluator::zero(), Some(e)),
    };
    let q = integrate(&f, params);
    Report {
        estimate: q.estimate,
        range: find_range(&f, params.lower, params.upper),
        primitives: q.primitives,
        label: params.rule.label(),
        function: f,
        error,
    }
}
