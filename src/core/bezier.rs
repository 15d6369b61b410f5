//! Bézier-Kurven beliebigen Grades über die Bernstein-Basis.
//!
//! B(t) = Σ C(n,i) · (1-t)^(n-i) · t^i · P_i  mit n = Anzahl Punkte - 1.
//! Die Binomialkoeffizienten stammen aus einer iterativ aufgebauten
//! Pascal-Zeile, die pro Kurve einmal berechnet und für alle Samples
//! wiederverwendet wird.

use glam::{DVec2, Vec2};

/// Standard-Schrittweite für das Abtasten der Kurve (1001 Samples).
pub const DEFAULT_SAMPLE_STEP: f64 = 0.001;
/// Kleinste zulässige Schrittweite (höchstens 1_000_001 Samples).
pub const MIN_SAMPLE_STEP: f64 = 1e-6;

/// Baut die n-te Zeile des Pascal'schen Dreiecks: `[C(n,0), …, C(n,n)]`.
pub fn pascal_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    row.push(1.0);
    for _ in 0..n {
        // Von rechts nach links addieren, damit die Zeile in-place wächst
        row.push(1.0);
        for k in (1..row.len() - 1).rev() {
            row[k] += row[k - 1];
        }
    }
    row
}

/// Binomialkoeffizient C(n,k); 0 für k > n.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    pascal_row(n)[k]
}

/// Kurve über einer geordneten Kontrollpunkt-Folge (mindestens ein Punkt).
#[derive(Debug, Clone)]
pub struct BezierCurve<'a> {
    points: &'a [Vec2],
    weights: Vec<f64>,
}

impl<'a> BezierCurve<'a> {
    /// Erstellt die Kurve; `None` bei leerer Punktfolge.
    pub fn new(points: &'a [Vec2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            weights: pascal_row(points.len() - 1),
        })
    }

    /// Grad der Kurve (Anzahl Punkte - 1).
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Position auf der Kurve für `t ∈ [0, 1]`.
    pub fn evaluate(&self, t: f64) -> Vec2 {
        let n = self.degree();
        let inv = 1.0 - t;

        let sum = self
            .points
            .iter()
            .zip(&self.weights)
            .enumerate()
            .fold(DVec2::ZERO, |acc, (i, (p, c))| {
                let basis = c * inv.powi((n - i) as i32) * t.powi(i as i32);
                acc + p.as_dvec2() * basis
            });

        sum.as_vec2()
    }

    /// Lazy Abtastung für t = 0, step, 2·step, … bis einschließlich 1.
    ///
    /// Ungültige Schrittweiten fallen auf den Standard zurück, zu kleine
    /// werden auf `MIN_SAMPLE_STEP` angehoben.
    pub fn samples(&self, step: f64) -> CurveSamples<'_> {
        let step = if step.is_finite() && step > 0.0 {
            step.max(MIN_SAMPLE_STEP)
        } else {
            DEFAULT_SAMPLE_STEP
        };
        // Toleranz gegen Rundungsfehler: 1/0.001 darf nicht zu 1001 Intervallen werden
        let intervals = ((1.0 / step) - 1e-9).ceil().max(1.0) as usize;

        CurveSamples {
            curve: self,
            step,
            intervals,
            next: 0,
        }
    }
}

/// Iterator über abgetastete Kurvenpunkte.
///
/// Klonbar: ein Klon startet an derselben Stelle neu.
#[derive(Debug, Clone)]
pub struct CurveSamples<'c> {
    curve: &'c BezierCurve<'c>,
    step: f64,
    intervals: usize,
    next: usize,
}

impl Iterator for CurveSamples<'_> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next > self.intervals {
            return None;
        }
        let t = if self.next == self.intervals {
            1.0
        } else {
            (self.next as f64 * self.step).min(1.0)
        };
        self.next += 1;
        Some(self.curve.evaluate(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.intervals.saturating_add(1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples<'_> {}

/// Evaluiert die Kurve direkt; `None` bei leerer Punktfolge.
pub fn evaluate(points: &[Vec2], t: f64) -> Option<Vec2> {
    BezierCurve::new(points).map(|curve| curve.evaluate(t))
}

/// Tastet die Kurve mit der gegebenen Schrittweite ab (leer bei leerer Punktfolge).
pub fn sample(points: &[Vec2], step: f64) -> Vec<Vec2> {
    BezierCurve::new(points)
        .map(|curve| curve.samples(step).collect())
        .unwrap_or_default()
}
