//! Core-Domänentypen: Bézier-Auswertung und Kontrollpunkt-Modell.
//!
//! Frei von UI- und Render-Abhängigkeiten, vollständig ohne Zeichenfläche testbar.

pub mod bezier;
pub mod point_store;

pub use bezier::{
    binomial, evaluate, pascal_row, sample, BezierCurve, CurveSamples, DEFAULT_SAMPLE_STEP,
    MIN_SAMPLE_STEP,
};
pub use point_store::{PointStore, PointStoreError, POINT_RADIUS_PX};
