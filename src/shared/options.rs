//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DEFAULT_SAMPLE_STEP, MIN_SAMPLE_STEP, POINT_RADIUS_PX};
use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Pick-Radius für Klick-Treffer auf Kontrollpunkte (Pixel).
pub const HIT_RADIUS_PX: f32 = POINT_RADIUS_PX;
/// Schriftgröße der Positions-Labels (≈ 11pt).
pub const LABEL_FONT_SIZE_PX: f32 = 15.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Radius der Kurvenpunkte (Pixel).
pub const CURVE_DOT_RADIUS_PX: f32 = 1.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund der Zeichenfläche (RGBA: Dunkelgrau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.12, 0.12, 0.12, 1.0];
/// Farbe der abgetasteten Kurve (RGBA: #eeeeee).
pub const CURVE_COLOR: [f32; 4] = [0.933, 0.933, 0.933, 1.0];
/// Akzentfarbe (RGBA: #c75804): Füllung selektierter Punkte, Label normaler Punkte.
pub const ACCENT_COLOR: [f32; 4] = [0.780, 0.345, 0.016, 1.0];
/// Neutrale Farbe (RGBA: Weiß): Füllung normaler Punkte, Label selektierter Punkte.
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Darstellungsradius der Kontrollpunkte
    pub point_radius_px: f32,
    /// Hitbox-Radius für Klick und Drag
    pub hit_radius_px: f32,
    /// Schriftgröße der 1-basierten Labels
    pub label_font_size_px: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Schrittweite im Parameterraum (0.001 = 1001 Samples)
    pub sample_step: f64,
    /// Radius der Kurvenpunkte
    pub curve_dot_radius_px: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Kurvenfarbe
    pub curve_color: [f32; 4],
    /// Akzentfarbe
    pub accent_color: [f32; 4],
    /// Neutrale Punktfarbe
    pub point_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius_px: POINT_RADIUS_PX,
            hit_radius_px: HIT_RADIUS_PX,
            label_font_size_px: LABEL_FONT_SIZE_PX,

            sample_step: DEFAULT_SAMPLE_STEP,
            curve_dot_radius_px: CURVE_DOT_RADIUS_PX,

            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            accent_color: ACCENT_COLOR,
            point_color: POINT_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Ersetzt unbrauchbare Größen (≤ 0, NaN) durch Standardwerte.
    ///
    /// Die Schrittweite muss in `[MIN_SAMPLE_STEP, 1]` liegen.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Ungültiger Optionswert {value}, verwende {fallback}");
                fallback
            }
        };

        self.point_radius_px = fix(self.point_radius_px, defaults.point_radius_px);
        self.hit_radius_px = fix(self.hit_radius_px, defaults.hit_radius_px);
        self.label_font_size_px = fix(self.label_font_size_px, defaults.label_font_size_px);
        self.curve_dot_radius_px = fix(self.curve_dot_radius_px, defaults.curve_dot_radius_px);

        if !(MIN_SAMPLE_STEP..=1.0).contains(&self.sample_step) {
            log::warn!(
                "Ungültige Schrittweite {}, verwende {}",
                self.sample_step,
                defaults.sample_step
            );
            self.sample_step = defaults.sample_step;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_accent_and_point_colors() {
        let opts = EditorOptions::default();
        assert_eq!(opts.point_radius_px, 15.0);
        assert_eq!(opts.hit_radius_px, 15.0);
        assert_eq!(opts.sample_step, 0.001);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts = EditorOptions::from_toml_str("hit_radius_px = 20.0\n")
            .expect("Gültiges TOML erwartet");

        assert_eq!(opts.hit_radius_px, 20.0);
        assert_eq!(opts.point_radius_px, POINT_RADIUS_PX);
        assert_eq!(opts.accent_color, ACCENT_COLOR);
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let opts = EditorOptions::from_toml_str("point_radius_px = -3.0\nsample_step = 0.0\n")
            .expect("Gültiges TOML erwartet");

        assert_eq!(opts.point_radius_px, POINT_RADIUS_PX);
        assert_eq!(opts.sample_step, DEFAULT_SAMPLE_STEP);
    }

    #[test]
    fn test_tiny_sample_step_falls_back_to_default() {
        let opts = EditorOptions::from_toml_str("sample_step = 1e-30\n")
            .expect("Gültiges TOML erwartet");
        assert_eq!(opts.sample_step, DEFAULT_SAMPLE_STEP);

        let opts = EditorOptions::from_toml_str("sample_step = 1e-6\n")
            .expect("Gültiges TOML erwartet");
        assert_eq!(opts.sample_step, MIN_SAMPLE_STEP);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(EditorOptions::from_toml_str("hit_radius_px = \"gross\"").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("bezier_curve_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
