//! Geordnete Kontrollpunkt-Folge mit optionaler Einzelselektion.

use glam::Vec2;
use thiserror::Error;

/// Darstellungs- und Hitbox-Radius eines Kontrollpunkts in Pixeln.
pub const POINT_RADIUS_PX: f32 = 15.0;

/// Fehler bei indexbasierten Zugriffen auf den PointStore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointStoreError {
    /// Index liegt nicht in `[0, count)`
    #[error("Index {index} außerhalb des gültigen Bereichs (Anzahl Punkte: {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Kontrollpunkte in Einfügereihenfolge plus Selektion.
///
/// Invariante: `selected` ist `None` oder ein gültiger Index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    points: Vec<Vec2>,
    selected: Option<usize>,
}

impl PointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Punkt an. Die Selektion bleibt unverändert.
    pub fn add(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Ersetzt den Punkt an `index`.
    pub fn update(&mut self, index: usize, point: Vec2) -> Result<(), PointStoreError> {
        self.check_index(index)?;
        self.points[index] = point;
        Ok(())
    }

    /// Entfernt den Punkt an `index` und gibt ihn zurück.
    ///
    /// Nachfolgende Punkte rücken auf. Zeigte die Selektion auf den gelöschten
    /// Punkt, wird sie aufgehoben; zeigte sie dahinter, wandert sie mit.
    pub fn delete_at(&mut self, index: usize) -> Result<Vec2, PointStoreError> {
        self.check_index(index)?;
        let removed = self.points.remove(index);

        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };

        Ok(removed)
    }

    /// Setzt oder entfernt die Selektion. Ungültige Indizes werden abgelehnt.
    pub fn set_selected(&mut self, index: Option<usize>) -> Result<(), PointStoreError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        self.selected = index;
        Ok(())
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Aktuell selektierter Index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Position des selektierten Punkts.
    pub fn selected_point(&self) -> Option<Vec2> {
        self.selected.and_then(|i| self.points.get(i).copied())
    }

    /// Index des ersten Punkts (kleinster Index) im Abstand `<= radius`.
    pub fn hit_test(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.distance(pos) <= radius)
    }

    /// Punkt an `index`.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Alle Punkte in Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grad der Kurve (`None` ohne Punkte).
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    fn check_index(&self, index: usize) -> Result<(), PointStoreError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(PointStoreError::IndexOutOfRange {
                index,
                count: self.points.len(),
            })
        }
    }
}
