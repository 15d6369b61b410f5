/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Signalisiert dem Host, dass die Zeichenfläche neu gezeichnet werden muss
    pub redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            redraw_requested: false,
        }
    }
}
