/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste (einzige Taste mit Wirkung)
    Primary,
    /// Rechte Maustaste
    Secondary,
    /// Mittlere Maustaste
    Middle,
    /// Zusatztasten (Vor/Zurück)
    Other,
}

/// Taste eines Keyboard-Events, identifiziert über ihren Namen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorKey {
    Backspace,
    Delete,
    Escape,
    Tab,
    /// Jede andere Taste (Name wie vom Host geliefert)
    Other(String),
}

impl EditorKey {
    /// Ordnet einen Tastennamen zu ("Backspace", "Delete", "Escape", "Tab", sonst `Other`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "Escape" => Self::Escape,
            "Tab" => Self::Tab,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Name der Taste.
    pub fn name(&self) -> &str {
        match self {
            Self::Backspace => "Backspace",
            Self::Delete => "Delete",
            Self::Escape => "Escape",
            Self::Tab => "Tab",
            Self::Other(name) => name,
        }
    }
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeichenfläche hat (neue) Größe in Pixeln
    ViewportResized { size: [f32; 2] },
    /// Maustaste über der Zeichenfläche gedrückt (Surface-lokale Pixel)
    PointerPressed {
        pos: glam::Vec2,
        button: PointerButton,
    },
    /// Zeiger bewegt (Surface-lokale Pixel)
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Taste gedrückt
    KeyPressed { key: EditorKey },
}
