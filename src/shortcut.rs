use web_sys::KeyboardEvent;

/// Keyboard shortcuts that drive a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryShortcut {
    Undo,
    Redo,
}

impl HistoryShortcut {
    /// `modifier` is Ctrl or Cmd. Ctrl+Z undoes; Ctrl+Shift+Z and Ctrl+Y redo.
    pub fn resolve(key: &str, modifier: bool, shift: bool) -> Option<Self> {
        if !modifier {
            return None;
        }
        match key {
            "z" | "Z" if shift => Some(Self::Redo),
            "z" | "Z" => Some(Self::Undo),
            "y" | "Y" if !shift => Some(Self::Redo),
            _ => None,
        }
    }

    pub fn from_event(ev: &KeyboardEvent) -> Option<Self> {
        Self::resolve(&ev.key(), ev.ctrl_key() || ev.meta_key(), ev.shift_key())
    }
}
