//! Keyboard shortcut registry and documentation.

use polysketch_core::CanvasMode;

/// What a shortcut does when pressed over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SetMode(CanvasMode),
    FinishPolygon,
    CancelDrag,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: ShortcutAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, action: ShortcutAction, description: &'static str) -> Self {
        Self {
            key,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "[Enter]").
    pub fn format(&self) -> String {
        format!("[{}]", self.key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        let mut shortcuts: Vec<Shortcut> = CanvasMode::ALL
            .iter()
            .zip(["1", "2", "3", "4", "5"])
            .map(|(&mode, key)| Shortcut::new(key, ShortcutAction::SetMode(mode), mode.label()))
            .collect();
        shortcuts.push(Shortcut::new(
            "Enter",
            ShortcutAction::FinishPolygon,
            "Finish polygon",
        ));
        shortcuts.push(Shortcut::new(
            "Escape",
            ShortcutAction::CancelDrag,
            "Cancel current drag",
        ));
        shortcuts
    }

    /// Look up the action bound to a key name.
    pub fn find(key: &str) -> Option<ShortcutAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.key.eq_ignore_ascii_case(key))
            .map(|shortcut| shortcut.action)
    }

    /// Key name of the shortcut that switches to `mode`.
    pub fn key_for_mode(mode: CanvasMode) -> Option<&'static str> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.action == ShortcutAction::SetMode(mode))
            .map(|shortcut| shortcut.key)
    }

    /// One-line summary for the start-up log.
    pub fn summary() -> String {
        Self::all()
            .iter()
            .map(|shortcut| format!("{}={}", shortcut.key, shortcut.description))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:10} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_select_modes_in_order() {
        for (i, mode) in CanvasMode::ALL.iter().enumerate() {
            let key = (i + 1).to_string();
            assert_eq!(
                ShortcutRegistry::find(&key),
                Some(ShortcutAction::SetMode(*mode))
            );
        }
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            ShortcutRegistry::find("Enter"),
            Some(ShortcutAction::FinishPolygon)
        );
        assert_eq!(
            ShortcutRegistry::find("escape"),
            Some(ShortcutAction::CancelDrag)
        );
        assert_eq!(ShortcutRegistry::find("6"), None);
    }

    #[test]
    fn test_key_for_mode() {
        assert_eq!(ShortcutRegistry::key_for_mode(CanvasMode::Bezier), Some("3"));
        assert_eq!(
            ShortcutRegistry::key_for_mode(CanvasMode::MouseRotate),
            Some("5")
        );
    }

    #[test]
    fn test_format_and_summary() {
        let shortcut = Shortcut::new("Enter", ShortcutAction::FinishPolygon, "Finish polygon");
        assert_eq!(shortcut.format(), "[Enter]");
        assert!(ShortcutRegistry::summary().starts_with("1=Create polygon"));
    }
}
