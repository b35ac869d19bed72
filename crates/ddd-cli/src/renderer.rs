//! Terminal rendering of command output
//!
//! Output from `ddd-core` is lightweight markdown (bold item kinds in
//! numbered lists). Rich mode renders it with termimad; plain mode strips the
//! emphasis markers so the text reads cleanly in pipes and tests.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Cyan);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{}", Self::plain(markdown));
        }
    }

    /// Markdown with emphasis markers removed.
    fn plain(markdown: &str) -> String {
        markdown.replace("**", "")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_plain_strips_emphasis() {
        assert_eq!(
            TerminalRenderer::plain("1. **[Contact]** Alice Tan\n"),
            "1. [Contact] Alice Tan\n"
        );
    }
}
