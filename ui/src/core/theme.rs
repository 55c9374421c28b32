//! Colour tokens shared by every component.
//!
//! Components only refer to the CSS custom properties emitted by
//! [`Theme::css_variables`]. `assets/theme/main.css` repeats the same values
//! in its own `:root` block as a static fallback; the desktop tests keep the
//! two in sync.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub lime_glow: &'static str,
    pub dark_bg: &'static str,
    pub dark_card: &'static str,
    pub accent: &'static str,
    pub ink: &'static str,
    pub paper: &'static str,
    pub glow_shadow: &'static str,
}

pub const THEME: Theme = Theme {
    lime_glow: "#A3FF12",
    dark_bg: "#0B0E0D",
    dark_card: "#111615",
    accent: "#C3FF00",
    ink: "#020202",
    paper: "#F5F5F5",
    glow_shadow: "0 0 40px rgba(163,255,18,0.25)",
};

impl Theme {
    /// `(custom property, value)` pairs in declaration order.
    pub fn tokens(&self) -> [(&'static str, &'static str); 7] {
        [
            ("--color-lime-glow", self.lime_glow),
            ("--color-dark-bg", self.dark_bg),
            ("--color-dark-card", self.dark_card),
            ("--color-accent", self.accent),
            ("--color-ink", self.ink),
            ("--color-paper", self.paper),
            ("--shadow-glow", self.glow_shadow),
        ]
    }

    /// A `:root { ... }` block ready to drop into a `<style>` element.
    pub fn css_variables(&self) -> String {
        let body: String = self
            .tokens()
            .iter()
            .map(|(name, value)| format!("  {name}: {value};\n"))
            .collect();
        format!(":root {{\n{body}}}\n")
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}
