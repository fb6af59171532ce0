//! Style variable targets
//!
//! A [`StyleTarget`] is the document-level set of CSS custom properties the
//! presentation layer reads. Inline values shadow the base stylesheet; the
//! theme session only ever touches the inline layer.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tinct_model::StyleVar;

#[cfg_attr(test, mockall::automock)]
pub trait StyleTarget {
    /// Effective value: inline override if present, else the stylesheet's
    fn computed(&self, var: StyleVar) -> Option<String>;

    /// Inline override only
    fn inline(&self, var: StyleVar) -> Option<String>;

    fn set_inline(&mut self, var: StyleVar, value: String);

    fn remove_inline(&mut self, var: StyleVar);
}

/// In-memory stand-in for a document's style variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStyleSheet {
    base: BTreeMap<StyleVar, String>,
    inline: BTreeMap<StyleVar, String>,
}

impl InMemoryStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stylesheet seeded with base values, no inline overrides
    pub fn with_base(
        base: impl IntoIterator<Item = (StyleVar, String)>,
    ) -> Self {
        Self {
            base: base.into_iter().collect(),
            inline: BTreeMap::new(),
        }
    }

    pub fn set_base(&mut self, var: StyleVar, value: impl Into<String>) {
        self.base.insert(var, value.into());
    }

    pub fn base(&self, var: StyleVar) -> Option<&str> {
        self.base.get(&var).map(String::as_str)
    }

    pub fn has_inline_overrides(&self) -> bool {
        !self.inline.is_empty()
    }

    pub fn inline_vars(&self) -> impl Iterator<Item = StyleVar> + '_ {
        self.inline.keys().copied()
    }

    /// Every variable with an effective value, inline winning over base
    pub fn computed_vars(&self) -> BTreeMap<StyleVar, String> {
        let mut vars = self.base.clone();
        vars.extend(
            self.inline
                .iter()
                .map(|(var, value)| (*var, value.clone())),
        );
        vars
    }

    /// Computed variables as a `:root { ... }` block
    pub fn render_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (var, value) in self.computed_vars() {
            let _ = writeln!(css, "  {}: {};", var.css_var(), value);
        }
        css.push_str("}\n");
        css
    }

    /// Computed variables keyed by CSS name
    pub fn to_json(&self) -> serde_json::Value {
        self.computed_vars()
            .into_iter()
            .map(|(var, value)| {
                (var.css_var().to_string(), serde_json::Value::String(value))
            })
            .collect::<serde_json::Map<_, _>>()
            .into()
    }
}

impl StyleTarget for InMemoryStyleSheet {
    fn computed(&self, var: StyleVar) -> Option<String> {
        self.inline
            .get(&var)
            .or_else(|| self.base.get(&var))
            .cloned()
    }

    fn inline(&self, var: StyleVar) -> Option<String> {
        self.inline.get(&var).cloned()
    }

    fn set_inline(&mut self, var: StyleVar, value: String) {
        self.inline.insert(var, value);
    }

    fn remove_inline(&mut self, var: StyleVar) {
        self.inline.remove(&var);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_model::ThemeSlot;

    fn sheet() -> InMemoryStyleSheet {
        InMemoryStyleSheet::with_base([
            (StyleVar::Slot(ThemeSlot::Primary), "258 36% 51%".to_string()),
            (StyleVar::Radius, "0.5rem".to_string()),
        ])
    }

    #[test]
    fn inline_shadows_base() {
        let mut sheet = sheet();
        let primary = StyleVar::Slot(ThemeSlot::Primary);
        sheet.set_inline(primary, "210 70% 55%".into());

        assert_eq!(sheet.computed(primary).as_deref(), Some("210 70% 55%"));
        assert_eq!(sheet.base(primary), Some("258 36% 51%"));

        sheet.remove_inline(primary);
        assert_eq!(sheet.computed(primary).as_deref(), Some("258 36% 51%"));
        assert!(!sheet.has_inline_overrides());
    }

    #[test]
    fn renders_computed_variables_in_order() {
        let mut sheet = sheet();
        sheet.set_inline(StyleVar::FontFamily, "Georgia, serif".into());

        assert_eq!(
            sheet.render_css(),
            ":root {\n  --primary: 258 36% 51%;\n  --radius: 0.5rem;\n  \
             --font-family: Georgia, serif;\n}\n"
        );
        assert_eq!(sheet.to_json()["--radius"], "0.5rem");
    }
}
