//! Slot-to-color mapping

use std::collections::BTreeMap;

use crate::{Hsl, ThemeSlot};

/// A (possibly partial) palette; a missing slot means "no value"
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ThemePalette {
    slots: BTreeMap<ThemeSlot, Hsl>,
}

impl ThemePalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ThemeSlot) -> Option<Hsl> {
        self.slots.get(&slot).copied()
    }

    pub fn set(&mut self, slot: ThemeSlot, color: Hsl) {
        self.slots.insert(slot, color);
    }

    pub fn with(mut self, slot: ThemeSlot, color: Hsl) -> Self {
        self.set(slot, color);
        self
    }

    pub fn contains(&self, slot: ThemeSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Overlay `other` on top of this palette; its slots win.
    pub fn merge(&mut self, other: &ThemePalette) {
        self.slots.extend(other.iter());
    }

    /// Slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ThemeSlot, Hsl)> + '_ {
        self.slots.iter().map(|(slot, color)| (*slot, *color))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<(ThemeSlot, Hsl)> for ThemePalette {
    fn from_iter<I: IntoIterator<Item = (ThemeSlot, Hsl)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_incoming_slots() {
        let mut base = ThemePalette::new()
            .with(ThemeSlot::Primary, Hsl::new(258.0, 36.0, 51.0))
            .with(ThemeSlot::Accent, Hsl::new(232.0, 39.0, 34.0));
        let incoming =
            ThemePalette::new().with(ThemeSlot::Primary, Hsl::new(210.0, 70.0, 55.0));

        base.merge(&incoming);

        assert_eq!(base.get(ThemeSlot::Primary), Some(Hsl::new(210.0, 70.0, 55.0)));
        assert_eq!(base.get(ThemeSlot::Accent), Some(Hsl::new(232.0, 39.0, 34.0)));
        assert_eq!(base.len(), 2);
        assert!(!base.contains(ThemeSlot::Ring));
    }

    #[test]
    fn iterates_in_slot_order() {
        let palette: ThemePalette = [
            (ThemeSlot::Ring, Hsl::default()),
            (ThemeSlot::Primary, Hsl::default()),
        ]
        .into_iter()
        .collect();
        let order: Vec<_> = palette.iter().map(|(slot, _)| slot).collect();
        assert_eq!(order, vec![ThemeSlot::Primary, ThemeSlot::Ring]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_camel_case_map() {
        let palette =
            ThemePalette::new().with(ThemeSlot::PrimaryForeground, Hsl::new(0.0, 0.0, 95.0));
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"{"primaryForeground":"0 0% 95%"}"#);
    }
}
