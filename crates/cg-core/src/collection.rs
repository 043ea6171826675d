use std::sync::atomic::{AtomicBool, Ordering};

use crate::claim::ClaimTable;
use crate::color::Color;

/// Collection ordonnée et de taille fixe, partagée entre les workers.
///
/// Les couleurs ne changent jamais après construction ; seul l'état de
/// réclamation de chaque entrée évolue, via la [`ClaimTable`] associée.
///
/// # Example
/// ```
/// use cg_core::collection::ColorCollection;
/// use cg_core::color::Color;
/// let coll = ColorCollection::new(vec![Color::new(0, 0, 0), Color::new(1, 1, 1)]);
/// assert_eq!(coll.len(), 2);
/// assert!(coll.try_claim(0));
/// assert_eq!(coll.claimed_count(), 1);
/// ```
pub struct ColorCollection {
    colors: Vec<Color>,
    claims: ClaimTable,
    /// Passe à `true` au premier fan-out. Un second run est invalide.
    fanned_out: AtomicBool,
}

impl ColorCollection {
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        let claims = ClaimTable::new(colors.len());
        Self {
            colors,
            claims,
            fanned_out: AtomicBool::new(false),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    #[must_use]
    pub fn claims(&self) -> &ClaimTable {
        &self.claims
    }

    /// Raccourci vers [`ClaimTable::try_claim`].
    #[inline]
    #[must_use]
    pub fn try_claim(&self, index: usize) -> bool {
        self.claims.try_claim(index)
    }

    #[inline]
    #[must_use]
    pub fn is_claimed(&self, index: usize) -> bool {
        self.claims.is_claimed(index)
    }

    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claims.claimed_count()
    }

    /// Marque le début du fan-out. Retourne `false` si un run a déjà eu lieu.
    #[must_use]
    pub fn begin_fan_out(&self) -> bool {
        !self.fanned_out.swap(true, Ordering::AcqRel)
    }

    /// Consomme la collection et rend les couleurs dans leur ordre d'origine.
    #[must_use]
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl From<Vec<Color>> for ColorCollection {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_is_one_shot() {
        let coll = ColorCollection::new(vec![Color::new(1, 2, 3)]);
        assert!(coll.begin_fan_out());
        assert!(!coll.begin_fan_out());
    }

    #[test]
    fn identical_channels_are_distinct_entries() {
        let c = Color::new(9, 9, 9);
        let coll = ColorCollection::from(vec![c, c]);
        assert!(coll.try_claim(0));
        assert!(!coll.is_claimed(1));
        assert!(coll.try_claim(1));
    }
}
