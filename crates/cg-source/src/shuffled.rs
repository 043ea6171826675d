use cg_core::color::Color;
use cg_core::depth::BitDepth;
use cg_core::traits::ColorSpace;

use crate::linear::make;

/// Boucles imbriquées où chaque boucle parcourt une permutation fraîche des
/// valeurs de canal. Le résultat forme des bandes.
///
/// # Example
/// ```
/// use cg_source::shuffled::Shuffled;
/// use cg_core::traits::ColorSpace;
/// use cg_core::depth::BitDepth;
/// let colors = Shuffled::new(Some(7)).generate(BitDepth::new(2).unwrap());
/// assert_eq!(colors.len(), 64);
/// ```
pub struct Shuffled {
    rng: fastrand::Rng,
}

impl Shuffled {
    /// `seed = None` → graine système.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed),
        }
    }

    fn perm(&mut self, levels: u16) -> Vec<u16> {
        let mut values: Vec<u16> = (0..levels).collect();
        self.rng.shuffle(&mut values);
        values
    }
}

impl ColorSpace for Shuffled {
    fn generate(&mut self, depth: BitDepth) -> Vec<Color> {
        let levels = depth.levels();
        let mut colors = Vec::with_capacity(depth.color_count());
        for r in self.perm(levels) {
            for g in self.perm(levels) {
                for b in self.perm(levels) {
                    colors.push(make(r, g, b, levels, true));
                }
            }
        }
        colors
    }

    fn name(&self) -> &'static str {
        "shuffled"
    }
}

/// Espace couleur complètement mélangé (Fisher–Yates sur la sortie de
/// [`Shuffled`]). Produit du bruit.
pub struct Random {
    inner: Shuffled,
}

impl Random {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            inner: Shuffled::new(seed),
        }
    }
}

impl ColorSpace for Random {
    fn generate(&mut self, depth: BitDepth) -> Vec<Color> {
        let mut colors = self.inner.generate(depth);
        self.inner.rng.shuffle(&mut colors);
        colors
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
