use cg_core::color::Color;
use cg_core::depth::BitDepth;
use cg_core::traits::ColorSpace;
use rayon::prelude::*;

use crate::linear::Linear;

/// Sortie de [`Linear`] triée (tri stable) par luminosité additive r + g + b.
///
/// # Example
/// ```
/// use cg_source::sorted::Sorted;
/// use cg_core::traits::ColorSpace;
/// use cg_core::depth::BitDepth;
/// let colors = Sorted.generate(BitDepth::new(2).unwrap());
/// assert!(colors.windows(2).all(|w| w[0].brightness() <= w[1].brightness()));
/// ```
pub struct Sorted;

impl ColorSpace for Sorted {
    fn generate(&mut self, depth: BitDepth) -> Vec<Color> {
        let mut colors = Linear::default().generate(depth);
        // par_sort_by_key est stable : l'ordre linéaire départage les égalités
        colors.par_sort_by_key(Color::brightness);
        colors
    }

    fn name(&self) -> &'static str {
        "sorted"
    }
}
