use crate::color::Color;
use crate::depth::BitDepth;

/// Produit l'espace couleur complet d'une profondeur donnée.
///
/// Implémenté par : `Linear`, `Shuffled`, `Random`, `Sorted`.
///
/// # Example
/// ```
/// use cg_core::traits::ColorSpace;
/// use cg_core::color::Color;
/// use cg_core::depth::BitDepth;
///
/// struct Black;
/// impl ColorSpace for Black {
///     fn generate(&mut self, depth: BitDepth) -> Vec<Color> {
///         vec![Color::default(); depth.color_count()]
///     }
///     fn name(&self) -> &'static str { "black" }
/// }
/// ```
pub trait ColorSpace: Send {
    /// Retourne exactement `depth.color_count()` couleurs.
    ///
    /// CONTRAT : chaque triplet `(r, g, b)` de l'espace apparaît une fois.
    fn generate(&mut self, depth: BitDepth) -> Vec<Color>;

    /// Nom court, utilisé dans le nom du fichier de sortie.
    fn name(&self) -> &'static str;
}
