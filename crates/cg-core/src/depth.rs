use crate::error::CoreError;

/// Profondeur max par canal (8 bits → 256 niveaux).
pub const MAX_BITS: u8 = 8;

/// Nombre de bits par canal, validé dans `1..=8`.
///
/// # Example
/// ```
/// use cg_core::depth::BitDepth;
/// let depth = BitDepth::new(6).unwrap();
/// assert_eq!(depth.levels(), 64);
/// assert_eq!(depth.color_count(), 262_144);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitDepth(u8);

impl BitDepth {
    /// # Errors
    /// Returns [`CoreError::InvalidDepth`] outside `1..=8`.
    pub fn new(bits: u8) -> Result<Self, CoreError> {
        if (1..=MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(CoreError::InvalidDepth { bits })
        }
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Valeurs possibles par canal : `2^bits`.
    #[inline]
    #[must_use]
    pub fn levels(self) -> u16 {
        1u16 << self.0
    }

    /// Taille de l'espace couleur complet : `levels^3`.
    #[inline]
    #[must_use]
    pub fn color_count(self) -> usize {
        let l = usize::from(self.levels());
        l * l * l
    }
}
