/// Alpha fixe de toutes les couleurs générées.
pub const OPAQUE: u8 = 255;

/// Une couleur RGB 8 bits par canal, alpha fixe.
///
/// `Color` est une simple valeur `Copy` : l'identité d'une entrée de la
/// collection est son index, pas ses canaux. L'état « réclamé » vit dans
/// [`crate::claim::ClaimTable`].
///
/// # Example
/// ```
/// use cg_core::color::Color;
/// let c = Color::new(10, 20, 30);
/// assert_eq!(c.to_rgba(), [10, 20, 30, 255]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Crée une couleur opaque.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: OPAQUE }
    }

    /// Distance euclidienne dans l'espace (R, G, B).
    ///
    /// Calculée en arithmétique signée : `(0, 0, 0)` → `(255, 0, 0)` vaut 255.
    ///
    /// # Example
    /// ```
    /// use cg_core::color::Color;
    /// let a = Color::new(0, 0, 0);
    /// let b = Color::new(3, 4, 0);
    /// assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(i16::from(other.r) - i16::from(self.r));
        let dg = f64::from(i16::from(other.g) - i16::from(self.g));
        let db = f64::from(i16::from(other.b) - i16::from(self.b));
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Somme additive r + g + b, sans débordement.
    ///
    /// Sert de clé au tri « brightness ».
    #[inline]
    #[must_use]
    pub fn brightness(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }

    /// Étire des canaux `0..levels` sur toute la plage `0..=255`.
    ///
    /// Chaque canal est multiplié par `256 / levels`. Pour `levels == 256`
    /// la couleur est inchangée.
    ///
    /// # Example
    /// ```
    /// use cg_core::color::Color;
    /// let c = Color::new(1, 2, 3).tone_mapped(4);
    /// assert_eq!((c.r, c.g, c.b), (64, 128, 192));
    /// ```
    #[must_use]
    pub fn tone_mapped(self, levels: u16) -> Self {
        let m = 256 / levels.max(1);
        let scale = |c: u8| (u16::from(c) * m).min(255) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Pixel RGBA prêt pour le buffer image.
    #[inline]
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_signed() {
        let a = Color::new(255, 0, 0);
        let b = Color::new(0, 0, 0);
        assert!((a.distance(&b) - 255.0).abs() < f64::EPSILON);
        assert!((b.distance(&a) - 255.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = Color::new(12, 200, 77);
        assert_eq!(c.distance(&c), 0.0);
    }

    #[test]
    fn brightness_does_not_wrap() {
        assert_eq!(Color::new(255, 255, 255).brightness(), 765);
    }

    #[test]
    fn tone_map_full_depth_is_identity() {
        let c = Color::new(17, 128, 255);
        assert_eq!(c.tone_mapped(256), c);
    }

    #[test]
    fn tone_map_spans_range() {
        // 6 bits : 64 niveaux, facteur 4
        let top = Color::new(63, 63, 63).tone_mapped(64);
        assert_eq!((top.r, top.g, top.b), (252, 252, 252));
        assert_eq!(top.a, OPAQUE);
    }
}
