/// Dimensions de la grille qui accueille l'espace couleur.
///
/// Un espace `levels^3` est un carré parfait quand la profondeur est paire
/// (6 bits → 512×512). Pour une profondeur impaire, `2^(3b)` n'a pas de
/// racine entière : la grille devient un rectangle 2:1 exact
/// (5 bits → 256×128), sans perdre de couleur.
///
/// # Example
/// ```
/// use cg_render::layout::GridLayout;
/// assert_eq!(GridLayout::for_count(262_144), GridLayout { width: 512, height: 512 });
/// assert_eq!(GridLayout::for_count(32_768), GridLayout { width: 256, height: 128 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub width: u32,
    pub height: u32,
}

impl GridLayout {
    /// Grille la plus carrée possible contenant `count` cellules.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            return Self {
                width: 0,
                height: 0,
            };
        }
        let side = count.isqrt();
        if side * side == count {
            return Self::from_usize(side, side);
        }
        if count.is_power_of_two() {
            // 2^k, k impair : largeur 2^((k+1)/2), hauteur 2^((k-1)/2)
            let k = count.trailing_zeros();
            return Self::from_usize(1 << k.div_ceil(2), 1 << (k / 2));
        }
        let width = side + 1;
        Self::from_usize(width, count.div_ceil(width))
    }

    fn from_usize(width: usize, height: usize) -> Self {
        Self {
            width: width as u32,
            height: height as u32,
        }
    }

    /// Nombre de cellules.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Index de couleur du pixel `(x, y)`, row-major.
    #[inline]
    #[must_use]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_depths_are_square() {
        for bits in [2u32, 4, 6, 8] {
            let count = 1usize << (3 * bits);
            let layout = GridLayout::for_count(count);
            assert_eq!(layout.width, layout.height);
            assert_eq!(layout.cells(), count);
        }
    }

    #[test]
    fn odd_depths_fit_exactly() {
        for bits in [1u32, 3, 5, 7] {
            let count = 1usize << (3 * bits);
            let layout = GridLayout::for_count(count);
            assert_eq!(layout.cells(), count, "{bits} bits");
            assert_eq!(layout.width, layout.height * 2);
        }
    }

    #[test]
    fn arbitrary_counts_have_room() {
        let layout = GridLayout::for_count(10);
        assert!(layout.cells() >= 10);
        assert_eq!(layout.index(1, 1), layout.width as usize + 1);
    }
}
