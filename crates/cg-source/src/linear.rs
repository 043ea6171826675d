use cg_core::color::Color;
use cg_core::depth::BitDepth;
use cg_core::traits::ColorSpace;

/// Parcourt l'espace couleur en boucles imbriquées r → g → b.
///
/// # Example
/// ```
/// use cg_source::linear::Linear;
/// use cg_core::traits::ColorSpace;
/// use cg_core::depth::BitDepth;
/// let colors = Linear::default().generate(BitDepth::new(1).unwrap());
/// assert_eq!(colors.len(), 8);
/// assert_eq!(colors[1].b, 128);
/// ```
#[derive(Default)]
pub struct Linear {
    /// Désactive le tone mapping (canaux bruts `0..levels`).
    pub raw: bool,
}

impl ColorSpace for Linear {
    fn generate(&mut self, depth: BitDepth) -> Vec<Color> {
        let levels = depth.levels();
        let ramp: Vec<u16> = (0..levels).collect();
        nested(&ramp, &ramp, &ramp, levels, !self.raw)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Boucles imbriquées sur trois séquences de valeurs de canal.
pub(crate) fn nested(rs: &[u16], gs: &[u16], bs: &[u16], levels: u16, tone_map: bool) -> Vec<Color> {
    let mut colors = Vec::with_capacity(rs.len() * gs.len() * bs.len());
    for &r in rs {
        for &g in gs {
            for &b in bs {
                colors.push(make(r, g, b, levels, tone_map));
            }
        }
    }
    colors
}

#[inline]
pub(crate) fn make(r: u16, g: u16, b: u16, levels: u16, tone_map: bool) -> Color {
    let c = Color::new(r as u8, g as u8, b as u8);
    if tone_map { c.tone_mapped(levels) } else { c }
}
