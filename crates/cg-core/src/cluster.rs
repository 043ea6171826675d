use crate::collection::ColorCollection;
use crate::color::Color;

/// Groupe de couleurs similaires : la graine en tête, puis les membres
/// réclamés dans l'ordre du scan.
///
/// Instantané immuable une fois émis. Stocke des index dans la collection
/// d'origine, l'identité d'une entrée étant son index.
///
/// # Example
/// ```
/// use cg_core::cluster::Cluster;
/// let mut cluster = Cluster::with_seed(4);
/// cluster.push(7);
/// assert_eq!(cluster.seed(), 4);
/// assert_eq!(cluster.members(), &[4, 7]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    members: Vec<usize>,
}

impl Cluster {
    #[must_use]
    pub fn with_seed(seed: usize) -> Self {
        Self {
            members: vec![seed],
        }
    }

    /// Ajoute un membre (côté clusterer uniquement, avant émission).
    pub fn push(&mut self, index: usize) {
        self.members.push(index);
    }

    #[must_use]
    pub fn seed(&self) -> usize {
        self.members[0]
    }

    /// Graine comprise, dans l'ordre de réclamation.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Toujours `false` pour un cluster construit par [`Cluster::with_seed`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Résout les index en couleurs.
    #[must_use]
    pub fn colors(&self, collection: &ColorCollection) -> Vec<Color> {
        self.members
            .iter()
            .filter_map(|&i| collection.get(i).copied())
            .collect()
    }

    #[must_use]
    pub fn into_members(self) -> Vec<usize> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_colors_in_member_order() {
        let coll = ColorCollection::new(vec![
            Color::new(0, 0, 0),
            Color::new(1, 0, 0),
            Color::new(2, 0, 0),
        ]);
        let mut cluster = Cluster::with_seed(2);
        cluster.push(0);
        let colors = cluster.colors(&coll);
        assert_eq!(colors, vec![Color::new(2, 0, 0), Color::new(0, 0, 0)]);
        assert!(!cluster.is_empty());
    }
}
