use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

use cg_core::cluster::Cluster;
use cg_core::collection::ColorCollection;

/// Clusterer glouton par distance, sous forme d'itérateur paresseux.
///
/// Parcourt sa plage de la collection ; chaque entrée encore libre qu'il
/// parvient à réclamer devient la graine d'un cluster, qui absorbe ensuite
/// toutes les entrées libres à distance strictement inférieure au seuil.
///
/// Plusieurs instances peuvent tourner en même temps sur la même
/// collection : une réclamation perdue est simplement ignorée. L'itérateur
/// se termine quand le scan externe atteint la fin de la plage. Il n'est
/// pas redémarrable.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use cg_cluster::clusterer::DistanceClusterer;
/// use cg_core::collection::ColorCollection;
/// use cg_core::color::Color;
///
/// let coll = Arc::new(ColorCollection::new(vec![
///     Color::new(0, 0, 0),
///     Color::new(0, 0, 1),
///     Color::new(200, 0, 0),
/// ]));
/// let clusters: Vec<_> = DistanceClusterer::new(coll, 2.0).collect();
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[0].members(), &[0, 1]);
/// ```
pub struct DistanceClusterer {
    collection: Arc<ColorCollection>,
    threshold: f64,
    range: Range<usize>,
    cursor: usize,
}

impl DistanceClusterer {
    /// Clusterer couvrant toute la collection.
    #[must_use]
    pub fn new(collection: Arc<ColorCollection>, threshold: f64) -> Self {
        let len = collection.len();
        Self::with_range(collection, threshold, 0..len)
    }

    /// Clusterer limité à `range` (graines et membres). La plage est
    /// tronquée à la taille de la collection.
    #[must_use]
    pub fn with_range(collection: Arc<ColorCollection>, threshold: f64, range: Range<usize>) -> Self {
        let end = range.end.min(collection.len());
        let start = range.start.min(end);
        Self {
            collection,
            threshold,
            range: start..end,
            cursor: start,
        }
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Second scan : réclame chaque entrée libre proche de la graine.
    ///
    /// La graine reste réclamée pendant tout le scan ; seules les entrées de
    /// `self.range` sont candidates.
    fn grow(&self, seed: usize) -> Cluster {
        let colors = self.collection.colors();
        let origin = colors[seed];
        let mut cluster = Cluster::with_seed(seed);

        for (offset, candidate) in colors[self.range.clone()].iter().enumerate() {
            let index = self.range.start + offset;
            if index == seed || self.collection.is_claimed(index) {
                continue;
            }
            if origin.distance(candidate) < self.threshold && self.collection.try_claim(index) {
                cluster.push(index);
            }
        }
        cluster
    }
}

impl Iterator for DistanceClusterer {
    type Item = Cluster;

    fn next(&mut self) -> Option<Cluster> {
        while self.cursor < self.range.end {
            let index = self.cursor;
            self.cursor += 1;

            // Perdre la course ici n'est pas une erreur : un autre worker a
            // pris la couleur entre le test et la réclamation.
            if self.collection.is_claimed(index) || !self.collection.try_claim(index) {
                continue;
            }
            return Some(self.grow(index));
        }
        None
    }
}

impl FusedIterator for DistanceClusterer {}

/// Découpe `0..len` en `workers` plages contiguës et disjointes.
///
/// Les plages couvrent tout l'intervalle ; certaines sont vides si
/// `workers > len`.
///
/// # Example
/// ```
/// use cg_cluster::clusterer::partition_ranges;
/// assert_eq!(partition_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// ```
#[must_use]
pub fn partition_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    (0..workers)
        .map(|i| (i * len / workers)..((i + 1) * len / workers))
        .collect()
}
