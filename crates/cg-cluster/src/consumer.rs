use cg_core::cluster::Cluster;
use cg_core::collection::ColorCollection;
use cg_core::color::Color;
use flume::Receiver;

/// Avancement du drainage, passé au callback de progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Couleurs reçues jusqu'ici.
    pub processed: usize,
    /// Taille de la collection d'origine.
    pub total: usize,
}

impl Progress {
    /// Pourcentage [0, 100]. Une collection vide est complète.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.processed as f64 / self.total as f64 * 100.0
    }
}

/// Résultat du contrôle de comptage post-hoc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountCheck {
    /// Chaque couleur apparaît exactement une fois.
    Complete,
    /// Le total reçu diffère de la taille d'origine.
    Mismatch { got: usize, expected: usize },
}

/// Ordre final aplati, produit par [`collect_clusters`].
///
/// Les clusters apparaissent dans leur ordre d'arrivée, les membres dans
/// l'ordre du cluster (graine en tête).
#[derive(Clone, Debug, Default)]
pub struct ClusterOutcome {
    /// Index dans la collection, dans l'ordre de rendu.
    pub order: Vec<usize>,
    /// Taille de chaque cluster, dans l'ordre d'arrivée.
    pub cluster_sizes: Vec<usize>,
    /// Taille de la collection d'origine.
    pub expected: usize,
}

impl ClusterOutcome {
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_sizes.len()
    }

    #[must_use]
    pub fn largest_cluster(&self) -> usize {
        self.cluster_sizes.iter().copied().max().unwrap_or(0)
    }

    /// Compare le total reçu à la taille d'origine.
    ///
    /// L'appelant décide quoi faire d'un écart (en pratique : un warning,
    /// l'image est écrite quand même).
    #[must_use]
    pub fn check(&self) -> CountCheck {
        if self.order.len() == self.expected {
            CountCheck::Complete
        } else {
            CountCheck::Mismatch {
                got: self.order.len(),
                expected: self.expected,
            }
        }
    }

    /// Itère sur les clusters reconstitués à partir de l'ordre aplati.
    pub fn clusters(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let mut start = 0;
        self.cluster_sizes.iter().map(move |&size| {
            let slice = &self.order[start..start + size];
            start += size;
            slice
        })
    }

    /// Résout l'ordre en couleurs.
    #[must_use]
    pub fn colors(&self, collection: &ColorCollection) -> Vec<Color> {
        self.order
            .iter()
            .filter_map(|&i| collection.get(i).copied())
            .collect()
    }
}

/// Draine le flux combiné jusqu'à sa fermeture.
///
/// Bloque tant qu'aucun cluster n'est disponible et que le flux est ouvert.
/// `on_progress` est appelé après chaque cluster.
///
/// # Example
/// ```
/// use cg_cluster::consumer::{collect_clusters, CountCheck};
/// use cg_core::cluster::Cluster;
///
/// let (tx, rx) = flume::unbounded();
/// tx.send(Cluster::with_seed(1)).unwrap();
/// drop(tx);
/// let outcome = collect_clusters(&rx, 2, |_| {});
/// assert_eq!(outcome.check(), CountCheck::Mismatch { got: 1, expected: 2 });
/// ```
pub fn collect_clusters<F>(stream: &Receiver<Cluster>, expected: usize, mut on_progress: F) -> ClusterOutcome
where
    F: FnMut(Progress),
{
    let mut outcome = ClusterOutcome {
        order: Vec::with_capacity(expected),
        cluster_sizes: Vec::new(),
        expected,
    };

    for cluster in stream.iter() {
        outcome.cluster_sizes.push(cluster.len());
        outcome.order.extend(cluster.into_members());
        on_progress(Progress {
            processed: outcome.order.len(),
            total: expected,
        });
    }
    outcome
}
