//! Concurrent similarity clustering for chromagrid.
//!
//! N [`clusterer::DistanceClusterer`] workers race over one shared
//! [`ColorCollection`], claiming entries through its claim table. Their
//! streams are fanned in by [`merge::merge`] and drained by
//! [`consumer::collect_clusters`].

pub mod clusterer;
pub mod config;
pub mod consumer;
pub mod error;
pub mod fanout;
pub mod merge;

use std::sync::Arc;

use cg_core::collection::ColorCollection;

pub use config::ClusterConfig;
pub use consumer::{ClusterOutcome, CountCheck, Progress};
pub use error::ClusterError;

/// Pipeline complet : fan-out → fusion → drainage.
///
/// Retourne quand le flux combiné est fermé, c'est-à-dire quand tous les
/// workers ont terminé. Le contrôle de comptage est laissé à l'appelant
/// via [`ClusterOutcome::check`].
///
/// # Errors
/// Returns a [`ClusterError`] if the configuration is invalid, the
/// collection was already clustered, or a thread cannot be spawned.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use cg_cluster::{cluster_colors, ClusterConfig, CountCheck};
/// use cg_core::{collection::ColorCollection, color::Color, config::ClaimMode};
///
/// let coll = Arc::new(ColorCollection::new(vec![Color::new(1, 2, 3); 16]));
/// let outcome = cluster_colors(&coll, &ClusterConfig::new(1.0, 4, ClaimMode::Shared), |_| {}).unwrap();
/// assert_eq!(outcome.check(), CountCheck::Complete);
/// ```
pub fn cluster_colors<F>(
    collection: &Arc<ColorCollection>,
    config: &ClusterConfig,
    on_progress: F,
) -> Result<ClusterOutcome, ClusterError>
where
    F: FnMut(Progress),
{
    let streams = fanout::fan_out(collection, config)?;
    let combined = merge::merge(streams)?;
    let outcome = consumer::collect_clusters(&combined, collection.len(), on_progress);
    log::info!(
        "Clustering terminé : {} clusters, {} couleurs (plus grand : {}).",
        outcome.cluster_count(),
        outcome.order.len(),
        outcome.largest_cluster()
    );
    Ok(outcome)
}
