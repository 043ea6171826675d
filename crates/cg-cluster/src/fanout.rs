use std::sync::Arc;
use std::thread;

use cg_core::cluster::Cluster;
use cg_core::collection::ColorCollection;
use cg_core::config::ClaimMode;
use flume::{Receiver, Sender};

use crate::clusterer::{DistanceClusterer, partition_ranges};
use crate::config::ClusterConfig;
use crate::error::ClusterError;

/// Lance `config.workers` clusterers concurrents sur la même collection.
///
/// Retourne un flux par worker. Chaque flux est un canal rendez-vous
/// (`flume::bounded(0)`) : un worker bloque sur la remise d'un cluster tant
/// que personne ne le reçoit. La fermeture du flux (drop du `Sender`) est
/// le seul signal de fin.
///
/// La réclamation démarre immédiatement et est irréversible : un second
/// appel sur la même collection est rejeté.
///
/// # Errors
/// Returns a configuration error before any thread starts, or
/// [`ClusterError::Spawn`] if the OS refuses a thread.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use cg_cluster::{config::ClusterConfig, fanout::fan_out};
/// use cg_core::{collection::ColorCollection, color::Color, config::ClaimMode};
///
/// let coll = Arc::new(ColorCollection::new(vec![Color::new(0, 0, 0); 4]));
/// let streams = fan_out(&coll, &ClusterConfig::new(0.0, 2, ClaimMode::Shared)).unwrap();
/// let total: usize = streams.iter().flat_map(|rx| rx.iter()).map(|c| c.len()).sum();
/// assert_eq!(total, 4);
/// ```
pub fn fan_out(
    collection: &Arc<ColorCollection>,
    config: &ClusterConfig,
) -> Result<Vec<Receiver<Cluster>>, ClusterError> {
    config.validate()?;
    if !collection.begin_fan_out() {
        return Err(ClusterError::AlreadyClustered);
    }

    let len = collection.len();
    let ranges = match config.mode {
        ClaimMode::Shared => vec![0..len; config.workers],
        ClaimMode::Partitioned => partition_ranges(len, config.workers),
    };
    log::info!(
        "Fan-out : {} workers ({:?}) sur {len} couleurs, seuil {}",
        config.workers,
        config.mode,
        config.threshold
    );

    let mut streams = Vec::with_capacity(ranges.len());
    for (id, range) in ranges.into_iter().enumerate() {
        let (tx, rx) = flume::bounded(0);
        let clusterer =
            DistanceClusterer::with_range(Arc::clone(collection), config.threshold, range);
        thread::Builder::new()
            .name(format!("cg-cluster-{id}"))
            .spawn(move || run_worker(id, clusterer, &tx))?;
        streams.push(rx);
    }
    Ok(streams)
}

/// Boucle d'un worker : draine son clusterer jusqu'au bout.
fn run_worker(id: usize, clusterer: DistanceClusterer, tx: &Sender<Cluster>) {
    let range = clusterer.range();
    let mut clusters = 0usize;
    let mut colors = 0usize;

    for cluster in clusterer {
        clusters += 1;
        colors += cluster.len();
        if tx.send(cluster).is_err() {
            log::debug!("Worker {id} : consommateur parti, arrêt anticipé.");
            return;
        }
    }
    log::debug!("Worker {id} ({range:?}) terminé : {clusters} clusters, {colors} couleurs.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_core::color::Color;

    fn gray_ramp(n: u8) -> Arc<ColorCollection> {
        Arc::new(ColorCollection::new((0..n).map(|v| Color::new(v, v, v)).collect()))
    }

    #[test]
    fn one_stream_per_worker() {
        let coll = gray_ramp(10);
        let streams = fan_out(&coll, &ClusterConfig::new(0.0, 3, ClaimMode::Shared)).unwrap();
        assert_eq!(streams.len(), 3);
        for rx in &streams {
            for _ in rx.iter() {}
        }
        assert_eq!(coll.claimed_count(), 10);
    }

    #[test]
    fn second_fan_out_is_rejected() {
        let coll = gray_ramp(4);
        let config = ClusterConfig::new(1.0, 1, ClaimMode::Shared);
        let streams = fan_out(&coll, &config).unwrap();
        drop(streams);
        assert!(matches!(
            fan_out(&coll, &config),
            Err(ClusterError::AlreadyClustered)
        ));
    }

    #[test]
    fn invalid_config_starts_nothing() {
        let coll = gray_ramp(4);
        let err = fan_out(&coll, &ClusterConfig::new(-2.0, 1, ClaimMode::Shared));
        assert!(matches!(err, Err(ClusterError::InvalidThreshold(_))));
        assert_eq!(coll.claimed_count(), 0);
        // La collection reste utilisable après un rejet de configuration
        assert!(fan_out(&coll, &ClusterConfig::new(2.0, 1, ClaimMode::Shared)).is_ok());
    }

    #[test]
    fn dropped_consumer_stops_workers() {
        let coll = gray_ramp(50);
        let streams = fan_out(&coll, &ClusterConfig::new(0.0, 2, ClaimMode::Shared)).unwrap();
        let first = streams[0].recv().unwrap();
        assert_eq!(first.len(), 1);
        drop(streams);
        // Les workers sortent à la remise suivante ; la collection reste
        // partiellement réclamée, sans rollback.
        assert!(coll.claimed_count() < 50);
    }
}
