use thiserror::Error;

/// Errors originating from the clustering pipeline.
///
/// Toutes sont levées avant ou pendant le démarrage des threads : une fois
/// le fan-out lancé, aucune erreur n'est remontée (seul le contrôle de
/// comptage côté consommateur signale une anomalie).
#[derive(Error, Debug)]
pub enum ClusterError {
    /// Worker count must be at least one.
    #[error("Nombre de workers invalide : {0} (attendu ≥ 1)")]
    InvalidWorkers(usize),

    /// Threshold must be a non-negative number.
    #[error("Seuil de distance invalide : {0} (attendu ≥ 0)")]
    InvalidThreshold(f64),

    /// The collection's claim table has already been consumed by a run.
    #[error("Collection déjà clusterisée : un seul fan-out par collection")]
    AlreadyClustered,

    /// OS refused to spawn a worker thread.
    #[error("Impossible de spawner un thread : {0}")]
    Spawn(#[from] std::io::Error),
}
