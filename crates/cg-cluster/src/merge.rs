use std::thread;

use flume::{Receiver, Sender};

use crate::error::ClusterError;

/// Fusionne N flux en un seul (fan-in avec barrière).
///
/// Un thread par entrée draine son flux et transfère chaque élément, tel
/// quel, vers un canal rendez-vous commun. Un thread coordinateur attend
/// tous les transferts avant de lâcher le dernier `Sender` : le flux
/// combiné se ferme exactement une fois, après la fermeture de toutes les
/// entrées et la remise de tout ce qui y a été lu.
///
/// Aucun ordre garanti entre entrées, aucune déduplication.
///
/// # Errors
/// Returns [`ClusterError::Spawn`] if a forwarder or the coordinator cannot
/// be spawned.
///
/// # Example
/// ```
/// use cg_cluster::merge::merge;
/// let (tx_a, rx_a) = flume::unbounded();
/// let (tx_b, rx_b) = flume::unbounded();
/// tx_a.send(1).unwrap();
/// tx_b.send(2).unwrap();
/// drop((tx_a, tx_b));
/// let mut all: Vec<i32> = merge(vec![rx_a, rx_b]).unwrap().iter().collect();
/// all.sort_unstable();
/// assert_eq!(all, vec![1, 2]);
/// ```
pub fn merge<T: Send + 'static>(inputs: Vec<Receiver<T>>) -> Result<Receiver<T>, ClusterError> {
    let (tx, rx) = flume::bounded(0);
    let count = inputs.len();

    let mut forwarders = Vec::with_capacity(count);
    for (id, input) in inputs.into_iter().enumerate() {
        let out = tx.clone();
        let handle = thread::Builder::new()
            .name(format!("cg-merge-{id}"))
            .spawn(move || forward(&input, &out))?;
        forwarders.push(handle);
    }

    thread::Builder::new()
        .name("cg-merge-join".to_string())
        .spawn(move || {
            let mut forwarded = 0usize;
            for (id, handle) in forwarders.into_iter().enumerate() {
                match handle.join() {
                    Ok(n) => forwarded += n,
                    Err(_) => log::error!("Forwarder {id} a paniqué, son flux est tronqué."),
                }
            }
            // Dernier Sender : le flux combiné se ferme ici et nulle part ailleurs.
            drop(tx);
            log::debug!("Fusion terminée : {count} flux, {forwarded} éléments transférés.");
        })?;

    Ok(rx)
}

/// Transfère `input` vers `out` jusqu'à fermeture de l'un des deux.
fn forward<T>(input: &Receiver<T>, out: &Sender<T>) -> usize {
    let mut n = 0;
    for item in input.iter() {
        if out.send(item).is_err() {
            break;
        }
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[test]
    fn no_inputs_closes_immediately() {
        let rx = merge::<u32>(Vec::new()).unwrap();
        assert!(rx.recv().is_err());
    }

    #[test]
    fn forwards_everything_from_every_input() {
        let mut inputs = Vec::new();
        for base in 0..5u32 {
            let (tx, rx) = flume::bounded(0);
            thread::spawn(move || {
                for i in 0..20 {
                    if tx.send(base * 100 + i).is_err() {
                        return;
                    }
                }
            });
            inputs.push(rx);
        }
        let mut all: Vec<u32> = merge(inputs).unwrap().iter().collect();
        all.sort_unstable();
        let expected: Vec<u32> = (0..5).flat_map(|b| (0..20).map(move |i| b * 100 + i)).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn waits_for_slow_producer() {
        let slow_done = Arc::new(AtomicBool::new(false));

        let (fast_tx, fast_rx) = flume::bounded(0);
        thread::spawn(move || {
            let _ = fast_tx.send("fast");
        });

        let (slow_tx, slow_rx) = flume::bounded(0);
        let done = Arc::clone(&slow_done);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(150));
            let _ = slow_tx.send("slow");
            thread::sleep(Duration::from_millis(100));
            done.store(true, Ordering::SeqCst);
        });

        let merged = merge(vec![fast_rx, slow_rx]).unwrap();
        let mut seen = Vec::new();
        while let Ok(item) = merged.recv() {
            seen.push(item);
        }
        // Fermeture seulement après la fin du producteur lent
        assert!(slow_done.load(Ordering::SeqCst));
        seen.sort_unstable();
        assert_eq!(seen, vec!["fast", "slow"]);
    }

    #[test]
    fn dropped_consumer_unblocks_forwarders() {
        let (tx, rx) = flume::bounded(0);
        let producer = thread::spawn(move || {
            let mut sent = 0;
            while tx.send(sent).is_ok() {
                sent += 1;
            }
            sent
        });
        let merged = merge(vec![rx]).unwrap();
        assert_eq!(merged.recv().unwrap(), 0);
        drop(merged);
        // Le producteur finit par voir son canal fermé
        assert!(producer.join().unwrap() >= 1);
    }
}
