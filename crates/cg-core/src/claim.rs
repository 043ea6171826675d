use std::sync::atomic::{AtomicBool, Ordering};

/// Table de réclamation : index stable → état atomique « réclamé ».
///
/// Chaque entrée passe au plus une fois de `false` à `true` et ne revient
/// jamais en arrière. Aucun verrou global : la seule synchronisation est le
/// compare-exchange par entrée.
///
/// `Send + Sync` : partageable via `Arc`.
///
/// # Example
/// ```
/// use cg_core::claim::ClaimTable;
/// let table = ClaimTable::new(3);
/// assert!(table.try_claim(1));
/// assert!(!table.try_claim(1));
/// assert_eq!(table.claimed_count(), 1);
/// ```
pub struct ClaimTable {
    slots: Vec<AtomicBool>,
}

impl ClaimTable {
    /// Crée une table de `len` entrées, toutes libres.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Tente de réclamer l'entrée `index`.
    ///
    /// Retourne `true` ssi cet appel a effectué la transition libre → réclamé.
    /// Un index hors bornes n'est jamais réclamable.
    #[inline]
    #[must_use]
    pub fn try_claim(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| {
            slot.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
        })
    }

    /// `true` si l'entrée a déjà été réclamée (ou est hors bornes).
    #[inline]
    #[must_use]
    pub fn is_claimed(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .is_none_or(|slot| slot.load(Ordering::Acquire))
    }

    /// Nombre d'entrées réclamées à l'instant de l'appel.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.load(Ordering::Acquire))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    #[test]
    fn claim_is_one_way() {
        let table = ClaimTable::new(2);
        assert!(!table.is_claimed(0));
        assert!(table.try_claim(0));
        assert!(table.is_claimed(0));
        assert!(!table.try_claim(0));
        assert!(!table.is_claimed(1));
    }

    #[test]
    fn out_of_bounds_never_claims() {
        let table = ClaimTable::new(1);
        assert!(!table.try_claim(5));
        assert!(table.is_claimed(5));
    }

    #[test]
    fn contended_claims_are_exclusive() {
        let table = Arc::new(ClaimTable::new(1000));
        let wins = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                let wins = Arc::clone(&wins);
                thread::spawn(move || {
                    for i in 0..table.len() {
                        if table.try_claim(i) {
                            wins.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(wins.load(Ordering::Relaxed), 1000);
        assert_eq!(table.claimed_count(), 1000);
    }
}
