/// Color space generators for chromagrid (linear, shuffled, random, sorted).

pub mod linear;
pub mod shuffled;
pub mod sorted;

use cg_core::config::Strategy;
use cg_core::traits::ColorSpace;

/// Crée le générateur qui alimente une stratégie.
///
/// La stratégie `Distance` clusterise une collection aléatoire : elle reçoit
/// donc un générateur [`shuffled::Random`].
///
/// # Example
/// ```
/// use cg_core::config::Strategy;
/// use cg_core::traits::ColorSpace;
/// use cg_source::create_color_space;
/// let source = create_color_space(Strategy::Sorted, None);
/// assert_eq!(source.name(), "sorted");
/// ```
#[must_use]
pub fn create_color_space(strategy: Strategy, seed: Option<u64>) -> Box<dyn ColorSpace> {
    log::debug!("Générateur pour la stratégie {strategy} (seed={seed:?})");
    match strategy {
        Strategy::Linear => Box::new(linear::Linear::default()),
        Strategy::Shuffled => Box::new(shuffled::Shuffled::new(seed)),
        Strategy::Random | Strategy::Distance => Box::new(shuffled::Random::new(seed)),
        Strategy::Sorted => Box::new(sorted::Sorted),
    }
}
