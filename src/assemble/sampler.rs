//! Seeded parameter draws for one generation call.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::debug;

use crate::diagnostic::{Diagnostic, Diagnostics, UNKNOWN_MATERIAL, UNKNOWN_SUBTYPE};
use crate::types::{MaterialCatalog, MaterialClass, MaterialDef, FALLBACK_MATERIAL};

/// A closed set of named variants (item sub-types).
pub trait Choice: Copy + Default + 'static {
    /// Family name used in diagnostics, e.g. "sword".
    const FAMILY: &'static str;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.key().eq_ignore_ascii_case(key))
    }

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.key()).collect()
    }
}

/// Explicit random context threaded through every draw of one item.
#[derive(Debug, Clone)]
pub struct ParameterSampler {
    rng: Pcg32,
    diagnostics: Diagnostics,
}

impl ParameterSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Inclusive integer draw. Reversed bounds are swapped.
    pub fn int_in(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(lo..=hi)
    }

    /// Inclusive unsigned draw, for dimensions.
    pub fn size_in(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(lo..=hi)
    }

    /// Draw from `[min, max)`; returns `min` for an empty range.
    pub fn float_in(&mut self, min: f64, max: f64) -> f64 {
        if min.is_nan() || max.is_nan() || min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut self.rng)
    }

    /// Resolve a requested variant, drawing one when absent or unknown.
    pub fn variant<T: Choice>(&mut self, requested: Option<&str>) -> T {
        if let Some(key) = requested {
            if let Some(v) = T::from_key(key) {
                return v;
            }
            let picked = self.random_variant::<T>();
            self.diagnostics.push(
                Diagnostic::warning(
                    UNKNOWN_SUBTYPE,
                    format!(
                        "unknown {} sub-type '{}', using '{}'",
                        T::FAMILY,
                        key,
                        picked.key()
                    ),
                )
                .with_help(format!("known sub-types: {}", T::keys().join(", "))),
            );
            return picked;
        }
        let picked = self.random_variant::<T>();
        debug!(family = T::FAMILY, sub_type = picked.key(), "drew sub-type");
        picked
    }

    fn random_variant<T: Choice>(&mut self) -> T {
        T::ALL.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Resolve the material for one slot.
    ///
    /// An explicit key goes through the catalog; unknown keys fall back to
    /// the default material with a warning. With no key, a material of
    /// `class` is drawn.
    pub fn material(
        &mut self,
        slot: &str,
        requested: Option<&str>,
        class: MaterialClass,
    ) -> &'static MaterialDef {
        self.material_excluding(slot, requested, class, &[])
    }

    /// Like [`material`](Self::material), but random draws skip the
    /// `exclude` keys. If nothing is left the whole class is used.
    pub fn material_excluding(
        &mut self,
        slot: &str,
        requested: Option<&str>,
        class: MaterialClass,
        exclude: &[&str],
    ) -> &'static MaterialDef {
        if let Some(key) = requested {
            return match MaterialCatalog::find(key) {
                Some(def) => def,
                None => {
                    self.diagnostics.push(
                        Diagnostic::warning(
                            UNKNOWN_MATERIAL,
                            format!(
                                "unknown {} material '{}', using '{}'",
                                slot, key, FALLBACK_MATERIAL
                            ),
                        )
                        .with_help(format!(
                            "{} materials: {}",
                            class,
                            class_keys(class).join(", ")
                        )),
                    );
                    MaterialCatalog::fallback()
                }
            };
        }

        let all = MaterialCatalog::of_class(class);
        let filtered: Vec<&'static MaterialDef> = all
            .iter()
            .copied()
            .filter(|m| !exclude.iter().any(|x| x.eq_ignore_ascii_case(m.key)))
            .collect();
        let pool = if filtered.is_empty() { &all } else { &filtered };
        let picked = pool
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(MaterialCatalog::fallback);
        debug!(slot, material = picked.key, "drew material");
        picked
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

fn class_keys(class: MaterialClass) -> Vec<&'static str> {
    MaterialCatalog::of_class(class)
        .into_iter()
        .map(|m| m.key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Cut {
        #[default]
        Round,
        Square,
        Oval,
    }

    impl Choice for Cut {
        const FAMILY: &'static str = "gem";
        const ALL: &'static [Self] = &[Cut::Round, Cut::Square, Cut::Oval];

        fn key(self) -> &'static str {
            match self {
                Cut::Round => "round",
                Cut::Square => "square",
                Cut::Oval => "oval",
            }
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ParameterSampler::new(42);
        let mut b = ParameterSampler::new(42);
        for _ in 0..32 {
            assert_eq!(a.int_in(-50, 50), b.int_in(-50, 50));
            assert_eq!(a.float_in(0.0, 1.0), b.float_in(0.0, 1.0));
        }
    }

    #[test]
    fn test_ranges_are_respected() {
        let mut s = ParameterSampler::new(7);
        for _ in 0..200 {
            let v = s.int_in(10, 3);
            assert!((3..=10).contains(&v));
            let f = s.float_in(1.5, 2.5);
            assert!((1.5..2.5).contains(&f));
            assert!((4..=6).contains(&s.size_in(4, 6)));
        }
        assert_eq!(s.int_in(5, 5), 5);
        assert_eq!(s.float_in(3.0, 3.0), 3.0);
        assert_eq!(s.float_in(3.0, 1.0), 3.0);
        assert!(!s.chance(0.0));
        assert!(s.chance(1.0));
        assert!(s.choose::<u8>(&[]).is_none());
    }

    #[test]
    fn test_variant_known_key() {
        let mut s = ParameterSampler::new(1);
        assert_eq!(s.variant::<Cut>(Some(" Square ")), Cut::Square);
        assert!(s.diagnostics().is_empty());
    }

    #[test]
    fn test_variant_unknown_key_warns() {
        let mut s = ParameterSampler::new(1);
        let v = s.variant::<Cut>(Some("hexagonal"));
        assert!(Cut::ALL.contains(&v));
        assert_eq!(s.diagnostics().count_code(UNKNOWN_SUBTYPE), 1);
    }

    #[test]
    fn test_variant_absent_is_silent() {
        let mut s = ParameterSampler::new(1);
        let v = s.variant::<Cut>(None);
        assert!(Cut::ALL.contains(&v));
        assert!(s.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_material_falls_back() {
        let mut s = ParameterSampler::new(3);
        let m = s.material("blade", Some("UNKNOWNIUM"), MaterialClass::Metal);
        assert_eq!(m.key, FALLBACK_MATERIAL);
        assert_eq!(s.diagnostics().count_code(UNKNOWN_MATERIAL), 1);
    }

    #[test]
    fn test_random_material_matches_class() {
        let mut s = ParameterSampler::new(3);
        for _ in 0..20 {
            assert_eq!(s.material("gem", None, MaterialClass::Gem).class, MaterialClass::Gem);
        }
    }

    #[test]
    fn test_material_exclusion() {
        let mut s = ParameterSampler::new(9);
        for _ in 0..50 {
            let m = s.material_excluding("trim", None, MaterialClass::Metal, &["iron", "steel"]);
            assert_ne!(m.key, "iron");
            assert_ne!(m.key, "steel");
        }
    }

    #[test]
    fn test_material_exclusion_empty_pool_falls_back() {
        let every: Vec<&str> = MaterialCatalog::of_class(MaterialClass::Cord)
            .into_iter()
            .map(|m| m.key)
            .collect();
        let mut s = ParameterSampler::new(9);
        let m = s.material_excluding("string", None, MaterialClass::Cord, &every);
        assert_eq!(m.class, MaterialClass::Cord);
        assert!(s.diagnostics().is_empty());
    }
}
