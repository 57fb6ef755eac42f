//! Multiple-testing adjustments for batches of p-values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Multiple-testing adjustment applied across a batch of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    /// No correction: reject when `p < alpha`.
    None,
    /// Bonferroni: reject when `p < alpha / m`.
    Bonferroni,
    /// Benjamini-Hochberg step-up procedure controlling the false
    /// discovery rate at `alpha`.
    BenjaminiHochberg,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::None
    }
}

impl Adjustment {
    /// Parse an adjustment from its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "bonferroni" => Some(Self::Bonferroni),
            "benjamini_hochberg" => Some(Self::BenjaminiHochberg),
            _ => None,
        }
    }

    /// Adjustment name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bonferroni => "bonferroni",
            Self::BenjaminiHochberg => "benjamini_hochberg",
        }
    }

    /// Decide, per p-value, whether the null hypothesis is rejected at
    /// level `alpha` under this adjustment.
    pub fn reject_flags(&self, p_values: &[f64], alpha: f64) -> Vec<bool> {
        let m = p_values.len();
        if m == 0 {
            return Vec::new();
        }
        match self {
            Self::None => p_values.iter().map(|&p| p < alpha).collect(),
            Self::Bonferroni => {
                let bound = alpha / m as f64;
                p_values.iter().map(|&p| p < bound).collect()
            }
            Self::BenjaminiHochberg => {
                let mut order: Vec<usize> = (0..m).collect();
                order.sort_by(|&a, &b| {
                    p_values[a]
                        .partial_cmp(&p_values[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                // Largest rank k (1-based) with p_(k) <= k/m * alpha;
                // every p-value at or below p_(k) is rejected.
                let mut cutoff = None;
                for (rank, &idx) in order.iter().enumerate() {
                    let bound = (rank + 1) as f64 / m as f64 * alpha;
                    if p_values[idx] <= bound {
                        cutoff = Some(p_values[idx]);
                    }
                }
                match cutoff {
                    Some(threshold) => p_values.iter().map(|&p| p <= threshold).collect(),
                    None => vec![false; m],
                }
            }
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_uses_raw_alpha() {
        let flags = Adjustment::None.reject_flags(&[0.01, 0.04, 0.06], 0.05);
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_bonferroni_divides_alpha() {
        // Bound is 0.05 / 3 ≈ 0.0167.
        let flags = Adjustment::Bonferroni.reject_flags(&[0.01, 0.04, 0.06], 0.05);
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn test_benjamini_hochberg_step_up() {
        // Bounds at alpha 0.05: 0.0125, 0.025, 0.0375, 0.05.
        // p=(0.01, 0.02, 0.04, 0.5): ranks 1 and 2 pass, rank 3 fails,
        // so the first two are rejected.
        let flags = Adjustment::BenjaminiHochberg
            .reject_flags(&[0.01, 0.02, 0.04, 0.5], 0.05);
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn test_benjamini_hochberg_rejects_below_cutoff_regardless_of_rank() {
        // p_(3) = 0.03 <= 3/4 * 0.05 = 0.0375, so all three smallest
        // are rejected even though p_(2) = 0.028 > 2/4 * 0.05 = 0.025.
        let flags = Adjustment::BenjaminiHochberg
            .reject_flags(&[0.01, 0.028, 0.03, 0.9], 0.05);
        assert_eq!(flags, vec![true, true, true, false]);
    }

    #[test]
    fn test_no_rejections() {
        let flags = Adjustment::BenjaminiHochberg.reject_flags(&[0.5, 0.9], 0.05);
        assert_eq!(flags, vec![false, false]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Adjustment::None.reject_flags(&[], 0.05).is_empty());
    }

    #[test]
    fn test_from_name_round_trip() {
        for name in ["none", "bonferroni", "benjamini_hochberg"] {
            let adj = Adjustment::from_name(name).unwrap();
            assert_eq!(adj.name(), name);
        }
        assert!(Adjustment::from_name("holm").is_none());
    }
}
