use super::features::{FeatureRow, NUM_FEATURES};
use serde::{Deserialize, Serialize};

/// Per-feature standardization: `(x - mean) / std`, fit on the training set.
///
/// A feature with zero variance keeps a unit divisor so transformation stays
/// defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: FeatureRow,
    stds: FeatureRow,
}

impl StandardScaler {
    pub fn fit(rows: &[FeatureRow]) -> Self {
        let mut means = [0.0; NUM_FEATURES];
        let mut stds = [1.0; NUM_FEATURES];
        if rows.is_empty() {
            return Self { means, stds };
        }

        let n = rows.len() as f64;
        for row in rows {
            for (feature, value) in row.iter().enumerate() {
                means[feature] += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        for (feature, std) in stds.iter_mut().enumerate() {
            let variance = rows
                .iter()
                .map(|row| {
                    let d = row[feature] - means[feature];
                    d * d
                })
                .sum::<f64>()
                / n;
            let sigma = variance.sqrt();
            *std = if sigma > f64::EPSILON { sigma } else { 1.0 };
        }

        Self { means, stds }
    }

    pub fn transform(&self, row: &FeatureRow) -> FeatureRow {
        let mut scaled = [0.0; NUM_FEATURES];
        for feature in 0..NUM_FEATURES {
            scaled[feature] = (row[feature] - self.means[feature]) / self.stds[feature];
        }
        scaled
    }

    pub fn transform_all(&self, rows: &[FeatureRow]) -> Vec<FeatureRow> {
        rows.iter().map(|row| self.transform(row)).collect()
    }
}
