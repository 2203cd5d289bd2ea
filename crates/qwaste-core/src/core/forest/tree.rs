use super::features::{FeatureRow, NUM_FEATURES};
use serde::{Deserialize, Serialize};

const MIN_IMPURITY_DECREASE: f64 = 1e-12;

/// Stopping criteria for tree growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A CART regression tree grown by variance reduction.
///
/// Nodes live in an arena; children are built before their parent, so the
/// stored `root` is the last node pushed. Splits send `value <= threshold`
/// left, with thresholds at the midpoint between adjacent distinct values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<Node>,
    root: usize,
    importances: [f64; NUM_FEATURES],
}

impl RegressionTree {
    /// Grows a tree on the sample subset given by `sample_indices`.
    pub fn fit(
        rows: &[FeatureRow],
        targets: &[f64],
        sample_indices: &[usize],
        params: &TreeParams,
    ) -> Self {
        let mut builder = TreeBuilder {
            rows,
            targets,
            params,
            root_count: sample_indices.len().max(1) as f64,
            nodes: Vec::new(),
            importances: [0.0; NUM_FEATURES],
        };
        let mut indices = sample_indices.to_vec();
        let root = builder.build(&mut indices, 0);

        let mut importances = builder.importances;
        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for v in &mut importances {
                *v /= total;
            }
        }

        Self {
            nodes: builder.nodes,
            root,
            importances,
        }
    }

    pub fn predict(&self, row: &FeatureRow) -> f64 {
        let mut index = self.root;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Per-feature importances, normalized to sum to 1 (all zeros for a tree
    /// without splits).
    pub fn importances(&self) -> &[f64; NUM_FEATURES] {
        &self.importances
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

struct TreeBuilder<'a> {
    rows: &'a [FeatureRow],
    targets: &'a [f64],
    params: &'a TreeParams,
    root_count: f64,
    nodes: Vec<Node>,
    importances: [f64; NUM_FEATURES],
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    decrease: f64,
}

impl TreeBuilder<'_> {
    fn build(&mut self, indices: &mut [usize], depth: usize) -> usize {
        let n = indices.len();
        let mean = self.mean(indices);

        if n < self.params.min_samples_split || depth >= self.params.max_depth {
            return self.push(Node::Leaf { value: mean });
        }

        let impurity = self.variance(indices, mean);
        if impurity <= MIN_IMPURITY_DECREASE {
            return self.push(Node::Leaf { value: mean });
        }

        let Some(best) = self.find_best_split(indices, impurity) else {
            return self.push(Node::Leaf { value: mean });
        };

        self.importances[best.feature] += (n as f64 / self.root_count) * best.decrease;

        let split_at = partition(self.rows, indices, best.feature, best.threshold);
        let (left_indices, right_indices) = indices.split_at_mut(split_at);
        let left = self.build(left_indices, depth + 1);
        let right = self.build(right_indices, depth + 1);

        self.push(Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        })
    }

    fn find_best_split(&self, indices: &[usize], impurity: f64) -> Option<BestSplit> {
        let n = indices.len();
        let mut best: Option<BestSplit> = None;
        let mut sorted = indices.to_vec();

        for feature in 0..NUM_FEATURES {
            sorted.sort_by(|&a, &b| {
                self.rows[a][feature]
                    .partial_cmp(&self.rows[b][feature])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            let total_sum: f64 = sorted.iter().map(|&i| self.targets[i]).sum();
            let total_sq: f64 = sorted.iter().map(|&i| self.targets[i] * self.targets[i]).sum();

            for k in 1..n {
                let prev = sorted[k - 1];
                left_sum += self.targets[prev];
                left_sq += self.targets[prev] * self.targets[prev];

                let lo = self.rows[prev][feature];
                let hi = self.rows[sorted[k]][feature];
                if hi <= lo {
                    continue;
                }

                let nl = k as f64;
                let nr = (n - k) as f64;
                let left_impurity = (left_sq / nl) - (left_sum / nl).powi(2);
                let right_sum = total_sum - left_sum;
                let right_impurity = ((total_sq - left_sq) / nr) - (right_sum / nr).powi(2);
                let decrease = impurity - (nl * left_impurity + nr * right_impurity) / n as f64;

                if decrease > MIN_IMPURITY_DECREASE
                    && best.as_ref().is_none_or(|b| decrease > b.decrease)
                {
                    best = Some(BestSplit {
                        feature,
                        threshold: lo + (hi - lo) / 2.0,
                        decrease,
                    });
                }
            }
        }

        best
    }

    fn mean(&self, indices: &[usize]) -> f64 {
        if indices.is_empty() {
            return 0.0;
        }
        indices.iter().map(|&i| self.targets[i]).sum::<f64>() / indices.len() as f64
    }

    fn variance(&self, indices: &[usize], mean: f64) -> f64 {
        if indices.is_empty() {
            return 0.0;
        }
        indices
            .iter()
            .map(|&i| {
                let d = self.targets[i] - mean;
                d * d
            })
            .sum::<f64>()
            / indices.len() as f64
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Reorders `indices` so samples with `value <= threshold` come first; returns
/// the boundary position.
fn partition(rows: &[FeatureRow], indices: &mut [usize], feature: usize, threshold: f64) -> usize {
    let mut boundary = 0;
    for i in 0..indices.len() {
        if rows[indices[i]][feature] <= threshold {
            indices.swap(boundary, i);
            boundary += 1;
        }
    }
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn row_with(feature: usize, value: f64) -> FeatureRow {
        let mut row = [0.0; NUM_FEATURES];
        row[feature] = value;
        row
    }

    fn deep_params() -> TreeParams {
        TreeParams {
            max_depth: 10,
            min_samples_split: 2,
        }
    }

    fn all_indices(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn constant_targets_produce_a_single_leaf() {
        let rows = vec![row_with(0, 1.0), row_with(0, 2.0), row_with(0, 3.0)];
        let targets = vec![5.0, 5.0, 5.0];
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(3), &deep_params());
        assert_eq!(tree.node_count(), 1);
        assert!((tree.predict(&row_with(0, 2.5)) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn splits_perfectly_on_a_single_informative_feature() {
        let rows = vec![
            row_with(2, 1.0),
            row_with(2, 2.0),
            row_with(2, 8.0),
            row_with(2, 9.0),
        ];
        let targets = vec![0.0, 0.0, 10.0, 10.0];
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(4), &deep_params());

        assert!((tree.predict(&row_with(2, 1.5)) - 0.0).abs() < TOLERANCE);
        assert!((tree.predict(&row_with(2, 8.5)) - 10.0).abs() < TOLERANCE);

        let importances = tree.importances();
        assert!((importances[2] - 1.0).abs() < TOLERANCE);
        assert!(importances.iter().enumerate().all(|(f, &v)| f == 2 || v == 0.0));
    }

    #[test]
    fn depth_zero_predicts_the_mean() {
        let rows = vec![row_with(0, 1.0), row_with(0, 2.0)];
        let targets = vec![2.0, 4.0];
        let params = TreeParams {
            max_depth: 0,
            min_samples_split: 2,
        };
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(2), &params);
        assert_eq!(tree.node_count(), 1);
        assert!((tree.predict(&row_with(0, 99.0)) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn min_samples_split_stops_growth() {
        let rows = vec![row_with(0, 1.0), row_with(0, 2.0), row_with(0, 3.0)];
        let targets = vec![1.0, 2.0, 3.0];
        let params = TreeParams {
            max_depth: 10,
            min_samples_split: 4,
        };
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(3), &params);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn boundary_values_go_left() {
        let rows = vec![row_with(0, 0.0), row_with(0, 1.0)];
        let targets = vec![-1.0, 1.0];
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(2), &deep_params());
        // Threshold is the midpoint 0.5; a query exactly there follows the
        // left branch.
        assert!((tree.predict(&row_with(0, 0.5)) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn duplicate_feature_values_never_split() {
        let rows = vec![row_with(0, 1.0); 4];
        let targets = vec![0.0, 1.0, 2.0, 3.0];
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(4), &deep_params());
        assert_eq!(tree.node_count(), 1);
        assert!((tree.predict(&row_with(0, 1.0)) - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn importances_sum_to_one_when_the_tree_splits() {
        let rows = vec![
            [1.0, 9.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [2.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [8.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [9.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        let targets = vec![1.0, 2.0, 8.0, 9.0];
        let tree = RegressionTree::fit(&rows, &targets, &all_indices(4), &deep_params());
        let sum: f64 = tree.importances().iter().sum();
        assert!((sum - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn fitting_a_bootstrap_subset_ignores_other_samples() {
        let rows = vec![row_with(0, 1.0), row_with(0, 2.0), row_with(0, 100.0)];
        let targets = vec![1.0, 1.0, 1000.0];
        // Subset excludes the outlier sample.
        let tree = RegressionTree::fit(&rows, &targets, &[0, 1], &deep_params());
        assert!((tree.predict(&row_with(0, 100.0)) - 1.0).abs() < TOLERANCE);
    }
}
