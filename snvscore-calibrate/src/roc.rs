use anyhow::Result;

///
/// Receiver operating characteristic curve.
///
/// Points are ordered by decreasing threshold. The first point is always
/// `(0, 0)` at threshold `+inf`; collinear intermediate points are dropped.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    ///
    /// Area under the curve, by the trapezoidal rule.
    ///
    pub fn auc(&self) -> f64 {
        self.fpr
            .windows(2)
            .zip(self.tpr.windows(2))
            .map(|(x, y)| (x[1] - x[0]) * (y[1] + y[0]) / 2.0)
            .sum()
    }

    ///
    /// Index of the point maximising Youden's J statistic (`tpr - fpr`).
    /// Ties go to the first, i.e. highest-threshold, point.
    ///
    pub fn youden_index(&self) -> usize {
        let mut best = 0;
        let mut best_j = f64::NEG_INFINITY;
        for (i, (tpr, fpr)) in self.tpr.iter().zip(self.fpr.iter()).enumerate() {
            let j = tpr - fpr;
            if j > best_j {
                best_j = j;
                best = i;
            }
        }
        best
    }

    pub fn optimal_threshold(&self) -> f64 {
        self.thresholds[self.youden_index()]
    }
}

///
/// Compute the ROC curve of a binary classifier.
///
/// # Arguments
///
/// - labels: `true` for the positive class
/// - scores: higher means more likely positive
///
pub fn roc_curve(labels: &[bool], scores: &[f64]) -> Result<RocCurve> {
    if labels.len() != scores.len() {
        anyhow::bail!(
            "Got {} labels but {} scores",
            labels.len(),
            scores.len()
        );
    }
    if scores.iter().any(|s| !s.is_finite()) {
        anyhow::bail!("Scores must be finite");
    }
    let n_pos = labels.iter().filter(|l| **l).count();
    if n_pos == 0 || n_pos == labels.len() {
        anyhow::bail!("ROC curve needs both positive and negative samples");
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]));

    // cumulative true/false positives at the last index of each distinct score
    let mut tps: Vec<f64> = Vec::new();
    let mut fps: Vec<f64> = Vec::new();
    let mut thresholds: Vec<f64> = Vec::new();
    let (mut tp, mut fp) = (0.0, 0.0);
    for (rank, idx) in order.iter().enumerate() {
        if labels[*idx] {
            tp += 1.0;
        } else {
            fp += 1.0;
        }
        let last_of_value = order
            .get(rank + 1)
            .is_none_or(|next| scores[*next] != scores[*idx]);
        if last_of_value {
            tps.push(tp);
            fps.push(fp);
            thresholds.push(scores[*idx]);
        }
    }

    // drop points lying on a straight line between their neighbours
    let n = tps.len();
    let keep: Vec<usize> = (0..n)
        .filter(|&i| {
            i == 0
                || i == n - 1
                || fps[i + 1] - 2.0 * fps[i] + fps[i - 1] != 0.0
                || tps[i + 1] - 2.0 * tps[i] + tps[i - 1] != 0.0
        })
        .collect();

    let total_pos = tps[n - 1];
    let total_neg = fps[n - 1];

    let mut curve = RocCurve {
        fpr: vec![0.0],
        tpr: vec![0.0],
        thresholds: vec![f64::INFINITY],
    };
    for i in keep {
        curve.fpr.push(fps[i] / total_neg);
        curve.tpr.push(tps[i] / total_pos);
        curve.thresholds.push(thresholds[i]);
    }

    Ok(curve)
}
