use std::collections::HashMap;

use statrs::statistics::Statistics;

/// Jeden riadok výsledkov: meno modelu a metriky v pevnom poradí.
/// `None` = metrika nie je definovaná pre tento beh.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub model_name: String,
    pub metrics: Vec<(String, Option<f64>)>,
}

impl EvaluationReport {
    pub fn new(model_name: String) -> Self {
        Self {
            model_name,
            metrics: Vec::new(),
        }
    }

    /// Pridá metriku; rovnaké meno prepíše existujúcu hodnotu na jej mieste.
    pub fn add_metric(&mut self, name: &str, value: Option<f64>) {
        match self.metrics.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.metrics.push((name.to_string(), value)),
        }
    }

    pub fn get_metric(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| *v)
    }

    pub fn has_metric(&self, name: &str) -> bool {
        self.metrics.iter().any(|(n, _)| n == name)
    }

    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// Zaokrúhli na dve desatinné miesta, polovica k párnej číslici
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Pearsonov korelačný koeficient. Konštantný vstup dá NaN.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n == 0 || n != y.len() {
        return f64::NAN;
    }

    let mean_x = x.iter().mean();
    let mean_y = y.iter().mean();

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    numerator / (sum_sq_x * sum_sq_y).sqrt()
}

/// Spearmanova korelácia: Pearson na poradiach, zhody dostanú priemerné poradie.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() {
        return f64::NAN;
    }
    pearson(&ranks(x), &ranks(y))
}

fn ranks(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    let mut indexed: Vec<(usize, f64)> = data.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && indexed[j].1 == indexed[i].1 {
            j += 1;
        }
        // NaN sa nerovná ničomu, dostane vlastné poradie
        let j = j.max(i + 1);
        let avg_rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for item in &indexed[i..j] {
            ranks[item.0] = avg_rank;
        }
        i = j;
    }
    ranks
}

/// Vzájomná informácia dvoch označení (v natoch).
///
/// Každá rôzna hodnota je samostatná trieda, ako pri diskrétnych labeloch;
/// spojité hodnoty sa nediskretizujú.
pub fn mutual_info_score(labels_a: &[f64], labels_b: &[f64]) -> f64 {
    let n = labels_a.len();
    if n == 0 || n != labels_b.len() {
        return f64::NAN;
    }

    let mut joint: HashMap<(u64, u64), usize> = HashMap::new();
    let mut count_a: HashMap<u64, usize> = HashMap::new();
    let mut count_b: HashMap<u64, usize> = HashMap::new();

    for (a, b) in labels_a.iter().zip(labels_b) {
        let (ka, kb) = (label_key(*a), label_key(*b));
        *joint.entry((ka, kb)).or_insert(0) += 1;
        *count_a.entry(ka).or_insert(0) += 1;
        *count_b.entry(kb).or_insert(0) += 1;
    }

    let n = n as f64;
    let mi: f64 = joint
        .iter()
        .map(|((ka, kb), &nij)| {
            let nij = nij as f64;
            let ai = count_a[ka] as f64;
            let bj = count_b[kb] as f64;
            (nij / n) * ((nij * n) / (ai * bj)).ln()
        })
        .sum();

    mi.max(0.0)
}

fn label_key(value: f64) -> u64 {
    // -0.0 a 0.0 sú tá istá trieda
    if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() }
}
