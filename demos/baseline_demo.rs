use ndarray::array;
use tabeval::{AlwaysNegative, Estimator, FeatureTable, SexThreshold, metrics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Baseline Classifiers and the Accuracy Paradox ===\n");

    // Skewed binary outcome: most passengers did not survive, and survival
    // correlates heavily with the Sex column (1 = male, 0 = female).
    let x = FeatureTable::from_named(
        &["Sex", "Age", "Fare"],
        array![
            [1.0, 22.0, 7.2],
            [0.0, 38.0, 71.3],
            [1.0, 26.0, 7.9],
            [0.0, 35.0, 53.1],
            [1.0, 35.0, 8.1],
            [1.0, 54.0, 51.9],
            [1.0, 2.0, 21.1],
            [0.0, 27.0, 11.1],
            [1.0, 20.0, 8.0],
            [1.0, 39.0, 31.3],
            [0.0, 14.0, 30.1],
            [1.0, 58.0, 26.6]
        ],
    )?;
    let y = array![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0];

    println!(
        "{} rows, {} survived ({}%)\n",
        x.n_rows(),
        y.sum(),
        (100.0 * y.sum() / y.len() as f64).round()
    );

    let mut threshold = SexThreshold;
    threshold.fit(&x, &y)?;
    let pred = threshold.predict(&x)?;
    let acc = metrics::accuracy_score(&y, &pred)?;
    println!("SexThreshold accuracy:   {:.3}", acc);

    let mut negative = AlwaysNegative;
    negative.fit(&x, &y)?;
    let pred = negative
        .predict(&x)?
        .mapv(|label| if label { 1.0 } else { 0.0 });
    let acc = metrics::accuracy_score(&y, &pred)?;
    println!("AlwaysNegative accuracy: {:.3}", acc);

    println!("\nNeither model learned anything, yet both score well above 0.5.");
    println!("High accuracy on skewed data says little about model quality.");

    Ok(())
}
