use ndarray::array;
use tabeval::{FeatureTable, ModelFamily, run_alpha_sweep};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Regularization Strength Sweep ===\n");

    // y = 3*x1 + 2*x2 + noise; x3 is irrelevant
    let x = FeatureTable::from_named(
        &["x1", "x2", "x3"],
        array![
            [1.0, 2.0, 0.5],
            [2.0, 3.0, -0.2],
            [3.0, 1.0, 1.1],
            [4.0, 4.0, 0.3],
            [5.0, 2.0, -0.8],
            [6.0, 5.0, 0.9],
            [7.0, 3.0, -0.4],
            [8.0, 6.0, 0.7],
            [9.0, 4.0, -0.1],
            [10.0, 7.0, 0.2]
        ],
    )?;
    let y = array![7.1, 11.9, 12.8, 19.7, 18.9, 27.8, 26.7, 35.9, 34.8, 43.1];

    let alphas = [0.07, 0.1, 0.5, 1.0, 3.0];

    for name in ["Ridge", "Lasso", "ElasticNet"] {
        let family: ModelFamily = name.parse()?;
        let coef_table = run_alpha_sweep(family, &alphas, &x, &y, true, true)?;

        println!("\n{:<10} {:>12} {:>12} {:>12}", "column", "x1", "x2", "x3");
        for (label, coeffs) in coef_table.iter() {
            println!(
                "{:<10} {:>12.4} {:>12.4} {:>12.4}",
                label, coeffs[0], coeffs[1], coeffs[2]
            );
        }
        println!();
    }

    println!("Higher alpha shrinks coefficients; Lasso and ElasticNet drive");
    println!("the irrelevant x3 coefficient toward zero first.");

    Ok(())
}
