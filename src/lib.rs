pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod baseline;
pub mod error;
pub mod frame;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod sweep;

pub use baseline::{AlwaysNegative, Estimator, SexThreshold};
pub use error::{Error, Result};
pub use frame::FeatureTable;
pub use linear_model::{ElasticNet, Lasso, Ridge};
pub use model_selection::KFold;
pub use sweep::{CoefficientTable, ModelFamily, run_alpha_sweep};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
