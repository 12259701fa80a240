mod data;
pub use data::{load_columns, parse_columns, Columns, DataFormat};

mod error;
pub use error::{DataError, FitError};

mod fit;
pub use fit::{fit_model, sum_squared_residuals, ModelFit};

mod minimize;
pub use minimize::{Minimizer, Minimum, NelderMead};

mod models;
pub use models::{BacteriaModel, HivModel, ParametricModel};

mod straight_line;
pub use straight_line::{
    fit_straight_line, planck_constant, PlanckEstimate, StraightLineFit, ELECTRON_CHARGE,
    PLANCK_CONSTANT,
};
