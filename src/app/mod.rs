mod root;
mod state;

pub(crate) use state::{ChartData, ChartState, CoinsState, SparklineDims};

pub use root::App;
