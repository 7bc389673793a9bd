pub(crate) const DEFAULT_EPSILON_F64: f64 = 1e-9;
