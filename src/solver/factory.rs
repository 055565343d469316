use crate::domain::{
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolverBackend,
};
use std::sync::Arc;

/// Factory for creating solver instances from the configured backend
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend
    ///
    /// Fails with [`SolverError::SolverNotAvailable`] when the backend was not
    /// compiled into this build (see the `highs` and `cbc` cargo features).
    pub fn create_from_backend(backend: SolverBackend) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Auto => Self::highs().or_else(|_| Self::coin_cbc()),
            SolverBackend::Highs => Self::highs(),
            SolverBackend::CoinCbc => Self::coin_cbc(),
        }
    }

    /// Backends compiled into this build
    pub fn available_backends() -> Vec<SolverBackend> {
        [SolverBackend::Highs, SolverBackend::CoinCbc]
            .into_iter()
            .filter(|&backend| Self::create_from_backend(backend).is_ok())
            .collect()
    }

    #[cfg(feature = "highs")]
    fn highs() -> Result<Arc<dyn SolverService>> {
        Ok(Arc::new(super::HighsSolver::new()))
    }

    #[cfg(not(feature = "highs"))]
    fn highs() -> Result<Arc<dyn SolverService>> {
        Err(not_compiled(SolverBackend::Highs, "highs"))
    }

    #[cfg(feature = "cbc")]
    fn coin_cbc() -> Result<Arc<dyn SolverService>> {
        Ok(Arc::new(super::CoinCbcSolver::new()))
    }

    #[cfg(not(feature = "cbc"))]
    fn coin_cbc() -> Result<Arc<dyn SolverService>> {
        Err(not_compiled(SolverBackend::CoinCbc, "cbc"))
    }
}

#[cfg(any(not(feature = "highs"), not(feature = "cbc")))]
fn not_compiled(backend: SolverBackend, feature: &str) -> SolverError {
    SolverError::SolverNotAvailable(format!(
        "{} support is not compiled in (enable the `{}` feature)",
        backend, feature
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_to_a_compiled_backend() {
        match SolverFactory::create_from_backend(SolverBackend::Auto) {
            Ok(solver) => assert!(
                !SolverFactory::available_backends().is_empty(),
                "{} resolved but no backend listed",
                solver.name()
            ),
            Err(err) => {
                assert!(SolverFactory::available_backends().is_empty());
                assert!(matches!(err, SolverError::SolverNotAvailable(_)));
            }
        }
    }

    #[cfg(feature = "highs")]
    #[test]
    fn auto_prefers_highs() {
        let solver = SolverFactory::create_from_backend(SolverBackend::Auto).unwrap();
        assert_eq!(solver.name(), "HiGHS");
    }

    #[cfg(not(feature = "cbc"))]
    #[test]
    fn missing_backend_is_reported() {
        let err = SolverFactory::create_from_backend(SolverBackend::CoinCbc).err().unwrap();
        assert!(err.to_string().contains("`cbc` feature"));
    }
}
