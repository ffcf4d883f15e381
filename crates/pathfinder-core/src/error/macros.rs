//! Error macros for pathfinder

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathfinderError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a graph that violates the input contract
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::PathfinderError::invalid_graph(format!($($arg)*)))
    };
}
