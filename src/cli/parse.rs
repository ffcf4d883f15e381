use pathfinder_core::graph::AlgorithmType;

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<AlgorithmType, String> {
    s.parse::<AlgorithmType>().map_err(|e| e.to_string())
}
