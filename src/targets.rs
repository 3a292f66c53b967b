//! The fixed workload every strategy fetches

/// Resources fetched by each benchmark run, in report order
pub const DEFAULT_TARGETS: [&str; 5] = [
    "https://www.yahoo.com",
    "https://www.google.com",
    "https://www.w3schools.com",
    "https://www.microsoft.com",
    "https://www.elpais.com.uy",
];

/// Returns an owned copy of the default target list
pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
}
