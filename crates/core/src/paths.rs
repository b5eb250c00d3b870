/// Candidate API paths assigned to extracted rows to simulate request routing.
pub const CANDIDATE_API_PATHS: [&str; 6] = [
    "/sphinx/v1/predict",
    "/sphinx/v2/predict",
    "/sphinx/v3/predict",
    "/yolo/v1/predict",
    "/yolo/v2/predict",
    "/yolo/v3/predict",
];

pub fn is_candidate_path(path: &str) -> bool {
    CANDIDATE_API_PATHS.contains(&path)
}
