/// Generation pipeline configuration and orchestration
pub mod executor;
/// Per-attempt visited-cell occupancy mask
pub mod mask;
/// Backbite rewriting moves for path randomization
pub mod mixer;
/// Pyramid refinement of coarse paths into fine paths
pub mod pyramid;
/// Randomized backtracking Hamiltonian path search
pub mod sampler;
