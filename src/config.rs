/// Configuration for one fireworks show
#[derive(Clone)]
pub struct ShowConfig {
    pub launches: u32,
    pub sparkles: u32,
    pub message: String,
    pub speed: f32,
    pub seed: Option<u64>,
}
