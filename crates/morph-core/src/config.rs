/// Tunables for cloud generation and animation.
///
/// The defaults are the constants the visuals were calibrated against;
/// `lerp_rate`, `spin_rate`, and the two gains are part of the observable
/// look of the cloud.
#[derive(Clone, Copy, Debug)]
pub struct CloudConfig {
    /// Number of points in the cloud. Buffers never resize after construction.
    pub point_count: usize,
    /// Exponential smoothing rate toward the effective target, per tick.
    pub lerp_rate: f32,
    /// Rotation about the vertical axis added every tick, in radians.
    pub spin_rate: f32,
    /// Non-fireworks target scale reaches `1 + expansion_gain` at full tension.
    pub expansion_gain: f32,
    /// Fireworks target scale reaches `1 + fireworks_gain` at full tension.
    pub fireworks_gain: f32,
    /// Per-axis jitter amplitude at full tension.
    pub jitter_scale: f32,
    /// Edge length of the initial random scatter cube.
    pub scatter_extent: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            point_count: 15_000,
            lerp_rate: 0.05,
            spin_rate: 0.002,
            expansion_gain: 1.5,
            fireworks_gain: 20.0,
            jitter_scale: 0.05,
            scatter_extent: 10.0,
        }
    }
}
