/// Port for the mint-interval randomness
///
/// This allows the engine to use different sources:
/// - A uniform random stream for real runs
/// - A scripted or constant stream for deterministic tests
pub trait JitterSource {
    /// Next sample, uniform in [-1.0, 1.0]
    fn sample(&mut self) -> f64;

    /// Source name for debugging
    fn name(&self) -> &str {
        "JitterSource"
    }
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
