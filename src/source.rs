/// Anything that can produce the latest raw ADC reading.
///
/// The range and timing of readings are the implementor's concern; the
/// filter clamps out-of-range values anyway.
pub trait SampleSource<T> {
    type Error;

    fn read(&mut self) -> Result<T, Self::Error>;
}

impl<T, E, F> SampleSource<T> for F
where
    F: FnMut() -> Result<T, E>,
{
    type Error = E;

    fn read(&mut self) -> Result<T, E> {
        self()
    }
}
