/// The outbound half of the event fabric: a service hands a value to a
/// connector to be published somewhere outside the process (a file, a wire,
/// a downstream system). Distinct from [`crate::Listener`], which is for
/// in-process fan-out to other services.
pub trait Connector<V> {
    fn publish(&mut self, value: &V) -> std::io::Result<()>;
}
