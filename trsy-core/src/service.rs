use crate::listener::Listener;

/// The lookup-and-ingest half of the event fabric.
///
/// `K` is the cache key (typically a product-id, trade-id or inquiry-id),
/// `V` is the value every listener on this service is fanned.
///
/// `get_data` is a hard lookup: a miss means a downstream service was handed
/// a key its upstream never published, which is a programming error, not a
/// recoverable condition — implementations panic rather than return
/// `Option`.
pub trait Service<K, V> {
    /// Look up a previously-ingested value by key. Panics if `key` was never
    /// seen by [`Service::on_message`].
    fn get_data(&self, key: &K) -> &V;

    /// Ingest a new or updated value, updating the cache and fanning the
    /// appropriate callback to every registered listener before returning.
    fn on_message(&mut self, value: V);

    /// Register a listener. Listeners fire in registration order.
    fn add_listener(&mut self, listener: Box<dyn Listener<V>>);

    /// The listeners registered so far, in registration order.
    fn listeners(&self) -> &[Box<dyn Listener<V>>];
}
