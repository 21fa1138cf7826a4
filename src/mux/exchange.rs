use crate::query::QueryParams;

/// One request/response pair as seen by the dispatcher, its hooks and
/// its handlers.
pub trait Exchange {
    fn method(&self) -> &str;

    /// Request path without the query string.
    fn path(&self) -> &str;

    fn query_mut(&mut self) -> &mut QueryParams;

    /// Produces the "not found" response.
    fn not_found(&mut self);

    /// Called once the route parameters have been added to `query_mut()`.
    /// They are the entries from index `start` on.
    fn params_bound(&mut self, start: usize) {
        let _ = start;
    }
}
