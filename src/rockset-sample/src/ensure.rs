use std::future::Future;

use rockset_api::Result;

/// Outcome of a get-or-create, so callers can report which path was taken
#[derive(Debug)]
pub enum GetOrCreate<T> {
    Existing(T),
    Created(T),
}

/// Look a resource up, creating it only when the lookup reports not-found.
///
/// Both arguments are lazy futures; `create` is awaited at most once, and only
/// after `get` failed with a 404. Any other lookup error propagates unmodified.
pub async fn get_or_create<T, G, C>(get: G, create: C) -> Result<GetOrCreate<T>>
where
    G: Future<Output = Result<T>>,
    C: Future<Output = Result<T>>,
{
    match get.await {
        Ok(value) => Ok(GetOrCreate::Existing(value)),
        Err(e) if e.is_not_found() => Ok(GetOrCreate::Created(create.await?)),
        Err(e) => Err(e),
    }
}
