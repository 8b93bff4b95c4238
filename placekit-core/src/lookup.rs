//! Resolve places by identifier against a native SDK.
//!
//! Lookups run strictly one after another in input order. The batch is
//! all-or-nothing: the first id that fails or has no record rejects the whole
//! call and every place resolved before it is discarded. Callers wanting
//! partial results should look ids up individually.

use tokio::sync::oneshot;

use crate::{LookupCompletion, NativePlacesSdk, NativeRecord, Place, PlacesError};

/// Look up every id in `ids`, in order, one native request at a time.
///
/// Empty input returns an empty vector without touching the SDK. Duplicate
/// ids are looked up once per occurrence.
///
/// # Errors
///
/// Returns [`PlacesError::LookupFailed`] for the first id the SDK fails or
/// cannot find, and [`PlacesError::Abandoned`] if the SDK drops a completion
/// handle without using it.
pub async fn get_places_by_id<S>(sdk: &S, ids: &[String]) -> Result<Vec<Place>, PlacesError>
where
    S: NativePlacesSdk + ?Sized,
{
    let mut places = Vec::with_capacity(ids.len());
    for id in ids {
        places.push(look_up(sdk, id).await?);
    }
    log::debug!("resolved {} places by id", places.len());
    Ok(places)
}

async fn look_up<S>(sdk: &S, id: &str) -> Result<Place, PlacesError>
where
    S: NativePlacesSdk + ?Sized,
{
    let (sender, receiver) = oneshot::channel();
    sdk.look_up_place_id(id, LookupCompletion::new(sender));
    match receiver.await {
        Ok(Ok(Some(record))) => Ok(record.normalize()),
        Ok(Ok(None)) => Err(PlacesError::LookupFailed {
            id: id.to_owned(),
            source: None,
        }),
        Ok(Err(native)) => {
            log::debug!("lookup of {id:?} failed: {native}");
            Err(PlacesError::LookupFailed {
                id: id.to_owned(),
                source: Some(native),
            })
        }
        Err(_) => Err(PlacesError::Abandoned {
            operation: "lookup",
        }),
    }
}
