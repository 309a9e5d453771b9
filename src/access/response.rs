//! Decoding of response envelopes into typed items.

use std::sync::Arc;

use serde_json::Value;

use crate::access::AccessError;
use crate::clients::HttpResponse;
use crate::item::{ContentItem, SubResources};

/// Fails with [`AccessError::Api`] on `success: false` and with
/// [`AccessError::MalformedResponse`] when the body is not a JSON object.
pub(crate) fn check_success<T: ContentItem>(response: &HttpResponse) -> Result<(), AccessError> {
    if !response.body.is_object() {
        return Err(malformed::<T>("response body is not a JSON object"));
    }
    if !response.is_success() {
        let reason = response.reason().unwrap_or("no reason given").to_string();
        tracing::warn!(
            resource = T::TYPE_NAME,
            request_id = response.request_id(),
            "Ning API rejected request: {reason}"
        );
        return Err(AccessError::Api {
            resource: T::TYPE_NAME,
            reason,
        });
    }
    Ok(())
}

/// Decodes the `count` of a count response.
pub(crate) fn decode_count<T: ContentItem>(response: &HttpResponse) -> Result<u64, AccessError> {
    check_success::<T>(response)?;
    response
        .count()
        .ok_or_else(|| malformed::<T>("missing or negative count"))
}

/// Decodes a single-item response. An absent entry or empty array is `None`;
/// of several entries the first wins.
pub(crate) fn decode_single<T: ContentItem>(
    response: &HttpResponse,
) -> Result<Option<T>, AccessError> {
    check_success::<T>(response)?;
    let resources = sub_resources(response);

    match response.entry() {
        None => Ok(None),
        Some(Value::Array(entries)) => {
            if entries.len() > 1 {
                tracing::warn!(
                    resource = T::TYPE_NAME,
                    returned = entries.len(),
                    "single-item lookup matched several items, using the first"
                );
            }
            entries
                .first()
                .map(|entry| decode_item::<T>(entry, resources.as_ref()))
                .transpose()
        }
        Some(entry) => decode_item::<T>(entry, resources.as_ref()).map(Some),
    }
}

/// Decodes a list response, keeping server order.
pub(crate) fn decode_list<T: ContentItem>(response: &HttpResponse) -> Result<Vec<T>, AccessError> {
    check_success::<T>(response)?;
    let resources = sub_resources(response);

    let entries = match response.entry() {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(malformed::<T>("expected a list of entries")),
    };

    entries
        .iter()
        .map(|entry| decode_item::<T>(entry, resources.as_ref()))
        .collect()
}

/// Decodes the entry of an update response.
pub(crate) fn decode_updated<T: ContentItem>(response: &HttpResponse) -> Result<T, AccessError> {
    decode_single::<T>(response)?.ok_or_else(|| malformed::<T>("update returned no entry"))
}

fn decode_item<T: ContentItem>(
    entry: &Value,
    resources: Option<&Arc<SubResources>>,
) -> Result<T, AccessError> {
    let mut item: T = serde_json::from_value(entry.clone())
        .map_err(|e| malformed::<T>(&format!("entry does not match schema: {e}")))?;
    if let Some(resources) = resources {
        item.inject_sub_resources(Arc::clone(resources));
    }
    Ok(item)
}

fn sub_resources(response: &HttpResponse) -> Option<Arc<SubResources>> {
    response
        .resources()
        .map(|resources| Arc::new(SubResources::from_json(resources)))
}

fn malformed<T: ContentItem>(reason: &str) -> AccessError {
    AccessError::MalformedResponse {
        resource: T::TYPE_NAME,
        reason: reason.to_string(),
    }
}
