use std::collections::HashSet;
use std::future::Future;

use crate::domain::validation::ValidationError;
use crate::domain::Identifier;

/// Convert raw id strings to typed identifiers, deduplicated in request order
#[must_use]
pub fn unique_ids<I>(raw: &[String]) -> Vec<I>
where
    I: Identifier + for<'a> From<&'a str>,
{
    let mut seen = HashSet::new();
    raw.iter().filter(|value| seen.insert(value.as_str())).map(|value| I::from(value)).collect()
}

/// Check that every requested id exists according to a batch lookup
///
/// An empty request is trivially valid. Otherwise the lookup returns the
/// subset it knows; the ids left over become a single error listing them in
/// request order. Lookup failures propagate untouched.
pub async fn validate_existence<I, F, Fut, E>(
    label: &str,
    ids: &[I],
    exists_by_ids: F,
) -> Result<Option<ValidationError>, E>
where
    I: Identifier,
    F: FnOnce(Vec<I>) -> Fut,
    Fut: Future<Output = Result<Vec<I>, E>>,
{
    if ids.is_empty() {
        return Ok(None);
    }

    let found: HashSet<I> = exists_by_ids(ids.to_vec()).await?.into_iter().collect();
    let missing: Vec<&str> =
        ids.iter().filter(|id| !found.contains(id)).map(Identifier::value).collect();

    if missing.is_empty() {
        Ok(None)
    } else {
        Ok(Some(ValidationError::new(format!(
            "Some {label} could not be found: {}",
            missing.join(", ")
        ))))
    }
}
