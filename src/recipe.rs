use mongodb::bson::{Bson, Document};
use serde_json::Value as JsonValue;

/// Default number of recipes returned by the list endpoint
pub const DEFAULT_LIMIT: i64 = 10;

fn is_falsy(value: &Bson) -> bool {
    match value {
        Bson::Null => true,
        Bson::Boolean(b) => !b,
        Bson::Int32(n) => *n == 0,
        Bson::Int64(n) => *n == 0,
        Bson::Double(d) => *d == 0.0 || d.is_nan(),
        Bson::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Normalize a caller-supplied `categories` value to an array.
///
/// Arrays pass through verbatim, a single truthy scalar is wrapped into a
/// one-element array, and absent or falsy values produce an empty array.
pub fn normalize_categories(value: Option<Bson>) -> Bson {
    match value {
        Some(Bson::Array(items)) => Bson::Array(items),
        Some(single) if !is_falsy(&single) => Bson::Array(vec![single]),
        _ => Bson::Array(Vec::new()),
    }
}

fn integer_likes(value: Option<Bson>) -> i64 {
    let likes = match value {
        Some(Bson::Int32(n)) => i64::from(n),
        Some(Bson::Int64(n)) => n,
        Some(Bson::Double(d)) if d.fract() == 0.0 && d.is_finite() => d as i64,
        _ => 0,
    };
    likes.max(0)
}

/// Shape a request body into a new recipe document.
///
/// Caller-supplied fields are kept verbatim, `categories` is normalized to an
/// array, `likes` starts at 0 regardless of input, and `isPublic` defaults to
/// true when the key is absent.
pub fn shape_new_recipe(mut body: Document) -> Document {
    let categories = normalize_categories(body.remove("categories"));
    body.insert("categories", categories);
    body.insert("likes", 0i64);
    if !body.contains_key("isPublic") {
        body.insert("isPublic", true);
    }
    body
}

/// Shape a request body into the `$set` fields of a recipe update.
///
/// Fields absent from the body are left untouched on the stored document,
/// except `categories` (recomputed with the create normalization) and `likes`
/// (recomputed from the body, 0 when absent or non-integer).
pub fn shape_update(mut body: Document) -> Document {
    let categories = normalize_categories(body.remove("categories"));
    body.insert("categories", categories);
    let likes = integer_likes(body.remove("likes"));
    body.insert("likes", likes);
    body
}

/// Convert a stored recipe document into a JSON response value.
///
/// The `_id` ObjectId is flattened to its hex string form; everything else
/// follows relaxed extended JSON, which renders plain numbers and strings.
pub fn recipe_to_json(doc: Document) -> JsonValue {
    let mut value = Bson::Document(doc).into_relaxed_extjson();
    if let Some(fields) = value.as_object_mut() {
        if let Some(hex) = fields.get("_id").and_then(|id| id.get("$oid")).cloned() {
            fields.insert("_id".to_string(), hex);
        }
    }
    value
}
