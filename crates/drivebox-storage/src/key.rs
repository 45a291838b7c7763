//! Object-key generation.
//!
//! Keys are not content-addressed: duplicate content is stored twice.
//! Collision avoidance comes from a millisecond timestamp plus a random
//! suffix, with the original extension preserved so served objects keep
//! a recognizable name.

use chrono::Utc;
use rand::Rng;

/// Generate a unique object key for an uploaded file.
///
/// The key has the shape `{subfolder}/{stem}-{millis}-{hex16}{ext}`;
/// without a subfolder the leading path segment is omitted. The file
/// name and subfolder both originate from clients, so directory
/// prefixes and traversal segments are stripped before they can steer
/// the key outside its subfolder.
pub fn generate_object_key(original_name: &str, subfolder: Option<&str>) -> String {
    let (stem, ext) = split_extension(base_name(original_name));
    let stem = if stem.trim_matches('.').is_empty() {
        "file"
    } else {
        stem
    };
    let timestamp = Utc::now().timestamp_millis();
    let random: [u8; 8] = rand::thread_rng().gen();
    let suffix: String = random.iter().map(|b| format!("{b:02x}")).collect();

    let filename = format!("{stem}-{timestamp}-{suffix}{ext}");
    match subfolder.map(clean_subfolder) {
        Some(sub) if !sub.is_empty() => format!("{sub}/{filename}"),
        _ => filename,
    }
}

/// Final path component of a client-supplied name, treating both `/` and
/// `\` as separators.
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Drop empty, `.` and `..` segments from a subfolder path.
fn clean_subfolder(sub: &str) -> String {
    sub.split(['/', '\\'])
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a file name into stem and extension (extension includes the dot).
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name.split_at(pos),
        _ => (name, ""),
    }
}
