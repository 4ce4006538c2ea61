use std::path::PathBuf;

/// Composite sort key parsed from a frame file name.
///
/// Ordering is lexicographic on `(morph, frame)`, which puts all frames of
/// one morph pass together before the next pass starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameKey {
    pub morph: u64,
    pub frame: u64,
}

impl FrameKey {
    pub fn new(morph: u64, frame: u64) -> Self {
        Self { morph, frame }
    }
}

/// Extract the `(morph, frame)` key from a file name like
/// `img-morph2-frame6.png`.
///
/// The morph index comes from the first `morph` tag directly followed by
/// digits; the frame index from the *last* `frame` tag with digits after it.
/// Names missing either tag key to `(0, 0)` so the function stays total and
/// unparseable files sort first, keeping their relative order under a stable
/// sort.
pub fn extract_frame_key(name: &str) -> FrameKey {
    let Some((morph, rest)) = scan_tagged_number(name, "morph") else {
        return FrameKey::default();
    };

    let mut frame = None;
    let mut remainder = rest;
    while let Some((value, next)) = scan_tagged_number(remainder, "frame") {
        frame = Some(value);
        remainder = next;
    }

    match frame {
        Some(frame) => FrameKey { morph, frame },
        None => FrameKey::default(),
    }
}

/// Stable-sort `paths` by the [`FrameKey`] of each file name and keep the
/// first `take` entries.
pub fn sort_by_frame_key(mut paths: Vec<PathBuf>, take: usize) -> Vec<PathBuf> {
    paths.sort_by_key(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(extract_frame_key)
            .unwrap_or_default()
    });
    paths.truncate(take);
    paths
}

/// Find the first occurrence of `tag` that is directly followed by at least
/// one ASCII digit; return the parsed digit run and the remainder after it.
///
/// A digit run too large for `u64` is treated as a miss for that occurrence.
fn scan_tagged_number<'a>(haystack: &'a str, tag: &str) -> Option<(u64, &'a str)> {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(tag).map(|p| p + from) {
        let digits_start = pos + tag.len();
        let digits_len = haystack[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits_len > 0 {
            let digits_end = digits_start + digits_len;
            if let Ok(value) = haystack[digits_start..digits_end].parse::<u64>() {
                return Some((value, &haystack[digits_end..]));
            }
        }
        from = pos + tag.len();
    }
    None
}
