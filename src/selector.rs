use crate::detector::Detection;

/// Picks the best ball candidate for a frame: among detections whose class
/// name equals `target_class`, the one with the strictly greatest confidence.
/// Ties keep the earliest-seen maximum, because replacement requires a
/// strictly greater confidence. Returns `None` when no candidate matches,
/// which is a normal outcome, not an error.
pub fn select_ball<'a>(detections: &'a [Detection], target_class: &str) -> Option<&'a Detection> {
    detections
        .iter()
        .filter(|det| det.class_name == target_class)
        .fold(None, |best, det| match best {
            Some(current) if det.confidence > current.confidence => Some(det),
            None => Some(det),
            _ => best,
        })
}
