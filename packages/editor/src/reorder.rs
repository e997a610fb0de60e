//! Drag reorder. Invoked once per completed gesture, never per pointer tick;
//! intermediate drag positions are presentation-only.

use bistro_model::Section;

/// Move the section identified by `source_id` to the position currently held
/// by `target_id` (move-before-target: non-moved sections keep their relative
/// order and shift by at most one).
///
/// Total: `source == target`, or either id absent (deleted mid-drag), leaves
/// the sequence untouched.
pub fn reorder(sections: &mut Vec<Section>, source_id: &str, target_id: &str) {
    if source_id == target_id {
        return;
    }

    let from = match sections.iter().position(|s| s.id() == source_id) {
        Some(index) => index,
        None => return,
    };
    let to = match sections.iter().position(|s| s.id() == target_id) {
        Some(index) => index,
        None => return,
    };

    let section = sections.remove(from);
    // Removing from the left shifts the target one slot down.
    let insert_at = if from < to { to - 1 } else { to };
    sections.insert(insert_at, section);
}
