use planfork_types::{CourseId, OrderedSet, PlanSnapshot};

/// Compute the union merge of two snapshots.
///
/// All three fields merge as uniquing unions that keep `target`'s order
/// first, then append elements only present in `source`:
///
/// - `fav_courses` and `fav_events` are true set unions — idempotent,
///   commutative and associative on membership.
/// - `courses` is de-duplicated by the union even though direct adds allow
///   duplicates. A branch can therefore hold `["CS101", "CS101"]` until its
///   first merge collapses the pair. This asymmetry is intended.
///
/// The `courses` ordering depends on which side is the target, so
/// `merge(a, b)` and `merge(b, a)` agree on membership for every field but
/// may order `courses` differently.
pub fn merge(target: &PlanSnapshot, source: &PlanSnapshot) -> PlanSnapshot {
    let courses: OrderedSet<CourseId> = target
        .courses
        .iter()
        .chain(source.courses.iter())
        .cloned()
        .collect();

    PlanSnapshot {
        courses: courses.into(),
        fav_courses: target.fav_courses.union(&source.fav_courses),
        fav_events: target.fav_events.union(&source.fav_events),
    }
}

/// The commit message recorded on the target branch for a merge.
pub fn merge_message(source_name: &str) -> String {
    format!("Merged branch {source_name}")
}
