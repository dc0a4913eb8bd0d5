use crate::domain::sections::SectionId;

/// Canonical draw order for a configuration's section list.
///
/// Known sections sort by their fixed priority; ids outside the registry sink
/// to the end. The sort is stable, so duplicates and unknown ids keep their
/// relative input order.
pub fn order_sections(ids: &[SectionId]) -> Vec<SectionId> {
    let mut ordered = ids.to_vec();
    ordered.sort_by_key(|id| id.known().map_or(usize::MAX, |kind| kind.priority()));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<SectionId> {
        raw.iter().copied().map(SectionId::from).collect()
    }

    fn names(ordered: &[SectionId]) -> Vec<&str> {
        ordered.iter().map(SectionId::as_str).collect()
    }

    #[test]
    fn canonical_order_ignores_input_order() {
        let ordered = order_sections(&ids(&["contact", "hero", "navbar"]));
        assert_eq!(names(&ordered), ["navbar", "hero", "contact"]);
    }

    #[test]
    fn unknown_ids_sink_and_stay_stable() {
        let ordered = order_sections(&ids(&["zeta", "totally-unknown", "hero", "alpha"]));
        assert_eq!(names(&ordered), ["hero", "zeta", "totally-unknown", "alpha"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let ordered = order_sections(&ids(&["hero", "footer", "hero"]));
        assert_eq!(names(&ordered), ["hero", "hero", "footer"]);
    }

    #[test]
    fn empty_list_orders_to_empty() {
        assert!(order_sections(&[]).is_empty());
    }
}
