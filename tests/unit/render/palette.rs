//! Tests for colour classes

#[cfg(test)]
mod tests {
    use algoviz::algorithm::snapshot::Role;
    use algoviz::render::palette::ColorClass;
    use std::collections::HashSet;

    const ALL: [ColorClass; 16] = [
        ColorClass::Default,
        ColorClass::Comparing,
        ColorClass::Swapping,
        ColorClass::Pivot,
        ColorClass::Minimum,
        ColorClass::Placing,
        ColorClass::Probe,
        ColorClass::Bound,
        ColorClass::Found,
        ColorClass::Eliminated,
        ColorClass::Sorted,
        ColorClass::Visited,
        ColorClass::Current,
        ColorClass::Stacked,
        ColorClass::Unreached,
        ColorClass::Empty,
    ];

    // Tests every class has its own opaque colour
    // Verified by giving probes the comparison colour
    #[test]
    fn test_colours_are_distinct_and_opaque() {
        let colours: HashSet<[u8; 4]> = ALL.iter().map(|c| c.rgba()).collect();
        assert_eq!(colours.len(), ALL.len());
        assert!(ALL.iter().all(|c| c.rgba()[3] == 255));
    }

    // Tests roles map to their matching classes
    // Verified by mapping Found to Sorted
    #[test]
    fn test_from_role() {
        assert_eq!(ColorClass::from_role(Role::Comparing), ColorClass::Comparing);
        assert_eq!(ColorClass::from_role(Role::Pivot), ColorClass::Pivot);
        assert_eq!(ColorClass::from_role(Role::Found), ColorClass::Found);
        assert_eq!(ColorClass::from_role(Role::Current), ColorClass::Current);
        assert_eq!(ColorClass::default(), ColorClass::Default);
    }
}
