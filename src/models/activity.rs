//! Activity taxonomy of the placement record book.

/// Code → label, in the order the record book lists them.
pub const ACTIVITIES: [(&str, &str); 17] = [
    ("1.1", "Conduct preliminary investigations"),
    ("1.2", "Carry out feasibility study"),
    ("2.1", "Analyze current system"),
    ("2.2", "Identify requirements"),
    ("3.1", "Design data (ERD, DFD)"),
    ("3.2", "Design process outlines"),
    ("4.1", "Program design"),
    ("4.2", "Program code"),
    ("4.3", "Test programs"),
    ("5.1", "Testing module"),
    ("5.2", "Integration testing"),
    ("6.1", "Educate and train users"),
    ("9.1", "Maintenance/Bug Fixing"),
    ("12.1", "Project Management"),
    ("19.1", "Cybersecurity / Security"),
    ("22.1", "Cloud Computing Tasks"),
    ("Other", "General / Administrative"),
];

pub fn activity_label(code: &str) -> Option<&'static str> {
    ACTIVITIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, label)| *label)
}

pub fn is_known_activity(code: &str) -> bool {
    activity_label(code).is_some()
}

/// Accepts either a bare code ("4.2") or a "code - label" string as shown in
/// selection lists, returning the canonical code.
pub fn normalize_code(input: &str) -> Option<&'static str> {
    let code = input.split(" - ").next().unwrap_or(input).trim();
    ACTIVITIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(c, _)| *c)
}
