//! Fixed field lists for parent/guardian and student records.
//!
//! The editor prompts for these fields, in this order, whenever an entry is
//! created or edited. Stored files may carry other fields or a different order;
//! the lists only describe what the editor asks for.

/// Fields collected for a parent or guardian.
pub const PARENT_FIELDS: &[&str] = &[
    "Last Name",
    "First Name",
    "Middle Name",
    "Extension Name",
    "Address",
    "Sex",
    "Civil Status",
    "Date of Birth",
    "Contact Number",
    "Occupation",
    "Monthly Salary",
    "Relationship to Beneficiary",
];

/// Fields collected for a student.
pub const STUDENT_FIELDS: &[&str] = &[
    "Last Name",
    "First Name",
    "Middle Name",
    "Extension Name",
    "Address",
    "Date of Birth",
    "Sex",
    "Year Level",
    "Civil Status",
    "Contact Number",
    "Occupation",
    "Monthly Salary",
];

/// The pair of field lists handed to components that build entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLists {
    /// Parent/guardian field names, in prompt order.
    pub parent: &'static [&'static str],
    /// Student field names, in prompt order.
    pub student: &'static [&'static str],
}

impl FieldLists {
    /// Create field lists from explicit name slices.
    #[must_use]
    pub const fn new(parent: &'static [&'static str], student: &'static [&'static str]) -> Self {
        Self { parent, student }
    }
}

impl Default for FieldLists {
    fn default() -> Self {
        Self::new(PARENT_FIELDS, STUDENT_FIELDS)
    }
}
