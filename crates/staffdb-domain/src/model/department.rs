//! Department - The closed set of organisational units
//!
//! Department is a Value Object - two departments with the same variant are equal.
//! The same list drives validation and the department picker on the forms.

/// The five departments an employee can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Department {
    InformationTechnology,
    HumanResources,
    Marketing,
    Finance,
    Operations,
}

impl Department {
    /// Get the canonical (title case) label of this department
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::InformationTechnology => "Information Technology",
            Department::HumanResources => "Human Resources",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }

    /// Get all departments in display order
    pub fn all() -> &'static [Department] {
        &[
            Department::InformationTechnology,
            Department::HumanResources,
            Department::Marketing,
            Department::Finance,
            Department::Operations,
        ]
    }

    /// Resolve a department from user input
    ///
    /// Matching ignores case, so `"human resources"` and `"HUMAN RESOURCES"`
    /// both resolve to [`Department::HumanResources`]. Anything that is not one
    /// of the five labels returns `None`.
    pub fn parse(input: &str) -> Option<Department> {
        Department::all()
            .iter()
            .copied()
            .find(|d| d.display_name().eq_ignore_ascii_case(input))
    }

    /// Comma separated list of every label, as shown in error messages
    pub fn choices() -> String {
        Department::all()
            .iter()
            .map(|d| d.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
