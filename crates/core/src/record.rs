//! Table row shapes.
//!
//! Every shape declares its canonical field order and the labels the view
//! renders around it. Two shapes exist: [`Character`] rows fetched from the
//! people listing endpoint and [`Member`] rows seeded locally.

use serde::{Deserialize, Serialize};

use crate::draft::Draft;

/// One editable form field: the key in the draft and its input label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
}

/// A displayable table row.
pub trait Record: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Heading shown above the table.
    const TITLE: &'static str;
    /// Column header, pipe-joined in canonical field order.
    const HEADER: &'static str;
    /// Heading shown above the new-row form.
    const FORM_TITLE: &'static str;
    /// Label of the control that submits the draft.
    const ACTION_LABEL: &'static str;
    /// Fields a user fills in to create a row, in form order.
    const DRAFT_FIELDS: &'static [FieldSpec];

    /// Field values in canonical display order.
    fn columns(&self) -> Vec<String>;

    /// Build a row from a complete draft. `existing` is the number of rows
    /// already in the table.
    fn from_draft(draft: &Draft, existing: usize) -> Self;

    /// The row as one pipe-joined display line.
    fn display_line(&self) -> String {
        self.columns().join(" | ")
    }
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// A person entry from the people listing endpoint.
///
/// Only the four displayed fields are kept; everything else in the JSON
/// object is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
}

impl Record for Character {
    const TITLE: &'static str = "Star Wars Characters";
    const HEADER: &'static str = "Name | Height | Mass | Hair Color";
    const FORM_TITLE: &'static str = "Add New Character";
    const ACTION_LABEL: &'static str = "Add Character";
    const DRAFT_FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "name", placeholder: "Name" },
        FieldSpec { name: "height", placeholder: "Height" },
        FieldSpec { name: "mass", placeholder: "Mass" },
        FieldSpec { name: "hair_color", placeholder: "Hair Color" },
    ];

    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.height.clone(),
            self.mass.clone(),
            self.hair_color.clone(),
        ]
    }

    fn from_draft(draft: &Draft, _existing: usize) -> Self {
        let field = |name: &str| draft.get(name).unwrap_or_default().to_string();
        Self {
            name: field("name"),
            height: field("height"),
            mass: field("mass"),
            hair_color: field("hair_color"),
        }
    }
}

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// A locally seeded team member row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Sequential position (`row count + 1` at insertion), not a durable key.
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

impl Record for Member {
    const TITLE: &'static str = "Dynamic Table Using Lists";
    const HEADER: &'static str = "ID | Name | Email | Role";
    const FORM_TITLE: &'static str = "Add New Row";
    const ACTION_LABEL: &'static str = "Add Row";
    const DRAFT_FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "name", placeholder: "Name" },
        FieldSpec { name: "email", placeholder: "Email" },
        FieldSpec { name: "role", placeholder: "Role" },
    ];

    fn columns(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
        ]
    }

    fn from_draft(draft: &Draft, existing: usize) -> Self {
        let field = |name: &str| draft.get(name).unwrap_or_default().to_string();
        Self {
            id: u32::try_from(existing + 1).unwrap_or(u32::MAX),
            name: field("name"),
            email: field("email"),
            role: field("role"),
        }
    }
}
