//! Entity schemas: which table backs each admin screen and how its fields
//! are rendered, validated and listed.
//!
//! DESIGN
//! ======
//! Screens are generic over a schema instead of hand-written per entity.
//! [`FieldKind`] is a closed set, so every renderer matches it exhaustively.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    TextArea,
    Select(&'static [SelectOption]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { name, label, kind, required }
}

/// Column shown in list views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub header: &'static str,
}

const fn column(field: &'static str, header: &'static str) -> ColumnSpec {
    ColumnSpec { field, header }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub table: &'static str,
    pub title: &'static str,
    pub singular: &'static str,
    pub fields: &'static [FieldSpec],
    pub columns: &'static [ColumnSpec],
    /// Fields matched by the list filter box.
    pub searchable: &'static [&'static str],
    pub order_by: &'static str,
    pub ascending: bool,
}

impl EntitySchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Students,
    Courses,
    Modules,
    Assignments,
    Jobs,
    Certificates,
}

impl EntityKind {
    pub const ALL: [Self; 6] = [
        Self::Students,
        Self::Courses,
        Self::Modules,
        Self::Assignments,
        Self::Jobs,
        Self::Certificates,
    ];

    #[must_use]
    pub fn schema(self) -> &'static EntitySchema {
        match self {
            Self::Students => &STUDENTS,
            Self::Courses => &COURSES,
            Self::Modules => &MODULES,
            Self::Assignments => &ASSIGNMENTS,
            Self::Jobs => &JOBS,
            Self::Certificates => &CERTIFICATES,
        }
    }

    /// URL segment under `/admin/`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.schema().table
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    #[must_use]
    pub fn admin_path(self) -> String {
        format!("/admin/{}", self.slug())
    }
}

const STUDENT_STATUS: &[SelectOption] = &[
    option("active", "Active"),
    option("inactive", "Inactive"),
    option("graduated", "Graduated"),
];

const COURSE_LEVEL: &[SelectOption] = &[
    option("beginner", "Beginner"),
    option("intermediate", "Intermediate"),
    option("advanced", "Advanced"),
];

const JOB_TYPE: &[SelectOption] = &[
    option("full-time", "Full-time"),
    option("part-time", "Part-time"),
    option("internship", "Internship"),
    option("contract", "Contract"),
];

const CERTIFICATE_STATUS: &[SelectOption] = &[option("issued", "Issued"), option("revoked", "Revoked")];

static STUDENTS: EntitySchema = EntitySchema {
    kind: EntityKind::Students,
    table: "students",
    title: "Students",
    singular: "Student",
    fields: &[
        field("full_name", "Full name", FieldKind::Text, true),
        field("email", "Email", FieldKind::Text, true),
        field("phone", "Phone", FieldKind::Text, false),
        field("course_id", "Course ID", FieldKind::Text, false),
        field("status", "Status", FieldKind::Select(STUDENT_STATUS), true),
    ],
    columns: &[
        column("full_name", "Name"),
        column("email", "Email"),
        column("phone", "Phone"),
        column("status", "Status"),
    ],
    searchable: &["full_name", "email", "phone"],
    order_by: "created_at",
    ascending: false,
};

static COURSES: EntitySchema = EntitySchema {
    kind: EntityKind::Courses,
    table: "courses",
    title: "Courses",
    singular: "Course",
    fields: &[
        field("title", "Title", FieldKind::Text, true),
        field("description", "Description", FieldKind::TextArea, false),
        field("instructor", "Instructor", FieldKind::Text, false),
        field("duration", "Duration", FieldKind::Text, false),
        field("level", "Level", FieldKind::Select(COURSE_LEVEL), true),
        field("price", "Price", FieldKind::Number, false),
    ],
    columns: &[
        column("title", "Title"),
        column("instructor", "Instructor"),
        column("duration", "Duration"),
        column("level", "Level"),
        column("price", "Price"),
    ],
    searchable: &["title", "instructor", "description"],
    order_by: "created_at",
    ascending: false,
};

static MODULES: EntitySchema = EntitySchema {
    kind: EntityKind::Modules,
    table: "modules",
    title: "Modules",
    singular: "Module",
    fields: &[
        field("course_id", "Course ID", FieldKind::Text, true),
        field("title", "Title", FieldKind::Text, true),
        field("content", "Content", FieldKind::TextArea, false),
        field("order_index", "Order", FieldKind::Number, true),
    ],
    columns: &[
        column("order_index", "#"),
        column("title", "Title"),
        column("course_id", "Course"),
    ],
    searchable: &["title", "course_id"],
    order_by: "order_index",
    ascending: true,
};

static ASSIGNMENTS: EntitySchema = EntitySchema {
    kind: EntityKind::Assignments,
    table: "assignments",
    title: "Assignments",
    singular: "Assignment",
    fields: &[
        field("course_id", "Course ID", FieldKind::Text, true),
        field("title", "Title", FieldKind::Text, true),
        field("description", "Description", FieldKind::TextArea, false),
        field("due_date", "Due date (YYYY-MM-DD)", FieldKind::Text, false),
        field("max_score", "Max score", FieldKind::Number, false),
    ],
    columns: &[
        column("title", "Title"),
        column("course_id", "Course"),
        column("due_date", "Due"),
        column("max_score", "Max score"),
    ],
    searchable: &["title", "course_id"],
    order_by: "due_date",
    ascending: true,
};

static JOBS: EntitySchema = EntitySchema {
    kind: EntityKind::Jobs,
    table: "jobs",
    title: "Jobs",
    singular: "Job",
    fields: &[
        field("title", "Title", FieldKind::Text, true),
        field("company", "Company", FieldKind::Text, true),
        field("location", "Location", FieldKind::Text, false),
        field("job_type", "Type", FieldKind::Select(JOB_TYPE), true),
        field("description", "Description", FieldKind::TextArea, false),
        field("apply_url", "Application link", FieldKind::Text, false),
    ],
    columns: &[
        column("title", "Title"),
        column("company", "Company"),
        column("location", "Location"),
        column("job_type", "Type"),
    ],
    searchable: &["title", "company", "location"],
    order_by: "created_at",
    ascending: false,
};

static CERTIFICATES: EntitySchema = EntitySchema {
    kind: EntityKind::Certificates,
    table: "certificates",
    title: "Certificates",
    singular: "Certificate",
    fields: &[
        field("certificate_number", "Certificate number", FieldKind::Text, true),
        field("student_id", "Student ID", FieldKind::Text, true),
        field("course_id", "Course ID", FieldKind::Text, true),
        field("issued_at", "Issued on (YYYY-MM-DD)", FieldKind::Text, false),
        field("status", "Status", FieldKind::Select(CERTIFICATE_STATUS), true),
    ],
    columns: &[
        column("certificate_number", "Number"),
        column("student_id", "Student"),
        column("course_id", "Course"),
        column("issued_at", "Issued"),
        column("status", "Status"),
    ],
    searchable: &["certificate_number", "student_id", "course_id"],
    order_by: "issued_at",
    ascending: false,
};

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;
