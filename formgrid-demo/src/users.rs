//! Sample directory shown in the table.

use chrono::NaiveDate;
use formgrid::{Column, Record, Theme, Value};
use termdom::{Element, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
    Role,
    Status,
    CreatedAt,
}

impl Record for User {
    type Field = UserField;

    fn value(&self, field: UserField) -> Value {
        match field {
            UserField::Id => self.id.into(),
            UserField::Name => (&self.name).into(),
            UserField::Email => (&self.email).into(),
            UserField::Role => (&self.role).into(),
            UserField::Status => self.status.as_str().into(),
            UserField::CreatedAt => self.created_at.into(),
        }
    }

    fn id_field() -> Option<UserField> {
        Some(UserField::Id)
    }
}

impl User {
    /// Case-insensitive match on name or email. `query` must be lowercase.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.email.to_lowercase().contains(query)
    }
}

const SAMPLE: [(i64, &str, &str, &str, Status, u32); 5] = [
    (1, "John Doe", "john@example.com", "Admin", Status::Active, 15),
    (2, "Jane Smith", "jane@example.com", "User", Status::Active, 20),
    (3, "Bob Johnson", "bob@example.com", "Editor", Status::Inactive, 10),
    (4, "Alice Brown", "alice@example.com", "User", Status::Active, 25),
    (5, "Charlie Wilson", "charlie@example.com", "Admin", Status::Inactive, 5),
];

pub fn sample_users() -> Vec<User> {
    SAMPLE
        .iter()
        .filter_map(|&(id, name, email, role, status, day)| {
            Some(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                role: role.to_string(),
                status,
                created_at: NaiveDate::from_ymd_opt(2024, 1, day)?,
            })
        })
        .collect()
}

pub fn columns(theme: Theme) -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", UserField::Name)
            .sortable()
            .width(20),
        Column::new("email", "Email", UserField::Email).sortable(),
        Column::new("role", "Role", UserField::Role)
            .sortable()
            .width(12),
        Column::new("status", "Status", UserField::Status)
            .sortable()
            .width(12)
            .render(move |value, _user: &User, _index| {
                let color = if value.as_str() == Some(Status::Active.as_str()) {
                    theme.success
                } else {
                    theme.error
                };
                Element::text(value.to_string()).style(Style::new().foreground(color).bold())
            }),
        Column::new("created-at", "Created At", UserField::CreatedAt)
            .sortable()
            .width(14),
    ]
}
