//! HTML pages rendered with tera
//!
//! Templates are compiled into the binary and registered together so
//! `extends` and `include` resolve without a templates directory at runtime.

use serde::Serialize;
use staffdb_domain::{Department, EmployeeRecord};
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (
        "employee_table.html",
        include_str!("../../templates/employee_table.html"),
    ),
    ("index.html", include_str!("../../templates/index.html")),
    ("view.html", include_str!("../../templates/view.html")),
    ("add.html", include_str!("../../templates/add.html")),
    ("update.html", include_str!("../../templates/update.html")),
    ("delete.html", include_str!("../../templates/delete.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// One table row; the storage id is shown stringified
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeView {
    pub record_id: String,
    pub employee_id: i64,
    pub full_name: String,
    pub age: u8,
    pub department: &'static str,
}

impl From<&EmployeeRecord> for EmployeeView {
    fn from(record: &EmployeeRecord) -> Self {
        let employee = record.employee();
        Self {
            record_id: record.record_id().to_string(),
            employee_id: employee.id().value(),
            full_name: employee.full_name().to_string(),
            age: employee.age(),
            department: employee.department().display_name(),
        }
    }
}

/// Renders every page the controller serves
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Homepage: every employee, possibly none
    pub fn home(&self, records: &[EmployeeRecord]) -> Result<String, ViewError> {
        self.render("index.html", &employees_context(records))
    }

    /// List/search results
    pub fn employee_list(&self, records: &[EmployeeRecord]) -> Result<String, ViewError> {
        self.render("view.html", &employees_context(records))
    }

    pub fn add_form(&self) -> Result<String, ViewError> {
        self.render("add.html", &departments_context())
    }

    pub fn update_form(&self) -> Result<String, ViewError> {
        self.render("update.html", &departments_context())
    }

    pub fn delete_form(&self) -> Result<String, ViewError> {
        self.render("delete.html", &Context::new())
    }

    /// The shared error view: a list of messages
    pub fn error_page(&self, errors: &[String]) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("errors", errors);
        self.render("error.html", &context)
    }

    fn render(&self, template: &str, context: &Context) -> Result<String, ViewError> {
        Ok(self.tera.render(template, context)?)
    }
}

fn employees_context(records: &[EmployeeRecord]) -> Context {
    let employees: Vec<EmployeeView> = records.iter().map(EmployeeView::from).collect();
    let mut context = Context::new();
    context.insert("employees", &employees);
    context
}

fn departments_context() -> Context {
    let departments: Vec<&'static str> = Department::all()
        .iter()
        .map(|d| d.display_name())
        .collect();
    let mut context = Context::new();
    context.insert("departments", &departments);
    context
}
