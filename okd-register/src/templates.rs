use crate::error::FieldErrors;
use crate::models::submission::FormValues;
use chrono::{Datelike, Utc};
use minijinja::{Environment, context};

/// The service's HTML pages, parsed once at startup
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// # Errors
    ///
    /// - If one of the bundled templates doesn't parse
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("landing.html", include_str!("../templates/landing.html"))?;
        env.add_template("register.html", include_str!("../templates/register.html"))?;

        Ok(Self { env })
    }

    /// # Errors
    ///
    /// - If rendering fails
    pub fn landing(&self) -> Result<String, minijinja::Error> {
        self.env
            .get_template("landing.html")?
            .render(context! { year => Utc::now().year() })
    }

    /// The registration form, refilled with `values` and annotated with `errors`
    ///
    /// # Errors
    ///
    /// - If rendering fails
    pub fn register(
        &self,
        values: &FormValues,
        errors: &FieldErrors,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("register.html")?.render(context! {
            year => Utc::now().year(),
            values => values,
            errors => errors.messages(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use okd_core::status::ErrorCode;

    #[test]
    fn landing_has_register_link_and_disabled_placeholders() {
        let html = Templates::new().unwrap().landing().unwrap();
        assert!(html.contains("href=\"/register\""));
        assert!(html.contains("Browse Profiles"));
        assert!(html.contains("Admin Login"));
        assert!(!html.contains("href=\"/browse\""));
    }

    #[test]
    fn register_form_is_refilled_and_escaped() {
        let values = FormValues {
            name: Some("<b>Asha</b>".to_string()),
            age: Some("abc".to_string()),
            ..FormValues::default()
        };
        let errors = FieldErrors::single(
            Field::Age,
            ErrorCode::InvalidFormat,
            "Age must be a valid positive number",
        );

        let html = Templates::new().unwrap().register(&values, &errors).unwrap();
        assert!(html.contains("&lt;b&gt;Asha"));
        assert!(!html.contains("<b>Asha"));
        assert!(html.contains("value=\"abc\""));
        assert!(html.contains("Age must be a valid positive number"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn form_level_error_is_shown_as_alert() {
        let errors = FieldErrors::single(
            Field::Form,
            ErrorCode::Database,
            "Failed to add user to the database.",
        );

        let html = Templates::new()
            .unwrap()
            .register(&FormValues::default(), &errors)
            .unwrap();
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Failed to add user to the database."));
    }
}
