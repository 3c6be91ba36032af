use validator::Validate;

use crate::domain::salesperson::{NewSalesperson, Salesperson, UpdateSalesperson};
use crate::forms::salespersons::{AddSalespersonForm, UpdateSalespersonForm};
use crate::repository::{SalespersonReader, SalespersonWriter};
use crate::services::auth::hash_password;
use crate::services::{ServiceError, ServiceResult};

/// Creates a salesperson account, hashing the password before storage.
pub fn create_salesperson<R>(repo: &R, form: AddSalespersonForm) -> ServiceResult<Salesperson>
where
    R: SalespersonWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let new_salesperson = NewSalesperson {
        name: form.name,
        email: form.email.to_lowercase(),
        phone: form.phone,
        password_hash: hash_password(&form.password)?,
    };

    repo.create_salesperson(&new_salesperson)
        .map_err(ServiceError::from)
}

pub fn modify_salesperson<R>(
    repo: &R,
    salesperson_id: i32,
    form: UpdateSalespersonForm,
) -> ServiceResult<Salesperson>
where
    R: SalespersonWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    // Login compares against the lowercased email, so a replacement must be
    // folded the same way the original was at creation.
    let mut updates: UpdateSalesperson = form.into();
    if let Some(email) = updates.email.as_mut() {
        *email = email.to_lowercase();
    }

    repo.update_salesperson(salesperson_id, &updates)
        .map_err(ServiceError::from)
}

/// Soft-deletes a salesperson so historical orders stay attributable.
pub fn deactivate_salesperson<R>(repo: &R, salesperson_id: i32) -> ServiceResult<()>
where
    R: SalespersonWriter + ?Sized,
{
    repo.deactivate_salesperson(salesperson_id)
        .map_err(ServiceError::from)
}

pub fn get_salesperson<R>(repo: &R, salesperson_id: i32) -> ServiceResult<Salesperson>
where
    R: SalespersonReader + ?Sized,
{
    repo.get_salesperson_by_id(salesperson_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_salespersons<R>(repo: &R) -> ServiceResult<Vec<Salesperson>>
where
    R: SalespersonReader + ?Sized,
{
    repo.list_salespersons().map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::salesperson::SalespersonStatus;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockSalespersonWriter;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .unwrap_or_default()
    }

    fn add_form() -> AddSalespersonForm {
        AddSalespersonForm {
            name: "Asha".to_string(),
            email: "Asha@Example.com".to_string(),
            phone: None,
            password: "correct horse battery".to_string(),
        }
    }

    #[test]
    fn create_salesperson_stores_hash_and_lowercased_email() {
        let mut repo = MockSalespersonWriter::new();

        repo.expect_create_salesperson()
            .times(1)
            .withf(|new_salesperson| {
                assert_eq!(new_salesperson.email, "asha@example.com");
                assert_ne!(new_salesperson.password_hash, "correct horse battery");
                assert!(new_salesperson.password_hash.starts_with("$argon2"));
                true
            })
            .returning(|new_salesperson| {
                Ok(Salesperson {
                    id: 2,
                    name: new_salesperson.name.clone(),
                    email: new_salesperson.email.clone(),
                    phone: new_salesperson.phone.clone(),
                    password_hash: new_salesperson.password_hash.clone(),
                    status: SalespersonStatus::Active,
                    created_at: fixed_datetime(),
                })
            });

        let created = create_salesperson(&repo, add_form()).expect("expected success");

        assert_eq!(created.id, 2);
    }

    #[test]
    fn modify_salesperson_lowercases_replacement_email() {
        let mut repo = MockSalespersonWriter::new();

        repo.expect_update_salesperson()
            .times(1)
            .withf(|salesperson_id, updates| {
                assert_eq!(*salesperson_id, 2);
                assert_eq!(updates.email.as_deref(), Some("asha@new.example.com"));
                true
            })
            .returning(|salesperson_id, _| {
                Ok(Salesperson {
                    id: salesperson_id,
                    name: "Asha".to_string(),
                    email: "asha@new.example.com".to_string(),
                    phone: None,
                    password_hash: "$argon2id$fake".to_string(),
                    status: SalespersonStatus::Active,
                    created_at: fixed_datetime(),
                })
            });

        let form = UpdateSalespersonForm {
            name: None,
            email: Some("Asha@New.Example.com".to_string()),
            phone: None,
            status: None,
        };

        let updated = modify_salesperson(&repo, 2, form).expect("expected success");

        assert_eq!(updated.email, "asha@new.example.com");
    }

    #[test]
    fn create_salesperson_maps_duplicate_email_to_conflict() {
        let mut repo = MockSalespersonWriter::new();

        repo.expect_create_salesperson()
            .times(1)
            .returning(|_| Err(RepositoryError::Conflict));

        let result = create_salesperson(&repo, add_form());

        assert!(matches!(result, Err(ServiceError::Conflict)));
    }

    #[test]
    fn create_salesperson_rejects_short_password_without_touching_repo() {
        let repo = MockSalespersonWriter::new();
        let mut form = add_form();
        form.password = "short".to_string();

        let result = create_salesperson(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
