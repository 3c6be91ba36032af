use validator::Validate;

use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, UpdateProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&form.into()).map_err(ServiceError::from)
}

pub fn modify_product<R>(repo: &R, product_id: i32, form: UpdateProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &form.into())
        .map_err(ServiceError::from)
}

pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_products<R>(repo: &R, query: ProductListQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(query).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::{MockProductReader, MockProductWriter};

    #[test]
    fn create_product_rejects_invalid_form_without_touching_repo() {
        let repo = MockProductWriter::new();
        let form = AddProductForm {
            name: String::new(),
            company_id: None,
            base_price: 80.0,
            min_retail_price: 0.0,
            hsn: None,
            cgst: 0.0,
            sgst: 0.0,
            cess: 0.0,
        };

        let result = create_product(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn get_product_maps_missing_row_to_not_found() {
        let mut repo = MockProductReader::new();

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_product(&repo, 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
