use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Returns every category, ordered by name.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::{TestRepository, sample_category};

    #[test]
    fn lists_categories_by_name() {
        let repo = TestRepository::new(
            vec![
                sample_category(1, "Sports"),
                sample_category(2, "Books"),
                sample_category(3, "Electronics"),
            ],
            vec![],
        );

        let categories = list_categories(&repo).unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Books", "Electronics", "Sports"]);
        assert_eq!(categories[0].id, 2);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let repo = TestRepository::default();
        assert_eq!(list_categories(&repo), Ok(vec![]));
    }

    #[test]
    fn storage_failure_is_internal() {
        let repo = TestRepository::failing();
        assert_eq!(list_categories(&repo), Err(ServiceError::Internal));
    }
}
