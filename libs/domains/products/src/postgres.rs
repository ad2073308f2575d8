use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, ProductFilter, UpdateProduct},
    query::FilterCriterion,
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// Lower one criterion into its typed equality expression.
fn criterion_expr(criterion: FilterCriterion) -> SimpleExpr {
    match criterion {
        FilterCriterion::Name(name) => entity::Column::Name.eq(name),
        FilterCriterion::Category(category) => entity::Column::Category.eq(category),
        FilterCriterion::Available(available) => entity::Column::Available.eq(available),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        // Empty conjunction selects everything
        let mut condition = Condition::all();
        for criterion in filter.criteria() {
            condition = condition.add(criterion_expr(criterion));
        }

        let models = entity::Entity::find()
            .filter(condition)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut product: Product = model.into();
        product.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            available: Set(product.available),
            category: Set(product.category),
        };

        let updated_model = self.base.update(active_model).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
