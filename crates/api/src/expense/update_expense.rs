use super::{owner_exists, owner_not_found};
use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_expense::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{categories::is_valid_expense_category, EntityType, Expense, ID};
use herdbook_infra::HerdbookContext;

pub async fn update_expense_controller(
    http_req: actix_web::HttpRequest,
    entity_type: web::Data<EntityType>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateExpenseUseCase {
        user_id: user.id,
        entity_type: **entity_type,
        expense_id: path.expense_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|expense| HttpResponse::Ok().json(APIResponse::new(expense)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct UpdateExpenseUseCase {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub expense_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    OwnerNotFound(EntityType),
    SupplierNotFound,
    InvalidCategory(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Expense not found".into()),
            UseCaseError::OwnerNotFound(entity_type) => {
                Self::NotFound(owner_not_found(entity_type))
            }
            UseCaseError::SupplierNotFound => Self::NotFound("Supplier not found".into()),
            UseCaseError::InvalidCategory(category) => {
                Self::BadClientData(format!("Invalid category: {}", category))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateExpenseUseCase {
    type Response = Expense;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateExpense";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let repo = ctx.repos.expenses(self.entity_type);
        let mut expense = repo
            .find(&self.expense_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        let new_owner = match self.entity_type {
            EntityType::Rider => body.rider_id,
            _ => body.horse_id,
        };
        if let Some(entity_id) = new_owner {
            if !owner_exists(self.entity_type, &entity_id, &self.user_id, ctx).await {
                return Err(UseCaseError::OwnerNotFound(self.entity_type));
            }
            expense.entity_id = entity_id;
        }
        if let Some(category) = body.category {
            if !is_valid_expense_category(self.entity_type, &category) {
                return Err(UseCaseError::InvalidCategory(category));
            }
            expense.category = category;
        }
        if let Some(supplier_id) = body.supplier_id {
            if ctx
                .repos
                .suppliers
                .find(&supplier_id, &self.user_id)
                .await
                .is_none()
            {
                return Err(UseCaseError::SupplierNotFound);
            }
            expense.supplier_id = Some(supplier_id);
        }
        if let Some(amount) = body.amount {
            expense.amount = amount;
        }
        if let Some(date) = body.date {
            expense.date = date;
        }
        if body.custom_category.is_some() {
            expense.custom_category = body.custom_category;
        }
        if body.description.is_some() {
            expense.description = body.description;
        }
        if body.provider.is_some() {
            expense.provider = body.provider;
        }
        if body.invoice_photo.is_some() {
            expense.invoice_photo = body.invoice_photo;
        }
        if let Some(invoice_photos) = body.invoice_photos {
            expense.invoice_photos = invoice_photos;
        }
        if let Some(is_recurring) = body.is_recurring {
            expense.is_recurring = is_recurring;
        }
        if let Some(create_reminder) = body.create_reminder {
            expense.create_reminder = create_reminder;
        }
        expense.updated_at = ctx.now();

        repo.save(&expense)
            .await
            .map(|_| expense)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_expense, insert_horse, setup_context_at};

    #[actix_web::test]
    async fn validates_new_category() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "herrador",
            80.0,
            "2025-03-01",
        )
        .await;

        let mut usecase = UpdateExpenseUseCase {
            user_id,
            entity_type: EntityType::Horse,
            expense_id: expense.id,
            body: RequestBody {
                category: Some("formacion".into()),
                ..Default::default()
            },
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidCategory("formacion".into())
        );

        let mut usecase = UpdateExpenseUseCase {
            user_id,
            entity_type: EntityType::Horse,
            expense_id: expense.id,
            body: RequestBody {
                amount: Some(95.5),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.amount, 95.5);
        assert_eq!(updated.category, "herrador");
    }
}
