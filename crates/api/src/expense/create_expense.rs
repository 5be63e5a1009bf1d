use super::{owner_exists, owner_not_found, subscribers::CreateRemindersOnExpenseCreated};
use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_expense::{APIResponse, RequestBody};
use herdbook_domain::{categories::is_valid_expense_category, EntityType, Expense, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_expense_controller(
    http_req: actix_web::HttpRequest,
    entity_type: web::Data<EntityType>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateExpenseUseCase {
        user_id: user.id,
        entity_type: **entity_type,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|expense| HttpResponse::Created().json(APIResponse::new(expense)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct CreateExpenseUseCase {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingOwner(EntityType),
    OwnerNotFound(EntityType),
    SupplierNotFound,
    InvalidCategory(String),
    InvalidAmount(f64),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingOwner(entity_type) => {
                Self::BadClientData(format!("{}_id is required", entity_type))
            }
            UseCaseError::OwnerNotFound(entity_type) => {
                Self::NotFound(owner_not_found(entity_type))
            }
            UseCaseError::SupplierNotFound => Self::NotFound("Supplier not found".into()),
            UseCaseError::InvalidCategory(category) => {
                Self::BadClientData(format!("Invalid category: {}", category))
            }
            UseCaseError::InvalidAmount(amount) => Self::BadClientData(format!(
                "Amount must not be negative, got: {}",
                amount
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateExpenseUseCase {
    type Response = Expense;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateExpense";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let entity_id = match self.entity_type {
            EntityType::Rider => self.body.rider_id,
            _ => self.body.horse_id,
        }
        .ok_or(UseCaseError::MissingOwner(self.entity_type))?;
        if !owner_exists(self.entity_type, &entity_id, &self.user_id, ctx).await {
            return Err(UseCaseError::OwnerNotFound(self.entity_type));
        }
        if !is_valid_expense_category(self.entity_type, &self.body.category) {
            return Err(UseCaseError::InvalidCategory(self.body.category.clone()));
        }
        if self.body.amount < 0.0 {
            return Err(UseCaseError::InvalidAmount(self.body.amount));
        }
        if let Some(supplier_id) = &self.body.supplier_id {
            if ctx
                .repos
                .suppliers
                .find(supplier_id, &self.user_id)
                .await
                .is_none()
            {
                return Err(UseCaseError::SupplierNotFound);
            }
        }

        let now = ctx.now();
        let expense = Expense {
            id: Default::default(),
            user_id: self.user_id,
            entity_type: self.entity_type,
            entity_id,
            category: self.body.category.clone(),
            custom_category: self.body.custom_category.take(),
            amount: self.body.amount,
            date: self.body.date.clone(),
            description: self.body.description.take(),
            provider: self.body.provider.take(),
            supplier_id: self.body.supplier_id,
            invoice_photo: self.body.invoice_photo.take(),
            invoice_photos: std::mem::take(&mut self.body.invoice_photos),
            is_recurring: self.body.is_recurring,
            create_reminder: self.body.create_reminder,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .expenses(self.entity_type)
            .insert(&expense)
            .await
            .map(|_| expense)
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateRemindersOnExpenseCreated)]
    }
}
